use reqwest::Client;
use serde::Deserialize;
use crate::config::Config;
use crate::errors::YouTubeError;

const PARTS: &str = "snippet,statistics";
const FIELD_MASK: &str = "items(id,snippet(title,description),statistics(subscriberCount,viewCount,videoCount,hiddenSubscriberCount))";

#[derive(Debug, Deserialize)]
struct ApiResponse {
    items: Option<Vec<ApiChannel>>
}

#[derive(Debug, Deserialize)]
struct ApiChannel {
    snippet: Option<ChannelSnippet>,
    statistics: Option<ChannelStatistics>,
}

#[derive(Debug, Deserialize)]
struct ChannelSnippet {
    title: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ChannelStatistics {
    #[serde(rename = "viewCount")]
    view_count: Option<String>,
    #[serde(rename = "subscriberCount")]
    subscriber_count: Option<String>,
    #[serde(rename = "hiddenSubscriberCount", default)]
    hidden_subscriber_count: bool,
    #[serde(rename = "videoCount")]
    video_count: Option<String>
}

#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: Error,
}

#[derive(Debug, Deserialize)]
struct Error {
    message: String,
}

/// Basic info and statistics of one channel, as returned by `channels.list`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelRecord {
    pub title: String,
    pub description: String,
    pub subscriber_count: i64,
    pub video_count: i64,
    pub view_count: i64,
}

/// The provider reports counters as decimal strings.
fn parse_count(field: &str, value: Option<&str>) -> Result<i64, YouTubeError> {
    let value = value.ok_or_else(|| YouTubeError::ParseError(format!("missing {}", field)))?;
    value
        .trim()
        .parse::<i64>()
        .map_err(|e| YouTubeError::ParseError(format!("invalid {} {:?}: {}", field, value, e)))
}

impl TryFrom<ApiChannel> for ChannelRecord {
    type Error = YouTubeError;

    fn try_from(channel: ApiChannel) -> Result<Self, Self::Error> {
        let snippet = channel.snippet
            .ok_or_else(|| YouTubeError::ParseError("missing snippet".to_string()))?;
        let title = snippet.title
            .ok_or_else(|| YouTubeError::ParseError("missing title".to_string()))?;
        let statistics = channel.statistics
            .ok_or_else(|| YouTubeError::ParseError("missing statistics".to_string()))?;

        let subscriber_count = match (&statistics.subscriber_count, statistics.hidden_subscriber_count) {
            (None, true) => 0,
            (count, _) => parse_count("subscriberCount", count.as_deref())?,
        };

        Ok(ChannelRecord {
            title,
            description: snippet.description.unwrap_or_default(),
            subscriber_count,
            video_count: parse_count("videoCount", statistics.video_count.as_deref())?,
            view_count: parse_count("viewCount", statistics.view_count.as_deref())?,
        })
    }
}

async fn error_message(resp: reqwest::Response) -> Result<String, YouTubeError> {
    let error_response: ErrorResponse = resp
        .json()
        .await
        .map_err(|e| YouTubeError::ParseError(e.to_string()))?;
    Ok(error_response.error.message)
}

/// Looks up a single channel by id. `Ok(None)` means the provider answered
/// but has no channel with that id.
pub async fn get_channel(
    client: &Client,
    config: &Config,
    channel_id: &str,
) -> Result<Option<ChannelRecord>, YouTubeError> {
    let url = format!("{}/channels", config.base_url);

    tracing::debug!(channel_id, url = %url, "requesting channel");

    let resp = client
        .get(&url)
        .query(&[("part", PARTS), ("id", channel_id)])
        .header("X-Goog-Api-Key", &config.api_key)
        .header("X-Goog-Fieldmask", FIELD_MASK)
        .send()
        .await?;

    match resp.status() {
        reqwest::StatusCode::TOO_MANY_REQUESTS => return Err(YouTubeError::Ratelimited),
        reqwest::StatusCode::BAD_REQUEST => {
            return Err(YouTubeError::BadRequest(error_message(resp).await?));
        },
        reqwest::StatusCode::FORBIDDEN => {
            if error_message(resp).await?.starts_with("The request cannot be completed because you have exceeded your") {
                return Err(YouTubeError::Ratelimited);
            }
            return Err(YouTubeError::Forbidden);
        },
        // channels.list answers an unknown id with 200 and no items, so a 404
        // means the base URL or path is wrong.
        reqwest::StatusCode::NOT_FOUND => return Err(YouTubeError::EndpointNotFound(url)),
        reqwest::StatusCode::UNAUTHORIZED => return Err(YouTubeError::Unauthorized),
        reqwest::StatusCode::INTERNAL_SERVER_ERROR | reqwest::StatusCode::SERVICE_UNAVAILABLE => {
            return Err(YouTubeError::InternalServerError);
        },
        reqwest::StatusCode::OK => (),
        status => return Err(YouTubeError::UnknownStatusCode(status)),
    }

    let api_response: ApiResponse = resp
        .json()
        .await
        .map_err(|e| YouTubeError::ParseError(e.to_string()))?;

    api_response.items
        .and_then(|items| items.into_iter().next())
        .map(ChannelRecord::try_from)
        .transpose()
}
