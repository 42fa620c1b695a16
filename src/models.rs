use std::cmp::Ordering;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use reqwest::Client;
use serde::Serialize;
use crate::config::Config;
use crate::errors::YouTubeError;
use crate::youtube::channels::{get_channel, ChannelRecord};

pub const CHANNEL_URL_PREFIX: &str = "https://www.youtube.com/channel/";

pub fn channel_url(channel_id: &str) -> String {
    format!("{}{}", CHANNEL_URL_PREFIX, channel_id)
}

/// A point-in-time capture of a channel's metadata and statistics.
///
/// A snapshot only exists once its lookup succeeded, and it is never refreshed.
/// Fields are private, so the id cannot be reassigned after construction:
///
/// ```compile_fail
/// # fn reassign(snapshot: &mut channel_snapshot::ChannelSnapshot) {
/// snapshot.id = "UCother".to_string();
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelSnapshot {
    id: String,
    title: String,
    description: String,
    url: String,
    #[serde(rename = "subscribers_count")]
    subscriber_count: i64,
    video_count: i64,
    view_count: i64,
}

impl ChannelSnapshot {
    /// Fetches basic info and statistics for `channel_id` with one request.
    pub async fn fetch(
        client: &Client,
        config: &Config,
        channel_id: &str,
    ) -> Result<Self, YouTubeError> {
        if channel_id.trim().is_empty() {
            return Err(YouTubeError::InvalidChannelId);
        }

        match get_channel(client, config, channel_id).await? {
            Some(record) => Ok(Self::from_record(channel_id, record)),
            None => Err(YouTubeError::NotFound(channel_id.to_string())),
        }
    }

    pub(crate) fn from_record(channel_id: &str, record: ChannelRecord) -> Self {
        Self {
            id: channel_id.to_string(),
            title: record.title,
            description: record.description,
            url: channel_url(channel_id),
            subscriber_count: record.subscriber_count,
            video_count: record.video_count,
            view_count: record.view_count,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn subscriber_count(&self) -> i64 {
        self.subscriber_count
    }

    pub fn video_count(&self) -> i64 {
        self.video_count
    }

    pub fn view_count(&self) -> i64 {
        self.view_count
    }

    pub fn subscriber_sum(&self, other: &ChannelSnapshot) -> i64 {
        self.subscriber_count.saturating_add(other.subscriber_count)
    }

    /// `self` minus `other`; negative when `other` has more subscribers.
    pub fn subscriber_delta(&self, other: &ChannelSnapshot) -> i64 {
        self.subscriber_count.saturating_sub(other.subscriber_count)
    }

    pub fn compare_by_subscribers(&self, other: &ChannelSnapshot) -> Ordering {
        self.subscriber_count.cmp(&other.subscriber_count)
    }

    pub fn has_more_subscribers_than(&self, other: &ChannelSnapshot) -> bool {
        self.compare_by_subscribers(other) == Ordering::Greater
    }

    pub fn has_at_least_as_many_subscribers_as(&self, other: &ChannelSnapshot) -> bool {
        self.compare_by_subscribers(other) != Ordering::Less
    }

    pub fn to_json_string(&self) -> Result<String, YouTubeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Writes the snapshot as a single JSON object, replacing `path` if it exists.
    pub fn export_json(&self, path: impl AsRef<Path>) -> Result<(), YouTubeError> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

impl fmt::Display for ChannelSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.url)
    }
}
