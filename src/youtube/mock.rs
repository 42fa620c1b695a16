//! In-process stand-in for the `channels.list` endpoint.

use std::collections::HashMap;
use std::sync::Arc;
use axum::{
    extract::{Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json,
    Router,
};
use serde_json::{json, Value};
use crate::config::Config;

pub const TEST_API_KEY: &str = "test-api-key";

struct Canned {
    status: StatusCode,
    content_type: &'static str,
    body: String,
}

fn bad_request(message: &str) -> Response {
    (StatusCode::BAD_REQUEST, Json(json!({
        "error": { "code": 400, "message": message }
    }))).into_response()
}

async fn channels_handler(
    State(canned): State<Arc<Canned>>,
    headers: HeaderMap,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    if headers.get("x-goog-api-key").and_then(|v| v.to_str().ok()) != Some(TEST_API_KEY) {
        return bad_request("API key not valid. Please pass a valid API key.");
    }
    if params.get("part").map(String::as_str) != Some("snippet,statistics") {
        return bad_request("Required parameter: part");
    }
    if params.get("id").map_or(true, |id| id.is_empty()) {
        return bad_request("No filter selected.");
    }

    (
        canned.status,
        [(header::CONTENT_TYPE, canned.content_type)],
        canned.body.clone(),
    )
        .into_response()
}

/// Serves `body` with `status` for every valid request and returns a config
/// pointing at it.
pub async fn spawn_provider(status: StatusCode, body: Value) -> Config {
    serve(Canned {
        status,
        content_type: "application/json; charset=UTF-8",
        body: body.to_string(),
    })
    .await
}

/// Like [`spawn_provider`], for bodies that are not JSON.
pub async fn spawn_provider_text(status: StatusCode, body: &str) -> Config {
    serve(Canned {
        status,
        content_type: "text/html; charset=UTF-8",
        body: body.to_string(),
    })
    .await
}

async fn serve(canned: Canned) -> Config {
    let app = Router::new()
        .route("/channels", get(channels_handler))
        .with_state(Arc::new(canned));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Config::new(TEST_API_KEY).with_base_url(format!("http://{}", addr))
}

pub fn channel_body(
    id: &str,
    title: &str,
    description: &str,
    subscribers: &str,
    videos: &str,
    views: &str,
) -> Value {
    json!({
        "kind": "youtube#channelListResponse",
        "items": [{
            "id": id,
            "snippet": { "title": title, "description": description },
            "statistics": {
                "subscriberCount": subscribers,
                "hiddenSubscriberCount": false,
                "videoCount": videos,
                "viewCount": views
            }
        }]
    })
}
