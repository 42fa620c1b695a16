use std::env;
use crate::errors::YouTubeError;

pub const DEFAULT_BASE_URL: &str = "https://youtube.googleapis.com/youtube/v3";

/// Credentials and endpoint for the YouTube Data API.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
}

impl Config {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Reads `API_KEY` and `YOUTUBE_API_BASE_URL`, loading a `.env` file first
    /// if one exists.
    pub fn from_env() -> Result<Self, YouTubeError> {
        dotenvy::dotenv().ok();
        Self::from_vars(
            env::var("API_KEY").ok(),
            env::var("YOUTUBE_API_BASE_URL").ok(),
        )
    }

    fn from_vars(api_key: Option<String>, base_url: Option<String>) -> Result<Self, YouTubeError> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or(YouTubeError::MissingApiKey)?;

        let config = Self::new(api_key.trim());
        Ok(match base_url.filter(|url| !url.trim().is_empty()) {
            Some(url) => config.with_base_url(url.trim()),
            None => config,
        })
    }
}
