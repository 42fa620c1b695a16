use thiserror::Error;
use reqwest::StatusCode;

#[derive(Error, Debug)]
pub enum YouTubeError {
    #[error("Channel not found: {0}")]
    NotFound(String),
    #[error("Channel id must not be empty")]
    InvalidChannelId,
    #[error("API_KEY is not set")]
    MissingApiKey,
    #[error("Endpoint not found: {0}")]
    EndpointNotFound(String),
    #[error("Bad request: {0}")]
    BadRequest(String),
    #[error("Ratelimited")]
    Ratelimited,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Forbidden")]
    Forbidden,
    #[error("Internal server error")]
    InternalServerError,
    #[error("Unknown Status Code: {0}")]
    UnknownStatusCode(StatusCode),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl YouTubeError {
    /// Failures of the remote call itself: credentials, connectivity, or a
    /// response that could not be understood.
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            YouTubeError::MissingApiKey
                | YouTubeError::EndpointNotFound(_)
                | YouTubeError::BadRequest(_)
                | YouTubeError::Ratelimited
                | YouTubeError::Unauthorized
                | YouTubeError::Forbidden
                | YouTubeError::InternalServerError
                | YouTubeError::UnknownStatusCode(_)
                | YouTubeError::ParseError(_)
                | YouTubeError::Http(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_classification() {
        assert!(YouTubeError::Unauthorized.is_transport());
        assert!(YouTubeError::EndpointNotFound("http://localhost/channels".to_string()).is_transport());
        assert!(YouTubeError::ParseError("bad".to_string()).is_transport());
        assert!(YouTubeError::UnknownStatusCode(StatusCode::IM_A_TEAPOT).is_transport());
        assert!(!YouTubeError::NotFound("UC123".to_string()).is_transport());
        assert!(!YouTubeError::InvalidChannelId.is_transport());
    }

    #[test]
    fn test_not_found_message_names_channel() {
        let err = YouTubeError::NotFound("UC123".to_string());
        assert_eq!(err.to_string(), "Channel not found: UC123");
    }
}
