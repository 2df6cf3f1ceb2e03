use axum::http::StatusCode;
use std::time::Duration;

#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: err.to_string(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status, self.message).into_response()
    }
}

pub const FALLBACK_API_MESSAGE: &str = "Failed to summarize thread";

/// Failure of a call to the summarization service. `Display` is the text
/// shown in the error banner.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{detail}")]
    Server { status: u16, detail: String },

    #[error("Could not reach the summarization service: {0}")]
    Transport(String),

    #[error("The summarization service returned an unreadable response: {0}")]
    Decode(String),

    #[error("The summarization service did not respond within {}s", .0.as_secs())]
    Timeout(Duration),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("failed to write store: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode store: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_error_displays_detail_verbatim() {
        let err = ApiError::Server {
            status: 429,
            detail: "rate limited upstream".to_string(),
        };
        assert_eq!(err.to_string(), "rate limited upstream");
    }

    #[test]
    fn timeout_mentions_seconds() {
        let err = ApiError::Timeout(Duration::from_secs(30));
        assert!(err.to_string().contains("30s"));
    }
}
