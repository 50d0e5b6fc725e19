/*
[INPUT]:  Error sources (HTTP transport, API error responses, serialization)
[OUTPUT]: Structured error types with status context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the Lockstep SDK
#[derive(Error, Debug)]
pub enum LockstepError {
    /// HTTP request failed before a response was produced
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status code
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl LockstepError {
    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        LockstepError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    /// HTTP status code of the error, if the server produced one
    pub fn status(&self) -> Option<u16> {
        match self {
            LockstepError::Api { status, .. } => Some(*status),
            LockstepError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Check if the error is a server-side failure (5xx)
    pub fn is_server_error(&self) -> bool {
        matches!(self.status(), Some(status) if status >= 500)
    }
}

/// Result type alias for Lockstep operations
pub type Result<T> = std::result::Result<T, LockstepError>;
