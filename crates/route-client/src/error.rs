//! Error types for route client operations

use thiserror::Error;

/// Result type alias for route client operations
pub type Result<T> = std::result::Result<T, RouteClientError>;

/// Errors that can occur during route client operations
#[derive(Error, Debug)]
pub enum RouteClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request body rejected by server validation (422)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Server returned an error response
    #[error("Server error {status}: {message}")]
    ServerError { status: u16, message: String },

    /// Failed to parse response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Timeout
    #[error("Request timed out")]
    Timeout,
}

impl RouteClientError {
    /// Create a server error from status code and message
    pub fn server_error(status: u16, message: impl Into<String>) -> Self {
        Self::ServerError {
            status,
            message: message.into(),
        }
    }

    /// HTTP status of the failed response, if the server answered
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Validation(_) => Some(422),
            Self::ServerError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
