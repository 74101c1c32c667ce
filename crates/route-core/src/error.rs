//! Common error types for the route pipeline

use thiserror::Error;

/// Result type for pipeline and store operations
pub type RouteResult<T> = Result<T, RouteError>;

/// Errors that can occur while processing or persisting a batch
#[derive(Debug, Error)]
pub enum RouteError {
    /// Group size that cannot advance the chunk window
    #[error("Invalid group size: {0} (must be at least 2)")]
    InvalidGroupSize(usize),

    /// IO error while writing or reading the artifact
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl RouteError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            RouteError::InvalidGroupSize(_) => 400,
            RouteError::Io(_) => 500,
            RouteError::Json(_) => 500,
            RouteError::Internal(_) => 500,
        }
    }
}
