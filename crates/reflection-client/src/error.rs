//! Error types for the reflection analysis client.

use thiserror::Error;

/// Errors that can occur while talking to the analysis service.
///
/// Callers that only want a best-effort answer use
/// [`crate::ReflectionClient::analyze_reflection`], which logs these and
/// returns `None`.
#[derive(Error, Debug)]
pub enum ReflectionError {
    /// HTTP request failed (connect, timeout, body decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Service answered with a non-success status
    #[error("Analysis service error: {status} - {message}")]
    ApiError { status: u16, message: String },

    /// Base URL cannot carry the service paths
    #[error("Invalid base URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Request rejected before sending
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

/// Result type alias using ReflectionError.
pub type ReflectionResult<T> = Result<T, ReflectionError>;
