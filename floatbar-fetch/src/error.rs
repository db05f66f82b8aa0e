//! Fetch error types.

use thiserror::Error;

// ============================================================================
// Main Fetch Error
// ============================================================================

/// Error type for share-count fetches.
///
/// Fetch errors never reach the rendered page: the pipeline logs them and
/// records a count of 0 for the failing service.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure.
    #[error("Transport error: {0}")]
    Transport(#[from] HttpError),

    /// Request timed out.
    #[error("Request timed out after {0} ms")]
    Timeout(u64),

    /// Non-success HTTP status.
    #[error("Unexpected status code: {0}")]
    Status(u16),

    /// Body is not in the expected shape.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Body parsed but the count field is absent or not a number.
    #[error("Missing count field: {0}")]
    MissingField(&'static str),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl FetchError {
    /// Returns true if the failure happened before a response was received.
    pub fn is_network(&self) -> bool {
        matches!(self, FetchError::Transport(_) | FetchError::Timeout(_))
    }
}

// ============================================================================
// HTTP Error
// ============================================================================

/// HTTP-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Request error.
    #[error("Request error: {0}")]
    Request(reqwest::Error),

    /// Domain not allowed.
    #[error("Domain not allowed: {0}")]
    DomainNotAllowed(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// Timeout.
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for HttpError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            HttpError::Timeout
        } else {
            HttpError::Request(err)
        }
    }
}
