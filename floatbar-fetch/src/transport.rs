//! Transport abstraction.

use async_trait::async_trait;

use crate::error::FetchError;
use crate::request::StatRequest;

/// Executes stat requests.
///
/// Implementations return the response body for a success status and an
/// error for anything else. They must not retry.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Sends a request and returns the response body.
    async fn send(&self, request: &StatRequest) -> Result<String, FetchError>;
}
