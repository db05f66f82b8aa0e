//! Stat strategy trait.
//!
//! A strategy knows how one service exposes its share count: the request to
//! send for a post URL and how to read the count out of the response body.

use async_trait::async_trait;
use floatbar_core::ServiceId;
use tracing::debug;

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::request::StatRequest;

// ============================================================================
// Stat Strategy Trait
// ============================================================================

/// Share-count lookup for one service.
///
/// ## Implementing a Strategy
///
/// ```ignore
/// struct ExampleStrategy;
///
/// #[async_trait]
/// impl StatStrategy for ExampleStrategy {
///     fn service(&self) -> ServiceId {
///         ServiceId::Twitter
///     }
///
///     fn request(&self, post_url: &str) -> StatRequest {
///         StatRequest::get(format!("https://count.example/?url={}", encode_query_value(post_url)))
///     }
///
///     fn parse(&self, body: &str) -> Result<u64, FetchError> {
///         let value = parse_json(body)?;
///         count_from_value(&value["count"]).ok_or(FetchError::MissingField("count"))
///     }
/// }
/// ```
#[async_trait]
pub trait StatStrategy: Send + Sync {
    /// The service this strategy counts shares for.
    fn service(&self) -> ServiceId;

    /// Identifier used in logs (e.g. `twitter.count`).
    fn id(&self) -> String {
        format!("{}.count", self.service())
    }

    /// Builds the request for a post URL.
    fn request(&self, post_url: &str) -> StatRequest;

    /// Extracts the count from a response body.
    fn parse(&self, body: &str) -> Result<u64, FetchError>;

    /// Fetches the count for a post URL. Makes exactly one request.
    async fn fetch(&self, ctx: &FetchContext, post_url: &str) -> Result<u64, FetchError> {
        let request = self.request(post_url);
        debug!(strategy = %self.id(), method = request.method(), url = %request.url(), "Sending stat request");
        let body = ctx.transport.send(&request).await?;
        self.parse(&body)
    }
}
