//! Canned transport.
//!
//! Serves fixed responses keyed by URL prefix and records every request it
//! receives. Unmatched URLs answer with status 404.

use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

use crate::error::{FetchError, HttpError};
use crate::request::StatRequest;
use crate::transport::Transport;

#[derive(Debug, Clone)]
enum CannedResponse {
    Body(String),
    Status(u16),
    Unreachable,
}

#[derive(Debug, Clone)]
struct Route {
    prefix: String,
    response: CannedResponse,
    delay: Option<Duration>,
}

/// Transport that answers from a fixed routing table.
#[derive(Debug, Default)]
pub struct CannedTransport {
    routes: Vec<Route>,
    calls: Mutex<Vec<StatRequest>>,
}

impl CannedTransport {
    /// Creates a transport with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    fn route(mut self, prefix: &str, response: CannedResponse, delay: Option<Duration>) -> Self {
        self.routes.push(Route {
            prefix: prefix.to_string(),
            response,
            delay,
        });
        self
    }

    /// Answers requests under `prefix` with `body` and status 200.
    #[must_use]
    pub fn with_body(self, prefix: &str, body: impl Into<String>) -> Self {
        self.route(prefix, CannedResponse::Body(body.into()), None)
    }

    /// Answers requests under `prefix` with `body` after `delay`.
    #[must_use]
    pub fn with_slow_body(self, prefix: &str, body: impl Into<String>, delay: Duration) -> Self {
        self.route(prefix, CannedResponse::Body(body.into()), Some(delay))
    }

    /// Answers requests under `prefix` with a bare status code.
    #[must_use]
    pub fn with_status(self, prefix: &str, status: u16) -> Self {
        self.route(prefix, CannedResponse::Status(status), None)
    }

    /// Fails requests under `prefix` as if the host could not be reached.
    #[must_use]
    pub fn with_unreachable(self, prefix: &str) -> Self {
        self.route(prefix, CannedResponse::Unreachable, None)
    }

    /// Returns every request received so far.
    pub fn calls(&self) -> Vec<StatRequest> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }

    /// Returns the number of requests received so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().map(|c| c.len()).unwrap_or_default()
    }

    fn record(&self, request: &StatRequest) {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(request.clone());
        }
    }
}

#[async_trait]
impl Transport for CannedTransport {
    async fn send(&self, request: &StatRequest) -> Result<String, FetchError> {
        self.record(request);

        let Some(route) = self
            .routes
            .iter()
            .find(|r| request.url().starts_with(&r.prefix))
        else {
            debug!(url = %request.url(), "No canned route");
            return Err(FetchError::Status(404));
        };

        if let Some(delay) = route.delay {
            tokio::time::sleep(delay).await;
        }

        match &route.response {
            CannedResponse::Body(body) => Ok(body.clone()),
            CannedResponse::Status(status) => Err(FetchError::Status(*status)),
            CannedResponse::Unreachable => Err(HttpError::InvalidUrl(format!(
                "unreachable host: {}",
                request.url()
            ))
            .into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_routes_by_prefix_and_records_calls() {
        let transport = CannedTransport::new()
            .with_body("https://a.example/", "{\"count\":1}")
            .with_status("https://b.example/", 503);

        let ok = transport.send(&StatRequest::get("https://a.example/x")).await;
        assert_eq!(ok.unwrap(), "{\"count\":1}");

        let err = transport.send(&StatRequest::get("https://b.example/x")).await;
        assert!(matches!(err, Err(FetchError::Status(503))));

        let missing = transport.send(&StatRequest::get("https://c.example/")).await;
        assert!(matches!(missing, Err(FetchError::Status(404))));

        assert_eq!(transport.call_count(), 3);
        assert_eq!(transport.calls()[1].url(), "https://b.example/x");
    }

    #[tokio::test]
    async fn test_unreachable_is_network_error() {
        let transport = CannedTransport::new().with_unreachable("https://down.example/");
        let err = transport
            .send(&StatRequest::get("https://down.example/"))
            .await
            .unwrap_err();
        assert!(err.is_network());
    }
}
