//! HTTP client with tracing, timeout, and domain allowlist.
//!
//! Live transport for count requests. Every request is bounded by the client
//! timeout and, when an allowlist is set, may only reach the service APIs.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

use crate::error::{FetchError, HttpError};
use crate::request::StatRequest;
use crate::transport::Transport;

/// Default request timeout.
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// User agent string for floatbar.
const USER_AGENT: &str = concat!("floatbar/", env!("CARGO_PKG_VERSION"));

// ============================================================================
// HTTP Client
// ============================================================================

/// HTTP client wrapper with tracing, timeout, and domain allowlist.
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
    allowed_domains: Option<Vec<String>>,
}

impl HttpClient {
    /// Creates a new HTTP client with default settings.
    pub fn new() -> Self {
        Self::with_timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Creates a new HTTP client with a custom timeout.
    ///
    /// # Panics
    ///
    /// Panics if the TLS backend cannot be initialised.
    pub fn with_timeout(timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                panic!("cannot build HTTP client (TLS backend unavailable): {e}")
            });

        Self {
            inner: client,
            allowed_domains: None,
        }
    }

    /// Restricts requests to the given domains (and their subdomains).
    #[must_use]
    pub fn allow_domains(mut self, domains: Vec<String>) -> Self {
        self.allowed_domains = Some(domains);
        self
    }

    /// Rejects URLs whose host is outside the allowlist.
    ///
    /// A host matches an allowed domain exactly or as a subdomain of it.
    fn check_host(&self, url: &str) -> Result<(), HttpError> {
        let Some(allowed) = &self.allowed_domains else {
            return Ok(());
        };

        let parsed = Url::parse(url).map_err(|e| HttpError::InvalidUrl(e.to_string()))?;
        let host = parsed
            .host_str()
            .ok_or_else(|| HttpError::InvalidUrl(format!("{url} has no host")))?;

        let suffix_match = |domain: &String| {
            host.strip_suffix(domain.as_str())
                .is_some_and(|rest| rest.is_empty() || rest.ends_with('.'))
        };
        if allowed.iter().any(suffix_match) {
            Ok(())
        } else {
            Err(HttpError::DomainNotAllowed(host.to_string()))
        }
    }

    /// Sends one count request and returns the raw response.
    #[instrument(skip(self, request), fields(method = request.method(), url = %request.url()))]
    pub async fn execute(&self, request: &StatRequest) -> Result<Response, HttpError> {
        self.check_host(request.url())?;

        let builder = match request {
            StatRequest::Get { url } => self.inner.get(url),
            StatRequest::PostJson { url, body } => self
                .inner
                .post(url)
                .header(header::CONTENT_TYPE, "application/json")
                .json(body),
        };

        let response = builder.send().await?;
        debug!(status = %response.status(), "Count endpoint answered");
        Ok(response)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for HttpClient {
    async fn send(&self, request: &StatRequest) -> Result<String, FetchError> {
        let response = self.execute(request).await?;
        require_ok(response.status())?;
        let body = response.text().await.map_err(HttpError::from)?;
        Ok(body)
    }
}

/// Only `200 OK` carries a count; every other status is a failed fetch.
fn require_ok(status: StatusCode) -> Result<(), FetchError> {
    if status == StatusCode::OK {
        Ok(())
    } else {
        Err(FetchError::Status(status.as_u16()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_allowlist() {
        let client = HttpClient::new().allow_domains(vec![
            "api.facebook.com".to_string(),
            "linkedin.com".to_string(),
        ]);

        assert!(client.check_host("https://api.facebook.com/method/fql.query").is_ok());

        assert!(client.check_host("http://www.linkedin.com/countserv/count/share").is_ok());

        assert!(client.check_host("https://evil.com/steal").is_err());
        assert!(client.check_host("https://notlinkedin.com/").is_err());
    }

    #[test]
    fn test_only_200_counts_as_success() {
        assert!(require_ok(StatusCode::OK).is_ok());
        assert!(matches!(
            require_ok(StatusCode::NO_CONTENT),
            Err(FetchError::Status(204))
        ));
        assert!(matches!(
            require_ok(StatusCode::SERVICE_UNAVAILABLE),
            Err(FetchError::Status(503))
        ));
    }

    #[test]
    fn test_no_domain_restrictions() {
        let client = HttpClient::new();
        assert!(client.check_host("https://any.domain.com").is_ok());
    }

    #[test]
    fn test_invalid_url() {
        let client = HttpClient::new().allow_domains(vec!["example.com".to_string()]);
        assert!(matches!(
            client.check_host("not-a-valid-url"),
            Err(HttpError::InvalidUrl(_))
        ));
    }

    #[tokio::test]
    async fn test_disallowed_domain_fails_before_network() {
        let client = HttpClient::new().allow_domains(vec!["example.com".to_string()]);
        let result = client.send(&StatRequest::get("https://evil.com/count")).await;

        assert!(matches!(
            result,
            Err(FetchError::Transport(HttpError::DomainNotAllowed(ref host))) if host == "evil.com"
        ));
    }
}
