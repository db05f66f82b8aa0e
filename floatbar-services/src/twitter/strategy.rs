//! Twitter stat strategy.

use async_trait::async_trait;
use floatbar_core::ServiceId;
use floatbar_fetch::{FetchError, StatRequest, StatStrategy, encode_query_value};

use super::parser::parse_twitter_response;

pub(crate) const COUNT_ENDPOINT: &str = "http://urls.api.twitter.com/1/urls/count.json";

/// Looks up the tweet count for a URL.
#[derive(Debug, Default)]
pub struct TwitterStrategy;

impl TwitterStrategy {
    /// Creates a new Twitter strategy.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StatStrategy for TwitterStrategy {
    fn service(&self) -> ServiceId {
        ServiceId::Twitter
    }

    fn request(&self, post_url: &str) -> StatRequest {
        StatRequest::get(format!("{COUNT_ENDPOINT}?url={}", encode_query_value(post_url)))
    }

    fn parse(&self, body: &str) -> Result<u64, FetchError> {
        parse_twitter_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = TwitterStrategy::new().request("https://blog.example/hello/");
        assert_eq!(
            request.url(),
            "http://urls.api.twitter.com/1/urls/count.json?url=https%3A%2F%2Fblog.example%2Fhello%2F"
        );
        assert_eq!(request.method(), "GET");
    }
}
