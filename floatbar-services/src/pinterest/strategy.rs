//! Pinterest stat strategy.

use async_trait::async_trait;
use floatbar_core::ServiceId;
use floatbar_fetch::{FetchError, StatRequest, StatStrategy, encode_query_value};

use super::parser::{JSONP_CALLBACK, parse_pinterest_response};

pub(crate) const COUNT_ENDPOINT: &str = "http://api.pinterest.com/v1/urls/count.json";

/// Looks up the pin count for a URL.
#[derive(Debug, Default)]
pub struct PinterestStrategy;

impl PinterestStrategy {
    /// Creates a new Pinterest strategy.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StatStrategy for PinterestStrategy {
    fn service(&self) -> ServiceId {
        ServiceId::Pinterest
    }

    fn request(&self, post_url: &str) -> StatRequest {
        StatRequest::get(format!(
            "{COUNT_ENDPOINT}?callback={JSONP_CALLBACK}&url={}",
            encode_query_value(post_url)
        ))
    }

    fn parse(&self, body: &str) -> Result<u64, FetchError> {
        parse_pinterest_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = PinterestStrategy::new().request("https://blog.example/hello/");
        assert_eq!(
            request.url(),
            "http://api.pinterest.com/v1/urls/count.json?callback=receiveCount&url=https%3A%2F%2Fblog.example%2Fhello%2F"
        );
    }
}
