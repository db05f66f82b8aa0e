//! Facebook stat strategy.

use async_trait::async_trait;
use floatbar_core::ServiceId;
use floatbar_fetch::{FetchError, StatRequest, StatStrategy, encode_query_value};

use super::parser::parse_facebook_response;

pub(crate) const FQL_ENDPOINT: &str = "https://api.facebook.com/method/fql.query";

/// Looks up the total share count through FQL.
#[derive(Debug, Default)]
pub struct FacebookStrategy;

impl FacebookStrategy {
    /// Creates a new Facebook strategy.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StatStrategy for FacebookStrategy {
    fn service(&self) -> ServiceId {
        ServiceId::Facebook
    }

    fn request(&self, post_url: &str) -> StatRequest {
        StatRequest::get(format!(
            "{FQL_ENDPOINT}?format=json&query=SELECT%20total_count%20FROM%20link_stat%20WHERE%20url=%22{}%22",
            encode_query_value(post_url)
        ))
    }

    fn parse(&self, body: &str) -> Result<u64, FetchError> {
        parse_facebook_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = FacebookStrategy::new().request("https://blog.example/hello/");
        assert_eq!(
            request,
            StatRequest::get(
                "https://api.facebook.com/method/fql.query?format=json&query=SELECT%20total_count%20FROM%20link_stat%20WHERE%20url=%22https%3A%2F%2Fblog.example%2Fhello%2F%22"
            )
        );
    }
}
