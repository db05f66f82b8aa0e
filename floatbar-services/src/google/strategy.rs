//! Google+ stat strategy.

use async_trait::async_trait;
use floatbar_core::ServiceId;
use floatbar_fetch::{FetchError, StatRequest, StatStrategy};
use serde_json::{Value, json};

use super::parser::parse_google_response;

pub(crate) const RPC_ENDPOINT: &str = "https://clients6.google.com/rpc";

/// Builds the `pos.plusones.get` batch body for a post URL.
pub fn plusones_body(post_url: &str) -> Value {
    json!([{
        "method": "pos.plusones.get",
        "id": "p",
        "params": {
            "nolog": true,
            "id": post_url,
            "source": "widget",
            "userId": "@viewer",
            "groupId": "@self"
        },
        "jsonrpc": "2.0",
        "key": "p",
        "apiVersion": "v1"
    }])
}

/// Looks up the +1 count through JSON-RPC.
#[derive(Debug, Default)]
pub struct GoogleStrategy;

impl GoogleStrategy {
    /// Creates a new Google+ strategy.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StatStrategy for GoogleStrategy {
    fn service(&self) -> ServiceId {
        ServiceId::Google
    }

    fn request(&self, post_url: &str) -> StatRequest {
        StatRequest::post_json(RPC_ENDPOINT, plusones_body(post_url))
    }

    fn parse(&self, body: &str) -> Result<u64, FetchError> {
        parse_google_response(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_shape() {
        let request = GoogleStrategy::new().request("https://blog.example/hello/");
        let StatRequest::PostJson { url, body } = request else {
            panic!("expected a POST");
        };
        assert_eq!(url, "https://clients6.google.com/rpc");
        assert_eq!(
            body,
            serde_json::from_str::<Value>(
                r#"[{"method":"pos.plusones.get","id":"p","params":{"nolog":true,"id":"https://blog.example/hello/","source":"widget","userId":"@viewer","groupId":"@self"},"jsonrpc":"2.0","key":"p","apiVersion":"v1"}]"#
            )
            .unwrap()
        );
    }
}
