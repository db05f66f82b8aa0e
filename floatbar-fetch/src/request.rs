//! Stat request descriptions.
//!
//! Strategies describe the request they need as data so the exact wire shape
//! can be checked without a network.

use serde_json::Value;
use url::form_urlencoded;

/// One HTTP request to a share-count API.
#[derive(Debug, Clone, PartialEq)]
pub enum StatRequest {
    /// `GET <url>`.
    Get {
        /// Full request URL, query included.
        url: String,
    },
    /// `POST <url>` with a JSON body and `Content-Type: application/json`.
    PostJson {
        /// Endpoint URL.
        url: String,
        /// Request body.
        body: Value,
    },
}

impl StatRequest {
    /// Creates a GET request.
    pub fn get(url: impl Into<String>) -> Self {
        Self::Get { url: url.into() }
    }

    /// Creates a JSON POST request.
    pub fn post_json(url: impl Into<String>, body: Value) -> Self {
        Self::PostJson {
            url: url.into(),
            body,
        }
    }

    /// Returns the request URL.
    pub fn url(&self) -> &str {
        match self {
            Self::Get { url } | Self::PostJson { url, .. } => url,
        }
    }

    /// Returns the HTTP method name.
    pub fn method(&self) -> &'static str {
        match self {
            Self::Get { .. } => "GET",
            Self::PostJson { .. } => "POST",
        }
    }
}

/// Percent-encodes a value for use inside a query string.
pub fn encode_query_value(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query_value() {
        assert_eq!(
            encode_query_value("https://example.com/a b?x=1&y=2"),
            "https%3A%2F%2Fexample.com%2Fa+b%3Fx%3D1%26y%3D2"
        );
        assert_eq!(encode_query_value("plain"), "plain");
    }

    #[test]
    fn test_request_accessors() {
        let get = StatRequest::get("https://example.com/count");
        assert_eq!(get.method(), "GET");
        assert_eq!(get.url(), "https://example.com/count");

        let post = StatRequest::post_json("https://example.com/rpc", serde_json::json!([]));
        assert_eq!(post.method(), "POST");
    }
}
