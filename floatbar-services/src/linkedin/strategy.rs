//! LinkedIn stat strategy.

use async_trait::async_trait;
use floatbar_core::ServiceId;
use floatbar_fetch::{FetchError, StatRequest, StatStrategy, encode_query_value};

use super::parser::parse_linkedin_response;

pub(crate) const COUNT_ENDPOINT: &str = "http://www.linkedin.com/countserv/count/share";

/// Looks up the share count through `countserv`.
#[derive(Debug, Default)]
pub struct LinkedinStrategy;

impl LinkedinStrategy {
    /// Creates a new LinkedIn strategy.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl StatStrategy for LinkedinStrategy {
    fn service(&self) -> ServiceId {
        ServiceId::Linkedin
    }

    fn request(&self, post_url: &str) -> StatRequest {
        StatRequest::get(format!(
            "{COUNT_ENDPOINT}?url={}&format=json",
            encode_query_value(post_url)
        ))
    }

    fn parse(&self, body: &str) -> Result<u64, FetchError> {
        parse_linkedin_response(body)
    }
}
