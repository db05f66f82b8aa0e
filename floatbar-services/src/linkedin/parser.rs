//! LinkedIn response parser.

use floatbar_fetch::FetchError;
use floatbar_fetch::parse::{count_from_value, parse_json};

/// Reads `.count` from a `countserv` response.
pub fn parse_linkedin_response(body: &str) -> Result<u64, FetchError> {
    let value = parse_json(body)?;
    if !value.is_object() {
        return Err(FetchError::InvalidResponse("expected an object".to_string()));
    }
    count_from_value(&value["count"]).ok_or(FetchError::MissingField("count"))
}
