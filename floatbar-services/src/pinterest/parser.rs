//! Pinterest response parser.

use floatbar_fetch::FetchError;
use floatbar_fetch::parse::{count_from_value, parse_json, strip_jsonp};

/// JSONP callback name requested from the count endpoint.
pub const JSONP_CALLBACK: &str = "receiveCount";

/// Strips the `receiveCount(...)` wrapper and reads `.count`.
pub fn parse_pinterest_response(body: &str) -> Result<u64, FetchError> {
    let inner = strip_jsonp(body, JSONP_CALLBACK)?;
    let value = parse_json(inner)?;
    if !value.is_object() {
        return Err(FetchError::InvalidResponse("expected an object".to_string()));
    }
    count_from_value(&value["count"]).ok_or(FetchError::MissingField("count"))
}
