//! Google+ response parser.

use floatbar_fetch::FetchError;
use floatbar_fetch::parse::{count_from_value, parse_json};

/// Reads `[0].result.metadata.globalCounts.count` from a JSON-RPC batch
/// response.
pub fn parse_google_response(body: &str) -> Result<u64, FetchError> {
    let value = parse_json(body)?;
    let entry = value
        .as_array()
        .and_then(|entries| entries.first())
        .ok_or_else(|| FetchError::InvalidResponse("expected a non-empty array".to_string()))?;

    if let Some(error) = entry.get("error") {
        return Err(FetchError::InvalidResponse(format!("rpc error: {error}")));
    }

    count_from_value(&entry["result"]["metadata"]["globalCounts"]["count"])
        .ok_or(FetchError::MissingField("result.metadata.globalCounts.count"))
}
