//! Facebook response parser.

use floatbar_fetch::FetchError;
use floatbar_fetch::parse::{count_from_value, parse_json};

/// Reads `[0].total_count` from an FQL response.
pub fn parse_facebook_response(body: &str) -> Result<u64, FetchError> {
    let value = parse_json(body)?;
    let row = value
        .as_array()
        .and_then(|rows| rows.first())
        .ok_or_else(|| FetchError::InvalidResponse("expected a non-empty array".to_string()))?;

    count_from_value(&row["total_count"]).ok_or(FetchError::MissingField("total_count"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fql_row() {
        let body = r#"[{"total_count":1234}]"#;
        assert_eq!(parse_facebook_response(body).unwrap(), 1234);
    }

    #[test]
    fn test_parse_error_object() {
        let body = r#"{"error_code":606,"error_msg":"limit"}"#;
        assert!(matches!(
            parse_facebook_response(body),
            Err(FetchError::InvalidResponse(_))
        ));
    }
}
