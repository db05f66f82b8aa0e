//! Twitter response parser.

use floatbar_fetch::FetchError;
use floatbar_fetch::parse::{count_from_value, parse_json};

/// Reads `.count` from a `urls/count.json` response.
pub fn parse_twitter_response(body: &str) -> Result<u64, FetchError> {
    let value = parse_json(body)?;
    if !value.is_object() {
        return Err(FetchError::InvalidResponse("expected an object".to_string()));
    }
    count_from_value(&value["count"]).ok_or(FetchError::MissingField("count"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_count() {
        let body = r#"{"count":42,"url":"http:\/\/blog.example\/hello\/"}"#;
        assert_eq!(parse_twitter_response(body).unwrap(), 42);
    }

    #[test]
    fn test_parse_missing_count() {
        let body = r#"{"url":"http:\/\/blog.example\/hello\/"}"#;
        assert!(matches!(
            parse_twitter_response(body),
            Err(FetchError::MissingField("count"))
        ));
    }
}
