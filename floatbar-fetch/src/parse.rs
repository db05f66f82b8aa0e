//! Helpers shared by the share-count response parsers.

use serde_json::Value;

use crate::error::FetchError;

/// Parses a response body as JSON.
pub fn parse_json(body: &str) -> Result<Value, FetchError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(FetchError::InvalidResponse("empty body".to_string()));
    }
    Ok(serde_json::from_str(trimmed)?)
}

/// Reads a count from a JSON value.
///
/// Accepts non-negative integers, floats (truncated) and numeric strings.
/// Anything else yields `None`.
pub fn count_from_value(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64().or_else(|| {
            n.as_f64()
                .filter(|f| f.is_finite() && *f >= 0.0)
                .map(truncate_float)
        }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<u64>().ok().or_else(|| {
                s.parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite() && *f >= 0.0)
                    .map(truncate_float)
            })
        }
        _ => None,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn truncate_float(f: f64) -> u64 {
    f.trunc() as u64
}

/// Strips a JSONP wrapper of the form `callback(...)` with an optional
/// trailing semicolon.
pub fn strip_jsonp<'a>(body: &'a str, callback: &str) -> Result<&'a str, FetchError> {
    let trimmed = body.trim();
    let inner = trimmed
        .strip_prefix(callback)
        .map(str::trim_start)
        .and_then(|rest| rest.strip_prefix('('))
        .ok_or_else(|| FetchError::InvalidResponse(format!("missing {callback}( wrapper")))?;

    let inner = inner.trim_end();
    let inner = inner.strip_suffix(';').unwrap_or(inner).trim_end();
    inner
        .strip_suffix(')')
        .ok_or_else(|| FetchError::InvalidResponse("unterminated JSONP wrapper".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_count_from_value() {
        assert_eq!(count_from_value(&json!(42)), Some(42));
        assert_eq!(count_from_value(&json!(0)), Some(0));
        assert_eq!(count_from_value(&json!(12.9)), Some(12));
        assert_eq!(count_from_value(&json!("17")), Some(17));
        assert_eq!(count_from_value(&json!(" 3.0 ")), Some(3));
        assert_eq!(count_from_value(&json!(-1)), None);
        assert_eq!(count_from_value(&json!("abc")), None);
        assert_eq!(count_from_value(&json!(null)), None);
        assert_eq!(count_from_value(&json!({"count": 1})), None);
    }

    #[test]
    fn test_strip_jsonp() {
        assert_eq!(
            strip_jsonp("receiveCount({\"count\":5})", "receiveCount").unwrap(),
            "{\"count\":5}"
        );
        assert_eq!(
            strip_jsonp("  receiveCount( {\"count\":5} );\n", "receiveCount").unwrap(),
            " {\"count\":5} "
        );
        assert!(strip_jsonp("{\"count\":5}", "receiveCount").is_err());
        assert!(strip_jsonp("receiveCount({\"count\":5}", "receiveCount").is_err());
    }

    #[test]
    fn test_parse_json_rejects_empty() {
        assert!(matches!(parse_json("  "), Err(FetchError::InvalidResponse(_))));
        assert!(matches!(parse_json("<html>"), Err(FetchError::Json(_))));
        assert_eq!(parse_json("{\"a\":1}").unwrap(), json!({"a": 1}));
    }
}
