//! Parser edge case and error handling tests.
//!
//! These tests verify parser behavior with malformed, partial, or edge case
//! inputs. Every failure here becomes a recorded count of 0 upstream.

#[cfg(test)]
mod facebook_parser_edge_tests {
    use crate::facebook::parser::parse_facebook_response;

    #[test]
    fn test_empty_array() {
        assert!(parse_facebook_response("[]").is_err());
    }

    #[test]
    fn test_string_count() {
        assert_eq!(parse_facebook_response(r#"[{"total_count":"88"}]"#).unwrap(), 88);
    }

    #[test]
    fn test_null_count() {
        assert!(parse_facebook_response(r#"[{"total_count":null}]"#).is_err());
    }

    #[test]
    fn test_only_first_row_counts() {
        let body = r#"[{"total_count":1},{"total_count":1000}]"#;
        assert_eq!(parse_facebook_response(body).unwrap(), 1);
    }
}

#[cfg(test)]
mod twitter_parser_edge_tests {
    use crate::twitter::parser::parse_twitter_response;

    #[test]
    fn test_array_instead_of_object() {
        assert!(parse_twitter_response(r#"[{"count":3}]"#).is_err());
    }

    #[test]
    fn test_html_error_page() {
        assert!(parse_twitter_response("<html><body>Over capacity</body></html>").is_err());
    }

    #[test]
    fn test_negative_count() {
        assert!(parse_twitter_response(r#"{"count":-5}"#).is_err());
    }

    #[test]
    fn test_surrounding_whitespace() {
        assert_eq!(parse_twitter_response("\n  {\"count\":0}\n").unwrap(), 0);
    }
}

#[cfg(test)]
mod google_parser_edge_tests {
    use crate::google::parser::parse_google_response;

    #[test]
    fn test_missing_metadata() {
        assert!(parse_google_response(r#"[{"id":"p","result":{}}]"#).is_err());
    }

    #[test]
    fn test_object_instead_of_batch() {
        let body = r#"{"result":{"metadata":{"globalCounts":{"count":4.0}}}}"#;
        assert!(parse_google_response(body).is_err());
    }

    #[test]
    fn test_integer_count() {
        let body = r#"[{"result":{"metadata":{"globalCounts":{"count":4}}}}]"#;
        assert_eq!(parse_google_response(body).unwrap(), 4);
    }
}

#[cfg(test)]
mod linkedin_parser_edge_tests {
    use crate::linkedin::parser::parse_linkedin_response;

    #[test]
    fn test_empty_body() {
        assert!(parse_linkedin_response("").is_err());
    }

    #[test]
    fn test_jsonp_body_is_rejected() {
        assert!(parse_linkedin_response(r#"IN.Tags.Share.handleCount({"count":2})"#).is_err());
    }
}

#[cfg(test)]
mod pinterest_parser_edge_tests {
    use crate::pinterest::parser::parse_pinterest_response;

    #[test]
    fn test_trailing_semicolon_and_newline() {
        let body = "receiveCount({\"count\":6});\n";
        assert_eq!(parse_pinterest_response(body).unwrap(), 6);
    }

    #[test]
    fn test_missing_count_field() {
        let body = r#"receiveCount({"url":"https://blog.example/"})"#;
        assert!(parse_pinterest_response(body).is_err());
    }

    #[test]
    fn test_other_callback_name() {
        assert!(parse_pinterest_response(r#"otherCallback({"count":6})"#).is_err());
    }

    #[test]
    fn test_malformed_inner_json() {
        assert!(parse_pinterest_response("receiveCount({count:6})").is_err());
    }
}
