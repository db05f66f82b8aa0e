//! CLI output formatting tests.
//!
//! These tests verify that CLI output is correctly formatted for both
//! text and JSON output modes.

#[cfg(test)]
mod text_formatter_tests {
    use super::super::text::{TextFormatter, format_count};
    use floatbar_core::{ButtonDescriptor, GlobalConfig, RenderedBar, ServiceId, apply_order};

    fn sample_bar() -> RenderedBar {
        RenderedBar {
            label: Some("Share".to_string()),
            buttons: vec![
                ButtonDescriptor {
                    service: ServiceId::Twitter,
                    count: 1_234,
                    share_url: "https://twitter.com/intent/tweet?url=x".to_string(),
                    share_text: "Hello".to_string(),
                    tooltip: Some("1234 retweets so far".to_string()),
                },
                ButtonDescriptor {
                    service: ServiceId::Facebook,
                    count: 7,
                    share_url: "http://www.facebook.com/sharer.php?u=x".to_string(),
                    share_text: "Hello".to_string(),
                    tooltip: None,
                },
            ],
        }
    }

    #[test]
    fn test_format_count_abbreviates() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_234), "1.2K");
        assert_eq!(format_count(3_400_000), "3.4M");
    }

    #[test]
    fn test_format_bar_keeps_button_order() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_bar(&sample_bar());
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Share");
        assert!(lines[1].contains("Twitter"));
        assert!(lines[1].contains("1.2K"));
        assert!(lines[2].contains("1234 retweets so far"));
        assert!(lines[3].contains("Facebook"));
        assert_eq!(lines.len(), 4);
    }

    #[test]
    fn test_format_bar_without_label() {
        let formatter = TextFormatter::new(false);
        let bar = RenderedBar {
            label: None,
            ..sample_bar()
        };

        assert!(formatter.format_bar(&bar).starts_with("  Twitter"));
    }

    #[test]
    fn test_format_empty_bar() {
        let formatter = TextFormatter::new(false);
        let output = formatter.format_bar(&RenderedBar::default());
        assert!(output.contains("no services selected"));
    }

    #[test]
    fn test_no_colors_when_disabled() {
        let formatter = TextFormatter::new(false);
        assert!(!formatter.format_bar(&sample_bar()).contains("\x1b["));
        assert!(!formatter.format_no_bar().contains("\x1b["));
    }

    #[test]
    fn test_colors_when_enabled() {
        let formatter = TextFormatter::new(true);
        assert!(formatter.format_bar(&sample_bar()).contains("\x1b[1m"));
    }

    #[test]
    fn test_format_config_lists_enabled_in_order() {
        let formatter = TextFormatter::new(false);
        let config =
            apply_order(&GlobalConfig::default(), &[ServiceId::Pinterest, ServiceId::Google])
                .unwrap();

        let output = formatter.format_config(&config);
        assert!(output.contains("1. Pinterest"));
        assert!(output.contains("2. Google+"));
        assert!(output.find("Pinterest").unwrap() < output.find("Google+").unwrap());
    }

    #[test]
    fn test_format_order_all_disabled() {
        let formatter = TextFormatter::new(false);
        assert!(formatter.format_order(&[]).contains("all services disabled"));
        assert_eq!(
            formatter.format_order(&[ServiceId::Twitter, ServiceId::Linkedin]),
            "✓ Twitter → LinkedIn"
        );
    }
}

#[cfg(test)]
mod json_formatter_tests {
    use super::super::json::JsonFormatter;
    use chrono::{TimeZone, Utc};
    use floatbar_core::{CachedCounts, GlobalConfig, PostId, RenderedBar, ServiceId};
    use floatbar_services::ServiceRegistry;
    use floatbar_store::Freshness;
    use serde_json::Value;

    #[test]
    fn test_format_missing_bar() {
        let formatter = JsonFormatter::new(false);
        let output = formatter.format_bar(None).unwrap();
        assert_eq!(output, r#"{"rendered":false}"#);
    }

    #[test]
    fn test_format_bar() {
        let formatter = JsonFormatter::new(false);
        let bar = RenderedBar::default();
        let value: Value = serde_json::from_str(&formatter.format_bar(Some(&bar)).unwrap()).unwrap();

        assert_eq!(value["rendered"], true);
        assert_eq!(value["bar"]["buttons"], serde_json::json!([]));
    }

    #[test]
    fn test_format_freshness() {
        let formatter = JsonFormatter::new(false);
        let mut counts = CachedCounts::new(
            PostId(42),
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        );
        counts.set(ServiceId::Twitter, 5);

        let output = formatter
            .format_freshness(&Freshness::Refreshed(counts))
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["postId"], 42);
        assert_eq!(value["refreshed"], true);
        assert_eq!(value["fetchedAt"], "2024-03-01T12:00:00+00:00");
        assert_eq!(value["counts"]["twitter"], 5);
    }

    #[test]
    fn test_format_services_reflects_config() {
        let formatter = JsonFormatter::new(true);
        let output = formatter
            .format_services(ServiceRegistry::all(), &GlobalConfig::default())
            .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();

        let services = value.as_array().unwrap();
        assert_eq!(services.len(), 5);
        assert_eq!(services[0]["id"], "facebook");
        assert!(services.iter().all(|s| s["enabled"] == false));
    }

    #[test]
    fn test_pretty_output_is_multiline() {
        let pretty = JsonFormatter::new(true);
        let compact = JsonFormatter::new(false);
        let data = serde_json::json!({"saved": true});

        assert!(pretty.format(&data).unwrap().contains('\n'));
        assert!(!compact.format(&data).unwrap().contains('\n'));
    }
}
