//! Twitter service descriptor.

use floatbar_core::ServiceId;
use floatbar_fetch::{StatStrategy, encode_query_value};

use super::strategy::{COUNT_ENDPOINT, TwitterStrategy};
use crate::descriptor::ServiceDescriptor;
use crate::share::{ShareLink, ShareTarget};

const INTENT_BASE: &str = "https://twitter.com/intent/tweet";

/// Returns the Twitter descriptor.
pub fn twitter_descriptor() -> ServiceDescriptor {
    ServiceDescriptor {
        id: ServiceId::Twitter,
        display_name: "Twitter",
        count_endpoint: COUNT_ENDPOINT,
        api_host: "urls.api.twitter.com",
        build_strategy: build_strategy,
        share_link: share_link,
    }
}

fn build_strategy() -> Box<dyn StatStrategy> {
    Box::new(TwitterStrategy::new())
}

fn share_link(target: &ShareTarget<'_>) -> ShareLink {
    let mut url = format!(
        "{INTENT_BASE}?original_referer={}&source=tweetbutton&text={}&url={}",
        encode_query_value(&target.home_url),
        encode_query_value(target.title),
        encode_query_value(target.url),
    );
    if !target.twitter_handle.is_empty() {
        url.push_str("&via=");
        url.push_str(&encode_query_value(target.twitter_handle));
    }

    let tooltip = if target.count == 0 {
        "Be the first one to tweet this article!".to_string()
    } else {
        format!("{} retweets so far", target.count)
    };

    ShareLink {
        url,
        text: target.title.to_string(),
        tooltip: Some(tooltip),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target(handle: &'static str, count: u64) -> ShareTarget<'static> {
        ShareTarget {
            url: "https://blog.example/hello/",
            title: "Hello World",
            home_url: "https://blog.example/".to_string(),
            twitter_handle: handle,
            count,
        }
    }

    #[test]
    fn test_intent_with_handle() {
        let link = twitter_descriptor().share(&target("wpbeginner", 5));
        assert_eq!(
            link.url,
            "https://twitter.com/intent/tweet?original_referer=https%3A%2F%2Fblog.example%2F\
             &source=tweetbutton&text=Hello+World&url=https%3A%2F%2Fblog.example%2Fhello%2F\
             &via=wpbeginner"
        );
        assert_eq!(link.tooltip.as_deref(), Some("5 retweets so far"));
        assert_eq!(link.text, "Hello World");
    }

    #[test]
    fn test_intent_without_handle() {
        let link = twitter_descriptor().share(&target("", 0));
        assert!(!link.url.contains("via="));
        assert_eq!(
            link.tooltip.as_deref(),
            Some("Be the first one to tweet this article!")
        );
    }
}
