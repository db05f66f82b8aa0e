//! Share-link inputs and outputs.

use floatbar_core::{GlobalConfig, PostContext};
use url::Url;

/// What a share link is built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareTarget<'a> {
    /// Post permalink.
    pub url: &'a str,
    /// Post title.
    pub title: &'a str,
    /// Site home URL with a trailing slash. Empty when it cannot be derived.
    pub home_url: String,
    /// Twitter handle without `@`. Empty when not configured.
    pub twitter_handle: &'a str,
    /// Cached share count.
    pub count: u64,
}

impl<'a> ShareTarget<'a> {
    /// Builds a target for a post under the given settings.
    pub fn new(post: &'a PostContext, config: &'a GlobalConfig, count: u64) -> Self {
        Self {
            url: &post.url,
            title: &post.title,
            home_url: home_url(post),
            twitter_handle: &config.twitter_handle,
            count,
        }
    }
}

/// A built share link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareLink {
    /// Share or intent URL.
    pub url: String,
    /// Text the share is pre-filled with.
    pub text: String,
    /// Hover text, for services that have one.
    pub tooltip: Option<String>,
}

impl ShareLink {
    /// Creates a link without a tooltip.
    pub fn new(url: String, text: impl Into<String>) -> Self {
        Self {
            url,
            text: text.into(),
            tooltip: None,
        }
    }
}

/// The host-supplied home URL, or the post URL's origin, with a trailing slash.
fn home_url(post: &PostContext) -> String {
    let base = match &post.home_url {
        Some(home) => home.clone(),
        None => match Url::parse(&post.url) {
            Ok(parsed) if parsed.has_host() => parsed.origin().ascii_serialization(),
            _ => return String::new(),
        },
    };

    if base.ends_with('/') {
        base
    } else {
        format!("{base}/")
    }
}
