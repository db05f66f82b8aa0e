//! Per-post types.
//!
//! - [`PostId`] - Host post identifier
//! - [`PostStatus`] - Publish status
//! - [`PostContext`] - Eligibility inputs supplied per render call
//! - [`PostOverride`] - Per-post suppression flag
//! - [`CachedCounts`] - Per-post share counts

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use super::service::ServiceId;

// ============================================================================
// Post Identity
// ============================================================================

/// Host post identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub u64);

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PostId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Publish status of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    /// Publicly visible.
    #[default]
    Publish,
    /// Draft.
    Draft,
    /// Awaiting review.
    Pending,
    /// Visible to authorized users only.
    Private,
    /// Scheduled.
    Future,
    /// Trashed.
    Trash,
}

impl PostStatus {
    /// Returns true if the post is published.
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Publish)
    }

    /// Parses a host status string. Unknown values are treated as drafts.
    pub fn from_host(status: &str) -> Self {
        match status {
            "publish" => Self::Publish,
            "pending" => Self::Pending,
            "private" => Self::Private,
            "future" => Self::Future,
            "trash" => Self::Trash,
            _ => Self::Draft,
        }
    }
}

// ============================================================================
// Post Context
// ============================================================================

/// Everything the host supplies about the post being rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostContext {
    /// Post identifier.
    pub id: PostId,
    /// Canonical post URL (permalink).
    pub url: String,
    /// Post title.
    pub title: String,
    /// Content type identifier (e.g. `post`, `page`).
    pub post_type: String,
    /// Publish status.
    pub status: PostStatus,
    /// Site home URL, used as the Twitter referer.
    pub home_url: Option<String>,
    /// Current time for staleness checks.
    pub now: DateTime<Utc>,
}

impl PostContext {
    /// Creates a published `post` observed at the current time.
    pub fn new(id: impl Into<PostId>, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
            title: title.into(),
            post_type: "post".to_string(),
            status: PostStatus::Publish,
            home_url: None,
            now: Utc::now(),
        }
    }

    /// Sets the content type.
    #[must_use]
    pub fn with_post_type(mut self, post_type: impl Into<String>) -> Self {
        self.post_type = post_type.into();
        self
    }

    /// Sets the publish status.
    #[must_use]
    pub fn with_status(mut self, status: PostStatus) -> Self {
        self.status = status;
        self
    }

    /// Sets the site home URL.
    #[must_use]
    pub fn with_home_url(mut self, home_url: impl Into<String>) -> Self {
        self.home_url = Some(home_url.into());
        self
    }

    /// Sets the observation time.
    #[must_use]
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }
}

// ============================================================================
// Post Override
// ============================================================================

/// Per-post admin override.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostOverride {
    /// Post identifier.
    pub post_id: PostId,
    /// Hide the bar on this post.
    #[serde(default)]
    pub suppressed: bool,
}

impl PostOverride {
    /// The implicit override for posts that never had one.
    pub fn default_for(post_id: PostId) -> Self {
        Self {
            post_id,
            suppressed: false,
        }
    }
}

// ============================================================================
// Cached Counts
// ============================================================================

/// Share counts for one post, replaced wholesale on every refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CachedCounts {
    /// Post identifier.
    pub post_id: PostId,
    /// Count per refreshed service.
    #[serde(default)]
    pub per_service: BTreeMap<ServiceId, u64>,
    /// When the counts were fetched.
    pub fetched_at: DateTime<Utc>,
}

impl CachedCounts {
    /// Creates an empty record.
    pub fn new(post_id: PostId, fetched_at: DateTime<Utc>) -> Self {
        Self {
            post_id,
            per_service: BTreeMap::new(),
            fetched_at,
        }
    }

    /// Returns the count for a service, or 0 if it was not refreshed.
    pub fn count(&self, service: ServiceId) -> u64 {
        self.per_service.get(&service).copied().unwrap_or(0)
    }

    /// Records a count.
    pub fn set(&mut self, service: ServiceId, count: u64) {
        self.per_service.insert(service, count);
    }

    /// Returns true if the record is older than `ttl_seconds` at `now`.
    pub fn is_stale(&self, now: DateTime<Utc>, ttl_seconds: u64) -> bool {
        let ttl = Duration::seconds(i64::try_from(ttl_seconds).unwrap_or(i64::MAX));
        now.signed_duration_since(self.fetched_at) > ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_staleness_boundary() {
        let counts = CachedCounts::new(PostId(7), t0());

        assert!(!counts.is_stale(t0(), 1800));
        assert!(!counts.is_stale(t0() + Duration::seconds(1800), 1800));
        assert!(counts.is_stale(t0() + Duration::seconds(1801), 1800));
    }

    #[test]
    fn test_future_timestamp_is_fresh() {
        let counts = CachedCounts::new(PostId(7), t0() + Duration::hours(1));
        assert!(!counts.is_stale(t0(), 60));
    }

    #[test]
    fn test_missing_count_is_zero() {
        let mut counts = CachedCounts::new(PostId(7), t0());
        counts.set(ServiceId::Twitter, 5);

        assert_eq!(counts.count(ServiceId::Twitter), 5);
        assert_eq!(counts.count(ServiceId::Facebook), 0);
    }

    #[test]
    fn test_post_status_from_host() {
        assert!(PostStatus::from_host("publish").is_published());
        assert_eq!(PostStatus::from_host("future"), PostStatus::Future);
        assert_eq!(PostStatus::from_host("auto-draft"), PostStatus::Draft);
    }
}
