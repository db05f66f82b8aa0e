//! Stat cache refresher.
//!
//! Bounds external calls to at most one refresh per post per TTL window,
//! independent of render traffic. A refresh fetches every enabled service
//! and replaces the post's record in one write.

use chrono::{DateTime, Utc};
use floatbar_core::{CachedCounts, GlobalConfig, PostId};
use floatbar_fetch::FetchContext;
use floatbar_services::ServiceRegistry;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::error::StoreError;
use crate::post_store::PostRepository;

// ============================================================================
// Freshness
// ============================================================================

/// What `ensure_fresh` found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    /// The cached record was within its TTL; nothing was fetched.
    Fresh(CachedCounts),
    /// The record was missing or stale and has been replaced.
    Refreshed(CachedCounts),
}

impl Freshness {
    /// Returns the current counts.
    pub fn counts(&self) -> &CachedCounts {
        match self {
            Self::Fresh(counts) | Self::Refreshed(counts) => counts,
        }
    }

    /// Consumes the value and returns the counts.
    pub fn into_counts(self) -> CachedCounts {
        match self {
            Self::Fresh(counts) | Self::Refreshed(counts) => counts,
        }
    }

    /// Returns true if a refresh ran.
    pub fn was_refreshed(&self) -> bool {
        matches!(self, Self::Refreshed(_))
    }
}

// ============================================================================
// Refresher
// ============================================================================

/// Keeps per-post share counts within their TTL.
#[derive(Clone)]
pub struct StatCacheRefresher {
    posts: Arc<dyn PostRepository>,
    ctx: Arc<FetchContext>,
}

impl StatCacheRefresher {
    /// Creates a refresher writing to `posts` and fetching through `ctx`.
    pub fn new(posts: Arc<dyn PostRepository>, ctx: Arc<FetchContext>) -> Self {
        Self { posts, ctx }
    }

    /// Refreshes the post's counts if they are absent or older than the TTL.
    ///
    /// Safe to call redundantly: a duplicate refresh costs extra requests
    /// but always leaves one consistent record.
    #[instrument(skip(self, post_url, config, now))]
    pub async fn ensure_fresh(
        &self,
        post_id: PostId,
        post_url: &str,
        config: &GlobalConfig,
        now: DateTime<Utc>,
    ) -> Result<Freshness, StoreError> {
        if let Some(cached) = self.posts.cached_counts(post_id).await? {
            if !cached.is_stale(now, config.cache_ttl_seconds) {
                debug!(fetched_at = %cached.fetched_at, "Counts are fresh");
                return Ok(Freshness::Fresh(cached));
            }
            debug!(fetched_at = %cached.fetched_at, "Counts are stale");
        } else {
            debug!("No cached counts");
        }

        self.refresh(post_id, post_url, config, now)
            .await
            .map(Freshness::Refreshed)
    }

    /// Fetches every enabled service and replaces the post's record,
    /// ignoring the TTL.
    ///
    /// Services that fail are recorded as 0.
    #[instrument(skip(self, post_url, config, now))]
    pub async fn refresh(
        &self,
        post_id: PostId,
        post_url: &str,
        config: &GlobalConfig,
        now: DateTime<Utc>,
    ) -> Result<CachedCounts, StoreError> {
        let services = config.enabled_services();
        let pipeline = ServiceRegistry::pipeline_for(&services);
        let outcome = pipeline.execute(&self.ctx, post_url).await;

        let mut counts = CachedCounts::new(post_id, now);
        counts.per_service = outcome.counts;

        self.posts.set_cached_counts(&counts).await?;

        info!(
            services = services.len(),
            failed = outcome.attempts.iter().filter(|a| !a.success).count(),
            duration = ?outcome.duration,
            "Refreshed share counts"
        );
        Ok(counts)
    }
}

impl std::fmt::Debug for StatCacheRefresher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatCacheRefresher")
            .field("ctx", &self.ctx)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// Tests
// ============================================================================
