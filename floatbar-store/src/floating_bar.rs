//! Host facade.
//!
//! The host calls these entry points at its extension points: before the
//! page renders ([`FloatingBar::prepare`]), when embedding the bar
//! ([`FloatingBar::render`], [`FloatingBar::render_post`]), from the reorder
//! endpoint ([`FloatingBar::save_order`]) and from the per-post admin action
//! ([`FloatingBar::set_suppressed`]).
//!
//! Nothing here fails the host page: configuration and storage problems
//! suppress the bar or render counts as 0, and are logged.

use floatbar_core::{
    CachedCounts, GlobalConfig, PostContext, PostId, PostOverride, RenderOverrides, RenderedBar,
    apply_submitted_order,
};
use floatbar_fetch::{FetchContext, FetchSettings};
use floatbar_services::{BarRenderer, ServiceRegistry};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

use crate::config_store::{ConfigRepository, ConfigStore};
use crate::error::StoreError;
use crate::post_store::{FilePostStore, PostRepository};
use crate::refresher::{Freshness, StatCacheRefresher};

// ============================================================================
// Page Render Context
// ============================================================================

/// State scoped to one page view.
///
/// The bar is produced at most once per page, however many times the host
/// asks for it.
#[derive(Debug, Clone, Default)]
pub struct PageRender {
    config: Option<GlobalConfig>,
    has_bar: bool,
    rendered: bool,
}

impl PageRender {
    /// Creates the context for a new page view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `prepare` accepted the post.
    pub fn has_bar(&self) -> bool {
        self.has_bar
    }

    /// Returns true if the bar has already been produced for this page.
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }
}

// ============================================================================
// Floating Bar
// ============================================================================

/// The share bar as seen by the host.
pub struct FloatingBar {
    config: Arc<dyn ConfigRepository>,
    posts: Arc<dyn PostRepository>,
    refresher: StatCacheRefresher,
}

impl FloatingBar {
    /// Creates a facade over the given collaborators.
    pub fn new(
        config: Arc<dyn ConfigRepository>,
        posts: Arc<dyn PostRepository>,
        ctx: Arc<FetchContext>,
    ) -> Self {
        let refresher = StatCacheRefresher::new(posts.clone(), ctx);
        Self {
            config,
            posts,
            refresher,
        }
    }

    /// Creates a facade over the default file stores and a live HTTP
    /// client restricted to the service APIs.
    pub fn open_default() -> Self {
        Self::new(
            Arc::new(ConfigStore::default_location()),
            Arc::new(FilePostStore::default_location()),
            Arc::new(live_context()),
        )
    }

    /// Returns the configuration repository.
    pub fn config(&self) -> &Arc<dyn ConfigRepository> {
        &self.config
    }

    /// Returns the per-post repository.
    pub fn posts(&self) -> &Arc<dyn PostRepository> {
        &self.posts
    }

    /// Returns the refresher.
    pub fn refresher(&self) -> &StatCacheRefresher {
        &self.refresher
    }

    async fn load_config(&self) -> Option<GlobalConfig> {
        match self.config.load().await {
            Ok(config) => Some(config),
            Err(e) => {
                warn!(error = %e, "Configuration unavailable, suppressing bar");
                None
            }
        }
    }

    /// The gate in front of every refresh: the post must be published, of
    /// an eligible type and not suppressed.
    async fn is_eligible(&self, config: &GlobalConfig, post: &PostContext) -> bool {
        if !post.status.is_published() {
            debug!(status = ?post.status, "Post not published");
            return false;
        }
        if !config.is_eligible_type(&post.post_type) {
            debug!(post_type = %post.post_type, "Post type not eligible");
            return false;
        }
        match self.posts.post_override(post.id).await {
            Ok(value) if value.suppressed => {
                debug!("Bar suppressed for post");
                false
            }
            Ok(_) => true,
            Err(e) => {
                warn!(error = %e, "Override unreadable, suppressing bar");
                false
            }
        }
    }

    /// Decides whether `post` shows the bar and makes its counts fresh.
    ///
    /// The post must be published, of an eligible type and not suppressed.
    /// Returns true if the page will carry a bar.
    #[instrument(skip_all, fields(post_id = %post.id))]
    pub async fn prepare(&self, page: &mut PageRender, post: &PostContext) -> bool {
        let Some(config) = self.load_config().await else {
            return false;
        };
        if !self.is_eligible(&config, post).await {
            return false;
        }

        if let Err(e) = self
            .refresher
            .ensure_fresh(post.id, &post.url, &config, post.now)
            .await
        {
            warn!(error = %e, "Count refresh failed, rendering cached counts");
        }

        page.has_bar = true;
        page.config = Some(config);
        true
    }

    /// Produces the bar for this page.
    ///
    /// Returns `None` if the bar was already produced for the page or the
    /// configuration cannot be loaded. A present `update` override forces a
    /// refresh first, but only for posts that pass the refresh gate; the
    /// bar itself renders either way.
    #[instrument(skip_all, fields(post_id = %post.id))]
    pub async fn render(
        &self,
        page: &mut PageRender,
        post: &PostContext,
        overrides: &RenderOverrides,
    ) -> Option<RenderedBar> {
        if page.rendered {
            debug!("Bar already rendered on this page");
            return None;
        }
        page.rendered = true;

        let config = match page.config.clone() {
            Some(config) => config,
            None => self.load_config().await?,
        };

        let forced = overrides.update() && (page.has_bar || self.is_eligible(&config, post).await);
        let counts = if forced {
            match self
                .refresher
                .refresh(post.id, &post.url, &config, post.now)
                .await
            {
                Ok(counts) => Some(counts),
                Err(e) => {
                    warn!(error = %e, "Forced refresh failed");
                    self.read_counts(post.id).await
                }
            }
        } else {
            self.read_counts(post.id).await
        };

        let per_service = counts.map(|c| c.per_service).unwrap_or_default();
        Some(BarRenderer::render(&config, &per_service, overrides, post))
    }

    async fn read_counts(&self, post_id: PostId) -> Option<CachedCounts> {
        match self.posts.cached_counts(post_id).await {
            Ok(counts) => counts,
            Err(e) => {
                warn!(error = %e, "Cached counts unreadable, rendering zeros");
                None
            }
        }
    }

    /// The content path: prepare, then render from configuration.
    ///
    /// Returns `None` for ineligible posts.
    pub async fn render_post(&self, page: &mut PageRender, post: &PostContext) -> Option<RenderedBar> {
        if !page.has_bar && !self.prepare(page, post).await {
            return None;
        }
        self.render(page, post, &RenderOverrides::none()).await
    }

    /// Refreshes a post's counts on demand.
    ///
    /// With `force`, the TTL is ignored.
    pub async fn refresh_post(&self, post: &PostContext, force: bool) -> Result<Freshness, StoreError> {
        let config = self.config.load().await?;
        if force {
            self.refresher
                .refresh(post.id, &post.url, &config, post.now)
                .await
                .map(Freshness::Refreshed)
        } else {
            self.refresher
                .ensure_fresh(post.id, &post.url, &config, post.now)
                .await
        }
    }

    /// The reorder endpoint.
    ///
    /// Listed services become enabled in the submitted order; all others
    /// are disabled. Unknown or repeated ids reject the whole submission
    /// and nothing is saved. Returns the acknowledgement `true`.
    #[instrument(skip(self))]
    pub async fn save_order(&self, submitted: &[String]) -> Result<bool, StoreError> {
        let current = self.config.load().await?;
        let updated = apply_submitted_order(&current, submitted)?;
        self.config.save(&updated).await?;

        info!(enabled = ?updated.enabled_services(), "Saved service order");
        Ok(true)
    }

    /// Shows or hides the bar on one post.
    #[instrument(skip(self))]
    pub async fn set_suppressed(&self, post_id: PostId, suppressed: bool) -> Result<(), StoreError> {
        self.posts
            .set_override(&PostOverride {
                post_id,
                suppressed,
            })
            .await
    }
}

impl std::fmt::Debug for FloatingBar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FloatingBar")
            .field("refresher", &self.refresher)
            .finish_non_exhaustive()
    }
}

/// A live fetch context allowed to reach only the service APIs.
pub fn live_context() -> FetchContext {
    FetchContext::with_settings(
        FetchSettings::default().with_allowed_domains(ServiceRegistry::api_domains()),
    )
}
