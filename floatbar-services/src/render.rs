//! Bar rendering.
//!
//! Turns settings, cached counts and per-embed overrides into an ordered
//! list of button descriptors. Rendering is pure: it never fetches and
//! never persists.

use floatbar_core::{
    ButtonDescriptor, GlobalConfig, PostContext, RenderOverrides, RenderedBar, ServiceId,
};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::registry::ServiceRegistry;
use crate::share::ShareTarget;

/// Builds share bars.
pub struct BarRenderer;

impl BarRenderer {
    /// Services to show, in display order.
    ///
    /// Present overrides replace the configured selection entirely, keeping
    /// caller order. Otherwise every enabled service is shown by ascending
    /// `order`.
    pub fn select(config: &GlobalConfig, overrides: &RenderOverrides) -> Vec<ServiceId> {
        if overrides.is_empty() {
            config.enabled_services()
        } else {
            overrides.selected().collect()
        }
    }

    /// Renders the bar for a post.
    #[instrument(skip_all, fields(post_id = %post.id))]
    pub fn render(
        config: &GlobalConfig,
        counts: &BTreeMap<ServiceId, u64>,
        overrides: &RenderOverrides,
        post: &PostContext,
    ) -> RenderedBar {
        let buttons: Vec<ButtonDescriptor> = Self::select(config, overrides)
            .into_iter()
            .filter_map(|id| ServiceRegistry::get(id).map(|desc| (id, desc)))
            .map(|(id, desc)| {
                let count = counts.get(&id).copied().unwrap_or(0);
                let link = desc.share(&ShareTarget::new(post, config, count));
                ButtonDescriptor {
                    service: id,
                    count,
                    share_url: link.url,
                    share_text: link.text,
                    tooltip: link.tooltip,
                }
            })
            .collect();

        debug!(buttons = buttons.len(), "Rendered bar");

        let label = config.label.trim();
        RenderedBar {
            label: (!label.is_empty()).then(|| label.to_string()),
            buttons,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use floatbar_core::{PostId, apply_order};

    fn post() -> PostContext {
        PostContext::new(PostId(7), "https://blog.example/hello/", "Hello")
            .with_home_url("https://blog.example")
    }

    fn twitter_then_facebook() -> GlobalConfig {
        apply_order(
            &GlobalConfig::default(),
            &[ServiceId::Twitter, ServiceId::Facebook],
        )
        .unwrap()
    }

    #[test]
    fn test_render_enabled_in_order_with_default_counts() {
        let counts = BTreeMap::from([(ServiceId::Twitter, 5)]);
        let bar = BarRenderer::render(
            &twitter_then_facebook(),
            &counts,
            &RenderOverrides::none(),
            &post(),
        );

        assert_eq!(bar.services(), vec![ServiceId::Twitter, ServiceId::Facebook]);
        assert_eq!(bar.buttons[0].count, 5);
        assert_eq!(bar.buttons[1].count, 0);
        assert!(bar.buttons[1].share_url.starts_with("http://www.facebook.com/sharer.php?u="));
        assert_eq!(bar.label.as_deref(), Some("Share"));
    }

    #[test]
    fn test_overrides_replace_configuration() {
        let overrides = RenderOverrides::from_attrs([("google", "true"), ("update", "true")]);
        let bar = BarRenderer::render(
            &twitter_then_facebook(),
            &BTreeMap::new(),
            &overrides,
            &post(),
        );

        assert_eq!(bar.services(), vec![ServiceId::Google]);
    }

    #[test]
    fn test_overrides_keep_caller_order_and_drop_false() {
        let overrides = RenderOverrides::from_attrs([
            ("pinterest", "true"),
            ("facebook", "false"),
            ("linkedin", "1"),
        ]);
        let bar = BarRenderer::render(&GlobalConfig::default(), &BTreeMap::new(), &overrides, &post());

        assert_eq!(bar.services(), vec![ServiceId::Pinterest, ServiceId::Linkedin]);
    }

    #[test]
    fn test_update_only_overrides_render_nothing() {
        let overrides = RenderOverrides::from_attrs([("update", "true")]);
        let bar = BarRenderer::render(
            &twitter_then_facebook(),
            &BTreeMap::new(),
            &overrides,
            &post(),
        );

        assert!(bar.buttons.is_empty());
    }

    #[test]
    fn test_empty_label_is_omitted() {
        let mut config = twitter_then_facebook();
        config.label = "   ".to_string();
        let bar = BarRenderer::render(&config, &BTreeMap::new(), &RenderOverrides::none(), &post());

        assert!(bar.label.is_none());
    }

    #[test]
    fn test_render_is_deterministic() {
        let config = twitter_then_facebook();
        let counts = BTreeMap::from([(ServiceId::Facebook, 3), (ServiceId::Twitter, 9)]);
        let first = BarRenderer::render(&config, &counts, &RenderOverrides::none(), &post());
        let second = BarRenderer::render(&config, &counts, &RenderOverrides::none(), &post());

        assert_eq!(first, second);
    }

    #[test]
    fn test_twitter_button_uses_handle() {
        let mut config = twitter_then_facebook();
        config.twitter_handle = "floatbar".to_string();
        let bar = BarRenderer::render(&config, &BTreeMap::new(), &RenderOverrides::none(), &post());

        let twitter = &bar.buttons[0];
        assert!(twitter.share_url.ends_with("&via=floatbar"));
        assert!(twitter.share_url.contains("original_referer=https%3A%2F%2Fblog.example%2F"));
        assert_eq!(
            twitter.tooltip.as_deref(),
            Some("Be the first one to tweet this article!")
        );
    }
}
