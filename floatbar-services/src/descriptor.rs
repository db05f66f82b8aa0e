//! Service descriptor system.
//!
//! A descriptor contains the static configuration for one service:
//! - Display name
//! - The host and endpoint its count API lives on
//! - How to build its stat strategy
//! - How to build its share link

use floatbar_core::ServiceId;
use floatbar_fetch::StatStrategy;

use crate::share::{ShareLink, ShareTarget};

// ============================================================================
// Service Descriptor
// ============================================================================

/// Complete descriptor for a service.
pub struct ServiceDescriptor {
    /// Service identifier.
    pub id: ServiceId,
    /// Human-readable name.
    pub display_name: &'static str,
    /// Count API endpoint, without the per-post query.
    pub count_endpoint: &'static str,
    /// Host the count API lives on.
    pub api_host: &'static str,
    /// Builds the stat strategy.
    pub build_strategy: fn() -> Box<dyn StatStrategy>,
    /// Builds the share link for a post.
    pub share_link: fn(&ShareTarget<'_>) -> ShareLink,
}

impl ServiceDescriptor {
    /// Returns a fresh stat strategy for this service.
    pub fn strategy(&self) -> Box<dyn StatStrategy> {
        (self.build_strategy)()
    }

    /// Returns the share link for a post.
    pub fn share(&self, target: &ShareTarget<'_>) -> ShareLink {
        (self.share_link)(target)
    }
}

impl std::fmt::Debug for ServiceDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceDescriptor")
            .field("id", &self.id)
            .field("display_name", &self.display_name)
            .field("count_endpoint", &self.count_endpoint)
            .finish_non_exhaustive()
    }
}
