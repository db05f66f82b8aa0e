//! Service registry.
//!
//! Static table of all service descriptors, keyed by [`ServiceId`]. This is
//! the one place that maps an id to its count request, parser and share
//! link.

use floatbar_core::ServiceId;
use floatbar_fetch::StatPipeline;
use std::sync::OnceLock;

use crate::descriptor::ServiceDescriptor;
use crate::facebook::facebook_descriptor;
use crate::google::google_descriptor;
use crate::linkedin::linkedin_descriptor;
use crate::pinterest::pinterest_descriptor;
use crate::twitter::twitter_descriptor;

// ============================================================================
// Static Registry
// ============================================================================

/// Static storage for all service descriptors.
static DESCRIPTORS: OnceLock<Vec<ServiceDescriptor>> = OnceLock::new();

/// Initializes all service descriptors, in canonical order.
fn init_descriptors() -> Vec<ServiceDescriptor> {
    vec![
        facebook_descriptor(),
        twitter_descriptor(),
        google_descriptor(),
        linkedin_descriptor(),
        pinterest_descriptor(),
    ]
}

// ============================================================================
// Service Registry
// ============================================================================

/// Global registry of all service descriptors.
pub struct ServiceRegistry;

impl ServiceRegistry {
    /// Returns all service descriptors.
    pub fn all() -> &'static [ServiceDescriptor] {
        DESCRIPTORS.get_or_init(init_descriptors)
    }

    /// Gets a service descriptor by id.
    pub fn get(id: ServiceId) -> Option<&'static ServiceDescriptor> {
        Self::all().iter().find(|d| d.id == id)
    }

    /// Returns the hosts of every count API, for the fetch allowlist.
    pub fn api_domains() -> Vec<String> {
        Self::all().iter().map(|d| d.api_host.to_string()).collect()
    }

    /// Builds a pipeline with one strategy per given service, in order.
    pub fn pipeline_for(services: &[ServiceId]) -> StatPipeline {
        let strategies = services
            .iter()
            .filter_map(|&id| Self::get(id))
            .map(ServiceDescriptor::strategy)
            .collect();
        StatPipeline::with_strategies(strategies)
    }
}

// ============================================================================
// Tests
// ============================================================================
