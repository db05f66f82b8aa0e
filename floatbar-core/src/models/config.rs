//! Global bar configuration.
//!
//! [`GlobalConfig`] is read once per render/refresh invocation and passed
//! through; it is only mutated by the order updater (services) and the
//! settings-save action (everything else).

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::time::Duration;

use super::service::{ServiceConfig, ServiceId};
use crate::error::CoreError;

/// Default cache lifetime for share counts, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 1800;

/// Default bar label.
const DEFAULT_LABEL: &str = "Share";

/// Default content type that shows the bar.
const DEFAULT_POST_TYPE: &str = "post";

// ============================================================================
// Global Configuration
// ============================================================================

/// Process-wide bar settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// One entry per service, in canonical order.
    pub services: Vec<ServiceConfig>,

    /// Title shown in front of the buttons. Empty means no title.
    pub label: String,

    /// Twitter handle used for `via=`, without a leading `@`.
    pub twitter_handle: String,

    /// Content types that show the bar.
    pub eligible_post_types: BTreeSet<String>,

    /// How long fetched counts stay fresh.
    pub cache_ttl_seconds: u64,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            services: ServiceId::all().iter().map(|&id| ServiceConfig::new(id)).collect(),
            label: DEFAULT_LABEL.to_string(),
            twitter_handle: String::new(),
            eligible_post_types: BTreeSet::from([DEFAULT_POST_TYPE.to_string()]),
            cache_ttl_seconds: DEFAULT_CACHE_TTL_SECS,
        }
    }
}

impl GlobalConfig {
    /// Returns the entry for a service.
    pub fn service(&self, id: ServiceId) -> Option<&ServiceConfig> {
        self.services.iter().find(|s| s.id == id)
    }

    /// Returns a mutable entry for a service.
    pub fn service_mut(&mut self, id: ServiceId) -> Option<&mut ServiceConfig> {
        self.services.iter_mut().find(|s| s.id == id)
    }

    /// Returns true if the service is enabled.
    pub fn is_enabled(&self, id: ServiceId) -> bool {
        self.service(id).is_some_and(|s| s.enabled)
    }

    /// Returns enabled services in render order.
    ///
    /// Ascending `order`; equal orders fall back to canonical service order.
    pub fn enabled_services(&self) -> Vec<ServiceId> {
        let mut enabled: Vec<&ServiceConfig> = self.services.iter().filter(|s| s.enabled).collect();
        enabled.sort_by_key(|s| (s.order, s.id.to_index()));
        enabled.into_iter().map(|s| s.id).collect()
    }

    /// Returns true if the content type shows the bar.
    pub fn is_eligible_type(&self, post_type: &str) -> bool {
        self.eligible_post_types.contains(post_type)
    }

    /// Returns the cache lifetime.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }

    /// Repairs a loaded configuration.
    ///
    /// Guarantees exactly one entry per service in canonical order (first
    /// occurrence wins, missing services are added disabled), a positive TTL
    /// and a handle without `@`.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        let services = ServiceId::all()
            .iter()
            .map(|&id| self.service(id).copied().unwrap_or_else(|| ServiceConfig::new(id)))
            .collect();
        self.services = services;

        if self.cache_ttl_seconds == 0 {
            self.cache_ttl_seconds = DEFAULT_CACHE_TTL_SECS;
        }
        self.twitter_handle = clean_handle(&self.twitter_handle);
        self
    }

    /// Checks the structural invariants.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidConfig`] if a service entry is missing or
    /// repeated, two enabled services share an order, or the TTL is zero.
    pub fn validate(&self) -> Result<(), CoreError> {
        for &id in ServiceId::all() {
            let entries = self.services.iter().filter(|s| s.id == id).count();
            if entries != 1 {
                return Err(CoreError::InvalidConfig(format!(
                    "expected one entry for {id}, found {entries}"
                )));
            }
        }

        let mut seen = HashSet::new();
        for s in self.services.iter().filter(|s| s.enabled) {
            if !seen.insert(s.order) {
                return Err(CoreError::InvalidConfig(format!(
                    "enabled services share order {}",
                    s.order
                )));
            }
        }

        if self.cache_ttl_seconds == 0 {
            return Err(CoreError::InvalidConfig("cache TTL must be positive".to_string()));
        }

        Ok(())
    }

    /// Applies the settings-save action.
    ///
    /// `known_post_types`, when given, restricts `show_on` to types the host
    /// actually exposes. Services are never touched here.
    pub fn apply_settings(&mut self, update: &SettingsUpdate, known_post_types: Option<&[String]>) {
        if let Some(label) = &update.label {
            self.label = label.trim().to_string();
        }

        if let Some(handle) = &update.twitter_handle {
            self.twitter_handle = clean_handle(handle);
        }

        if let Some(show_on) = &update.show_on {
            self.eligible_post_types = show_on
                .iter()
                .map(|t| t.trim())
                .filter(|t| !t.is_empty())
                .filter(|t| known_post_types.is_none_or(|known| known.iter().any(|k| k == t)))
                .map(str::to_string)
                .collect();
        }

        if let Some(ttl) = update.cache_ttl_seconds {
            self.cache_ttl_seconds = u64::try_from(ttl)
                .ok()
                .filter(|&t| t > 0)
                .unwrap_or(DEFAULT_CACHE_TTL_SECS);
        }
    }
}

fn clean_handle(handle: &str) -> String {
    handle.trim().trim_start_matches('@').to_string()
}

// ============================================================================
// Settings Update
// ============================================================================

/// A submitted settings form. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SettingsUpdate {
    /// New label.
    pub label: Option<String>,
    /// New Twitter handle, with or without `@`.
    pub twitter_handle: Option<String>,
    /// Replacement set of eligible content types.
    pub show_on: Option<Vec<String>>,
    /// New cache lifetime; non-positive values fall back to the default.
    pub cache_ttl_seconds: Option<i64>,
}
