//! Service-related types.
//!
//! This module contains types related to social services:
//! - [`ServiceId`] - Enum of supported services
//! - [`ServiceConfig`] - Per-service enabled flag and render order

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// ============================================================================
// Service Id
// ============================================================================

/// Supported social services.
///
/// The set is fixed; the declaration order is the canonical order used for
/// defaults and for breaking ties between equal render orders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceId {
    /// Facebook
    Facebook,
    /// Twitter
    Twitter,
    /// Google+
    Google,
    /// LinkedIn
    Linkedin,
    /// Pinterest
    Pinterest,
}

impl ServiceId {
    /// Returns all service ids in canonical order.
    pub fn all() -> &'static [ServiceId] {
        &[
            Self::Facebook,
            Self::Twitter,
            Self::Google,
            Self::Linkedin,
            Self::Pinterest,
        ]
    }

    /// Returns the wire identifier (lowercase, as submitted by clients).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Facebook => "facebook",
            Self::Twitter => "twitter",
            Self::Google => "google",
            Self::Linkedin => "linkedin",
            Self::Pinterest => "pinterest",
        }
    }

    /// Returns the display name for this service.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Facebook => "Facebook",
            Self::Twitter => "Twitter",
            Self::Google => "Google+",
            Self::Linkedin => "LinkedIn",
            Self::Pinterest => "Pinterest",
        }
    }

    /// Converts this service to an index (position in the `all()` array).
    pub fn to_index(self) -> usize {
        Self::all().iter().position(|&s| s == self).unwrap_or(0)
    }

    /// Creates a service from an index (position in the `all()` array).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ServiceId {
    type Err = CoreError;

    /// Parses a wire identifier. Matching is exact; no trimming or case folding.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| CoreError::InvalidService(s.to_string()))
    }
}

// ============================================================================
// Service Configuration
// ============================================================================

/// Configuration for a single service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// The service this entry configures.
    pub id: ServiceId,
    /// Whether the service is shown on the bar.
    #[serde(default)]
    pub enabled: bool,
    /// Render position among enabled services (ascending). Gaps are allowed.
    #[serde(default)]
    pub order: u32,
}

impl ServiceConfig {
    /// Creates a disabled entry at the service's canonical position.
    pub fn new(id: ServiceId) -> Self {
        Self {
            id,
            enabled: false,
            order: u32::try_from(id.to_index()).unwrap_or(0),
        }
    }
}
