//! Domain models for floatbar.
//!
//! ## Submodules
//!
//! - [`service`] - Service types (ServiceId, ServiceConfig)
//! - [`config`] - Global configuration and the settings form
//! - [`post`] - Per-post records (PostContext, PostOverride, CachedCounts)
//! - [`render`] - Render inputs and outputs (RenderOverrides, ButtonDescriptor)

mod config;
mod post;
mod render;
mod service;

// Re-export everything at the models level
pub use config::{DEFAULT_CACHE_TTL_SECS, GlobalConfig, SettingsUpdate};
pub use post::{CachedCounts, PostContext, PostId, PostOverride, PostStatus};
pub use render::{ButtonDescriptor, RenderOverrides, RenderedBar};
pub use service::{ServiceConfig, ServiceId};
