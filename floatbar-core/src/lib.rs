// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Floatbar Core
//!
//! Core types, models, and pure operations for the floatbar share bar.
//!
//! This crate provides the foundational abstractions used across all other
//! floatbar crates, including:
//!
//! - Domain models (services, global configuration, per-post records)
//! - Error types
//! - The order updater, which applies a submitted service ordering
//!
//! Nothing in this crate performs I/O.
//!
//! ## Key Types
//!
//! ### Service Types
//! - [`ServiceId`] - Enum of the five supported social services
//! - [`ServiceConfig`] - Enabled flag and render order of one service
//!
//! ### Configuration
//! - [`GlobalConfig`] - Process-wide bar settings
//! - [`SettingsUpdate`] - Submitted settings form
//!
//! ### Per-Post Records
//! - [`PostContext`] - Eligibility inputs for one render call
//! - [`PostOverride`] - Per-post "suppress the bar" flag
//! - [`CachedCounts`] - Per-post share counts with fetch timestamp
//!
//! ### Rendering
//! - [`RenderOverrides`] - Per-embed service selection
//! - [`ButtonDescriptor`] - One rendered share button
//! - [`RenderedBar`] - Label plus ordered buttons

pub mod error;
pub mod models;
pub mod order;

// Re-export error types
pub use error::CoreError;

// Re-export all model types
pub use models::{
    // Service types
    ServiceConfig,
    ServiceId,
    // Configuration
    DEFAULT_CACHE_TTL_SECS,
    GlobalConfig,
    SettingsUpdate,
    // Per-post records
    CachedCounts,
    PostContext,
    PostId,
    PostOverride,
    PostStatus,
    // Rendering
    ButtonDescriptor,
    RenderOverrides,
    RenderedBar,
};

// Re-export the order updater
pub use order::{apply_order, apply_submitted_order, parse_service_ids};
