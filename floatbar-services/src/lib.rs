// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Floatbar Services
//!
//! Per-service implementations for the floating share bar.
//!
//! Each service module includes:
//!
//! - **Descriptor**: Static configuration (names, count endpoint, share link)
//! - **Strategy**: The exact count request for a post URL
//! - **Parser**: Reads the count out of the service's response shape
//!
//! ## Supported Services
//!
//! | Service | Count request | Response shape |
//! |---------|---------------|----------------|
//! | Facebook | GET FQL query | JSON array, `[0].total_count` |
//! | Twitter | GET | JSON object, `.count` |
//! | Google+ | POST JSON-RPC | JSON array, `[0].result.metadata.globalCounts.count` |
//! | LinkedIn | GET | JSON object, `.count` |
//! | Pinterest | GET | JSONP `receiveCount(...)`, `.count` |
//!
//! ## Usage
//!
//! ```ignore
//! use floatbar_core::{GlobalConfig, RenderOverrides};
//! use floatbar_fetch::FetchContext;
//! use floatbar_services::{BarRenderer, ServiceRegistry};
//!
//! let ctx = FetchContext::new();
//! let pipeline = ServiceRegistry::pipeline_for(&config.enabled_services());
//! let outcome = pipeline.execute(&ctx, &post.url).await;
//!
//! let bar = BarRenderer::render(&config, &outcome.counts, &RenderOverrides::none(), &post);
//! ```

pub mod descriptor;
pub mod registry;
pub mod render;
pub mod share;

// Service modules (alphabetical)
pub mod facebook;
pub mod google;
pub mod linkedin;
pub mod pinterest;
pub mod twitter;

// Re-export key types
pub use descriptor::ServiceDescriptor;
pub use registry::ServiceRegistry;
pub use render::BarRenderer;
pub use share::{ShareLink, ShareTarget};

// Re-export service descriptors
pub use facebook::facebook_descriptor;
pub use google::google_descriptor;
pub use linkedin::linkedin_descriptor;
pub use pinterest::pinterest_descriptor;
pub use twitter::twitter_descriptor;

#[cfg(test)]
mod parser_edge_tests;
