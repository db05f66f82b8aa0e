// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Floatbar Fetch
//!
//! Share-count fetching infrastructure for floatbar.
//!
//! ## Host APIs
//!
//! The [`host`] module provides the concrete transports:
//!
//! - [`host::http`] - reqwest client with tracing, timeout and domain allowlist
//! - [`host::canned`] - fixed responses for tests and offline hosts
//!
//! ## Fetch Pipeline
//!
//! - [`request::StatRequest`] - The exact HTTP request a service needs
//! - [`transport::Transport`] - Executes a request, returns the body
//! - [`strategy::StatStrategy`] - Request shape and response parser of one service
//! - [`pipeline::StatPipeline`] - Runs one strategy per enabled service;
//!   a failing service yields count 0 and never affects the others
//! - [`context::FetchContext`] - Transport plus settings
//!
//! ## Example
//!
//! ```ignore
//! use floatbar_fetch::{FetchContext, StatPipeline};
//!
//! let ctx = FetchContext::new();
//! let pipeline = StatPipeline::with_strategies(strategies);
//! let outcome = pipeline.execute(&ctx, "https://example.com/hello-world/").await;
//! for (service, count) in &outcome.counts {
//!     println!("{service}: {count}");
//! }
//! ```

// Core modules
pub mod context;
pub mod error;
pub mod host;
pub mod parse;
pub mod pipeline;
pub mod request;
pub mod strategy;
pub mod transport;

// Re-export key types at crate root

// Errors
pub use error::{FetchError, HttpError};

// Host APIs
pub use host::{canned::CannedTransport, http::HttpClient};

// Strategy & Pipeline
pub use context::{FetchContext, FetchContextBuilder, FetchSettings};
pub use pipeline::{FetchAttempt, StatOutcome, StatPipeline};
pub use request::{StatRequest, encode_query_value};
pub use strategy::StatStrategy;
pub use transport::Transport;
