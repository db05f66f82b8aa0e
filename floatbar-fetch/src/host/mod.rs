//! Host transports.
//!
//! - [`http`] - Live HTTP via reqwest
//! - [`canned`] - Fixed responses keyed by URL prefix

pub mod canned;
pub mod http;
