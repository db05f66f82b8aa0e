//! Google+ service implementation.
//!
//! Counts come from the `pos.plusones.get` JSON-RPC method, posted as a
//! one-element batch.

mod descriptor;
pub(crate) mod parser;
mod strategy;

pub use descriptor::google_descriptor;
pub use parser::parse_google_response;
pub use strategy::{GoogleStrategy, plusones_body};
