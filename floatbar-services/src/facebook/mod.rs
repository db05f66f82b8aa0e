//! Facebook service implementation.
//!
//! Counts come from the FQL `link_stat` table. The response is a JSON array
//! with one row per queried URL.

mod descriptor;
pub(crate) mod parser;
mod strategy;

pub use descriptor::facebook_descriptor;
pub use parser::parse_facebook_response;
pub use strategy::FacebookStrategy;
