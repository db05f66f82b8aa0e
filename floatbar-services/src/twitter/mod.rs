//! Twitter service implementation.
//!
//! Counts come from the legacy `urls/count.json` endpoint. The share link is
//! a tweet intent carrying the site referer and the optional `via` handle.

mod descriptor;
pub(crate) mod parser;
mod strategy;

pub use descriptor::twitter_descriptor;
pub use parser::parse_twitter_response;
pub use strategy::TwitterStrategy;
