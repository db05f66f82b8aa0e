//! Pinterest service implementation.
//!
//! The count endpoint only answers in JSONP, wrapped as `receiveCount(...)`.

mod descriptor;
pub(crate) mod parser;
mod strategy;

pub use descriptor::pinterest_descriptor;
pub use parser::{JSONP_CALLBACK, parse_pinterest_response};
pub use strategy::PinterestStrategy;
