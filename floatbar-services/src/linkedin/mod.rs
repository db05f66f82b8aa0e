//! LinkedIn service implementation.

mod descriptor;
pub(crate) mod parser;
mod strategy;

pub use descriptor::linkedin_descriptor;
pub use parser::parse_linkedin_response;
pub use strategy::LinkedinStrategy;
