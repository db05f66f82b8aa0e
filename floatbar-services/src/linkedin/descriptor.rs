//! LinkedIn service descriptor.

use floatbar_core::ServiceId;
use floatbar_fetch::{StatStrategy, encode_query_value};

use super::strategy::{COUNT_ENDPOINT, LinkedinStrategy};
use crate::descriptor::ServiceDescriptor;
use crate::share::{ShareLink, ShareTarget};

const SHARE_BASE: &str = "https://www.linkedin.com/cws/share";

/// Returns the LinkedIn descriptor.
pub fn linkedin_descriptor() -> ServiceDescriptor {
    ServiceDescriptor {
        id: ServiceId::Linkedin,
        display_name: "LinkedIn",
        count_endpoint: COUNT_ENDPOINT,
        api_host: "www.linkedin.com",
        build_strategy: build_strategy,
        share_link: share_link,
    }
}

fn build_strategy() -> Box<dyn StatStrategy> {
    Box::new(LinkedinStrategy::new())
}

fn share_link(target: &ShareTarget<'_>) -> ShareLink {
    let url = format!("{SHARE_BASE}?url={}", encode_query_value(target.url));
    ShareLink::new(url, target.title)
}
