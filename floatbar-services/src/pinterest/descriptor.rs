//! Pinterest service descriptor.

use floatbar_core::ServiceId;
use floatbar_fetch::{StatStrategy, encode_query_value};

use super::strategy::{COUNT_ENDPOINT, PinterestStrategy};
use crate::descriptor::ServiceDescriptor;
use crate::share::{ShareLink, ShareTarget};

const PIN_BASE: &str = "http://pinterest.com/pin/create/button/";

/// Returns the Pinterest descriptor.
pub fn pinterest_descriptor() -> ServiceDescriptor {
    ServiceDescriptor {
        id: ServiceId::Pinterest,
        display_name: "Pinterest",
        count_endpoint: COUNT_ENDPOINT,
        api_host: "api.pinterest.com",
        build_strategy: build_strategy,
        share_link: share_link,
    }
}

fn build_strategy() -> Box<dyn StatStrategy> {
    Box::new(PinterestStrategy::new())
}

fn share_link(target: &ShareTarget<'_>) -> ShareLink {
    let url = format!(
        "{PIN_BASE}?url={}&description={}",
        encode_query_value(target.url),
        encode_query_value(target.title)
    );
    ShareLink::new(url, target.title)
}
