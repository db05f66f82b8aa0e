//! Facebook service descriptor.

use floatbar_core::ServiceId;
use floatbar_fetch::{StatStrategy, encode_query_value};

use super::strategy::{FQL_ENDPOINT, FacebookStrategy};
use crate::descriptor::ServiceDescriptor;
use crate::share::{ShareLink, ShareTarget};

const SHARE_BASE: &str = "http://www.facebook.com/sharer.php";

/// Returns the Facebook descriptor.
pub fn facebook_descriptor() -> ServiceDescriptor {
    ServiceDescriptor {
        id: ServiceId::Facebook,
        display_name: "Facebook",
        count_endpoint: FQL_ENDPOINT,
        api_host: "api.facebook.com",
        build_strategy: build_strategy,
        share_link: share_link,
    }
}

fn build_strategy() -> Box<dyn StatStrategy> {
    Box::new(FacebookStrategy::new())
}

fn share_link(target: &ShareTarget<'_>) -> ShareLink {
    let url = format!("{SHARE_BASE}?u={}", encode_query_value(target.url));
    ShareLink::new(url, target.title)
}
