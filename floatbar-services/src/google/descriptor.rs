//! Google+ service descriptor.

use floatbar_core::ServiceId;
use floatbar_fetch::{StatStrategy, encode_query_value};

use super::strategy::{GoogleStrategy, RPC_ENDPOINT};
use crate::descriptor::ServiceDescriptor;
use crate::share::{ShareLink, ShareTarget};

const SHARE_BASE: &str = "https://plus.google.com/share";

/// Returns the Google+ descriptor.
pub fn google_descriptor() -> ServiceDescriptor {
    ServiceDescriptor {
        id: ServiceId::Google,
        display_name: "Google+",
        count_endpoint: RPC_ENDPOINT,
        api_host: "clients6.google.com",
        build_strategy: build_strategy,
        share_link: share_link,
    }
}

fn build_strategy() -> Box<dyn StatStrategy> {
    Box::new(GoogleStrategy::new())
}

fn share_link(target: &ShareTarget<'_>) -> ShareLink {
    let url = format!("{SHARE_BASE}?url={}", encode_query_value(target.url));
    ShareLink::new(url, target.title)
}
