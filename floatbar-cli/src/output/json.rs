//! JSON output formatting.

use anyhow::Result;
use chrono::{DateTime, Utc};
use floatbar_core::{GlobalConfig, RenderedBar, ServiceId};
use floatbar_services::ServiceDescriptor;
use floatbar_store::Freshness;
use serde::{Serialize, Serializer};
use std::collections::BTreeMap;

// ============================================================================
// Output Types
// ============================================================================

/// Result of a render request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOutput<'a> {
    pub rendered: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bar: Option<&'a RenderedBar>,
}

/// Result of a refresh request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CountsOutput<'a> {
    pub post_id: u64,
    pub refreshed: bool,
    #[serde(serialize_with = "serialize_datetime")]
    pub fetched_at: DateTime<Utc>,
    pub counts: &'a BTreeMap<ServiceId, u64>,
}

/// One supported service.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceOutput {
    pub id: ServiceId,
    pub display_name: String,
    pub count_endpoint: String,
    pub enabled: bool,
    pub order: u32,
}

/// Acknowledgement of an order submission.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderOutput<'a> {
    pub saved: bool,
    pub enabled: &'a [ServiceId],
}

// ============================================================================
// Serialization helpers
// ============================================================================

fn serialize_datetime<S>(dt: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    s.serialize_str(&dt.to_rfc3339())
}

// ============================================================================
// JSON Formatter
// ============================================================================

/// JSON formatter.
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Creates a new JSON formatter.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }

    /// Formats any serializable value.
    pub fn format<T: Serialize + ?Sized>(&self, data: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(data)?
        } else {
            serde_json::to_string(data)?
        };
        Ok(json)
    }

    /// Formats a render result; `None` means the host shows no bar.
    pub fn format_bar(&self, bar: Option<&RenderedBar>) -> Result<String> {
        self.format(&RenderOutput {
            rendered: bar.is_some(),
            bar,
        })
    }

    /// Formats the outcome of a refresh request.
    pub fn format_freshness(&self, freshness: &Freshness) -> Result<String> {
        let counts = freshness.counts();
        self.format(&CountsOutput {
            post_id: counts.post_id.0,
            refreshed: freshness.was_refreshed(),
            fetched_at: counts.fetched_at,
            counts: &counts.per_service,
        })
    }

    /// Formats the services table against the current configuration.
    pub fn format_services(
        &self,
        services: &[ServiceDescriptor],
        config: &GlobalConfig,
    ) -> Result<String> {
        let outputs: Vec<ServiceOutput> = services
            .iter()
            .map(|desc| {
                let entry = config.service(desc.id);
                ServiceOutput {
                    id: desc.id,
                    display_name: desc.display_name.to_string(),
                    count_endpoint: desc.count_endpoint.to_string(),
                    enabled: entry.is_some_and(|s| s.enabled),
                    order: entry.map_or(0, |s| s.order),
                }
            })
            .collect();
        self.format(&outputs)
    }

    /// Formats the acknowledgement of an order submission.
    pub fn format_order(&self, saved: bool, enabled: &[ServiceId]) -> Result<String> {
        self.format(&OrderOutput { saved, enabled })
    }
}
