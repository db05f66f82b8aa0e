//! Render inputs and outputs.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::service::ServiceId;

/// Attribute key that forces a stat refresh before rendering.
const UPDATE_KEY: &str = "update";

// ============================================================================
// Render Overrides
// ============================================================================

/// Per-embed service selection (shortcode attributes).
///
/// When present, the selection replaces the configured enabled set and
/// order for that one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOverrides {
    services: Vec<(ServiceId, bool)>,
    update: bool,
    present: bool,
}

impl RenderOverrides {
    /// No overrides: render from configuration.
    pub fn none() -> Self {
        Self::default()
    }

    /// Builds overrides from attribute pairs, keeping caller order.
    ///
    /// `"true"`/`"false"` map to booleans; other values are truthy unless
    /// empty or `"0"`. A repeated key keeps its first position and takes the
    /// last value. Unknown keys are dropped.
    pub fn from_attrs<'a, I>(attrs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut overrides = Self::default();

        for (key, value) in attrs {
            overrides.present = true;
            let flag = truthy(value);

            if key == UPDATE_KEY {
                overrides.update = flag;
                continue;
            }

            match key.parse::<ServiceId>() {
                Ok(id) => overrides.set(id, flag),
                Err(_) => debug!(key = %key, "Ignoring unknown bar attribute"),
            }
        }

        overrides
    }

    /// Adds or replaces a service selection.
    #[must_use]
    pub fn with(mut self, service: ServiceId, show: bool) -> Self {
        self.present = true;
        self.set(service, show);
        self
    }

    /// Sets the force-refresh flag.
    #[must_use]
    pub fn with_update(mut self, update: bool) -> Self {
        self.present = true;
        self.update = update;
        self
    }

    fn set(&mut self, service: ServiceId, show: bool) {
        match self.services.iter_mut().find(|(id, _)| *id == service) {
            Some(entry) => entry.1 = show,
            None => self.services.push((service, show)),
        }
    }

    /// Returns true if no attributes were supplied.
    pub fn is_empty(&self) -> bool {
        !self.present
    }

    /// Returns true if a refresh should run before rendering.
    pub fn update(&self) -> bool {
        self.present && self.update
    }

    /// Services selected for display, in caller order.
    pub fn selected(&self) -> impl Iterator<Item = ServiceId> + '_ {
        self.services.iter().filter(|(_, show)| *show).map(|(id, _)| *id)
    }
}

fn truthy(value: &str) -> bool {
    match value {
        "true" => true,
        "false" | "" | "0" => false,
        _ => true,
    }
}

// ============================================================================
// Rendered Output
// ============================================================================

/// One share button, ready for a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonDescriptor {
    /// The service.
    pub service: ServiceId,
    /// Cached share count (0 when unknown).
    pub count: u64,
    /// Share intent URL.
    pub share_url: String,
    /// Text the service shares alongside the link (the post title).
    pub share_text: String,
    /// Hover text, for services that have one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<String>,
}

/// A rendered bar.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedBar {
    /// Title shown in front of the buttons.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Buttons in display order.
    pub buttons: Vec<ButtonDescriptor>,
}

impl RenderedBar {
    /// Returns the services in display order.
    pub fn services(&self) -> Vec<ServiceId> {
        self.buttons.iter().map(|b| b.service).collect()
    }
}
