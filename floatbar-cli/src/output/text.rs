//! Text output formatting with colors.

use chrono::{DateTime, Utc};
use floatbar_core::{CachedCounts, GlobalConfig, RenderedBar, ServiceId};
use floatbar_services::ServiceDescriptor;
use floatbar_store::Freshness;

// ============================================================================
// ANSI Colors
// ============================================================================

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";
const GREEN: &str = "\x1b[32m";
const YELLOW: &str = "\x1b[33m";
const CYAN: &str = "\x1b[36m";

/// Text formatter with optional colors.
pub struct TextFormatter {
    use_colors: bool,
}

impl TextFormatter {
    /// Creates a new text formatter.
    pub fn new(use_colors: bool) -> Self {
        Self { use_colors }
    }

    // ------------------------------------------------------------------------
    // Bar
    // ------------------------------------------------------------------------

    /// Formats a rendered bar: the label, then one line per button.
    pub fn format_bar(&self, bar: &RenderedBar) -> String {
        let mut lines = Vec::new();

        if let Some(label) = &bar.label {
            lines.push(self.bold(label));
        }

        for button in &bar.buttons {
            lines.push(format!(
                "  {:<10} {:>8}  {}",
                button.service.display_name(),
                self.cyan(&format_count(button.count)),
                button.share_url
            ));
            if let Some(tooltip) = &button.tooltip {
                lines.push(format!("             {}", self.dim(tooltip)));
            }
        }

        if bar.buttons.is_empty() {
            lines.push(self.dim("  (no services selected)"));
        }

        lines.join("\n")
    }

    /// The line printed when the host would not show a bar.
    pub fn format_no_bar(&self) -> String {
        self.dim("No bar for this post")
    }

    // ------------------------------------------------------------------------
    // Counts
    // ------------------------------------------------------------------------

    /// Formats the outcome of a refresh request.
    pub fn format_freshness(&self, freshness: &Freshness) -> String {
        let status = if freshness.was_refreshed() {
            self.green("refreshed")
        } else {
            self.yellow("fresh")
        };
        let counts = freshness.counts();

        let mut lines = vec![format!(
            "Post {} counts {} ({})",
            counts.post_id,
            status,
            format_timestamp(counts.fetched_at)
        )];
        lines.push(self.format_counts(counts));
        lines.join("\n")
    }

    /// Formats per-service counts in canonical order.
    pub fn format_counts(&self, counts: &CachedCounts) -> String {
        if counts.per_service.is_empty() {
            return self.dim("  (no services enabled)");
        }

        counts
            .per_service
            .iter()
            .map(|(service, count)| {
                format!("  {:<10} {}", service.display_name(), format_count(*count))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    // ------------------------------------------------------------------------
    // Services
    // ------------------------------------------------------------------------

    /// Formats the services table header.
    pub fn format_services_header(&self) -> String {
        format!(
            "{:<12} {:<10} {:<8} {:<6} {}",
            self.bold("Service"),
            self.bold("ID"),
            self.bold("Enabled"),
            self.bold("Order"),
            self.bold("Count endpoint")
        )
    }

    /// Formats one line of the services table.
    pub fn format_service_line(&self, desc: &ServiceDescriptor, config: &GlobalConfig) -> String {
        let entry = config.service(desc.id);
        let enabled = if entry.is_some_and(|s| s.enabled) {
            self.green("yes")
        } else {
            self.dim("no")
        };
        let order = entry.map_or_else(|| "-".to_string(), |s| s.order.to_string());

        format!(
            "{:<12} {:<10} {:<8} {:<6} {}",
            desc.display_name, desc.id, enabled, order, desc.count_endpoint
        )
    }

    // ------------------------------------------------------------------------
    // Configuration
    // ------------------------------------------------------------------------

    /// Formats the global configuration.
    pub fn format_config(&self, config: &GlobalConfig) -> String {
        let mut lines = vec![self.bold("Floatbar Configuration"), "─".repeat(40)];

        let label = if config.label.is_empty() {
            self.dim("(none)")
        } else {
            config.label.clone()
        };
        lines.push(format!("Label:           {label}"));

        let handle = if config.twitter_handle.is_empty() {
            self.dim("(none)")
        } else {
            format!("@{}", config.twitter_handle)
        };
        lines.push(format!("Twitter handle:  {handle}"));

        let types: Vec<&str> = config.eligible_post_types.iter().map(String::as_str).collect();
        lines.push(format!("Show on:         {}", types.join(", ")));
        lines.push(format!("Cache TTL:       {}s", config.cache_ttl_seconds));

        lines.push(String::new());
        lines.push("Enabled services:".to_string());
        let enabled = config.enabled_services();
        if enabled.is_empty() {
            lines.push(format!("  {}", self.dim("(none)")));
        }
        for (position, id) in enabled.iter().enumerate() {
            lines.push(format!("  {}. {}", position + 1, id.display_name()));
        }

        lines.join("\n")
    }

    /// Formats the services now enabled after an order submission.
    pub fn format_order(&self, enabled: &[ServiceId]) -> String {
        if enabled.is_empty() {
            return format!("{} all services disabled", self.green("✓"));
        }
        let names: Vec<&str> = enabled.iter().map(ServiceId::display_name).collect();
        format!("{} {}", self.green("✓"), names.join(" → "))
    }

    // ------------------------------------------------------------------------
    // Colors
    // ------------------------------------------------------------------------

    fn paint(&self, code: &str, text: &str) -> String {
        if self.use_colors {
            format!("{code}{text}{RESET}")
        } else {
            text.to_string()
        }
    }

    fn bold(&self, text: &str) -> String {
        self.paint(BOLD, text)
    }

    fn dim(&self, text: &str) -> String {
        self.paint(DIM, text)
    }

    fn green(&self, text: &str) -> String {
        self.paint(GREEN, text)
    }

    fn yellow(&self, text: &str) -> String {
        self.paint(YELLOW, text)
    }

    fn cyan(&self, text: &str) -> String {
        self.paint(CYAN, text)
    }
}

/// Abbreviates large counts: 999, 1.2K, 3.4M.
pub fn format_count(n: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let value = n as f64;
    if n >= 1_000_000 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        n.to_string()
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
