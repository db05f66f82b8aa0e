//! Fetch context providing the transport and fetch settings.

use std::sync::Arc;
use std::time::Duration;

use crate::host::http::{DEFAULT_TIMEOUT_SECS, HttpClient};
use crate::transport::Transport;

// ============================================================================
// Fetch Settings
// ============================================================================

/// Settings for fetch operations.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    /// Upper bound for a single stat request.
    pub timeout: Duration,
    /// Hosts the default HTTP transport may contact. `None` allows any host.
    pub allowed_domains: Option<Vec<String>>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            allowed_domains: None,
        }
    }
}

impl FetchSettings {
    /// Creates settings with custom timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Creates settings restricted to the given hosts.
    #[must_use]
    pub fn with_allowed_domains(mut self, domains: Vec<String>) -> Self {
        self.allowed_domains = Some(domains);
        self
    }
}

// ============================================================================
// Fetch Context
// ============================================================================

/// Context provided to stat strategies.
pub struct FetchContext {
    /// Request executor.
    pub transport: Arc<dyn Transport>,
    /// Fetch settings.
    pub settings: FetchSettings,
}

impl FetchContext {
    /// Creates a new fetch context backed by a live HTTP client.
    pub fn new() -> Self {
        Self::with_settings(FetchSettings::default())
    }

    /// Creates a live context with custom settings.
    pub fn with_settings(settings: FetchSettings) -> Self {
        Self {
            transport: Arc::new(http_transport(&settings)),
            settings,
        }
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> FetchContextBuilder {
        FetchContextBuilder::new()
    }

    /// Returns the per-request timeout.
    pub fn timeout(&self) -> Duration {
        self.settings.timeout
    }
}

impl Default for FetchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FetchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchContext")
            .field("settings", &self.settings)
            .finish_non_exhaustive()
    }
}

fn http_transport(settings: &FetchSettings) -> HttpClient {
    let client = HttpClient::with_timeout(settings.timeout);
    match &settings.allowed_domains {
        Some(domains) => client.allow_domains(domains.clone()),
        None => client,
    }
}

// ============================================================================
// Fetch Context Builder
// ============================================================================

/// Builder for constructing a `FetchContext`.
#[derive(Default)]
pub struct FetchContextBuilder {
    transport: Option<Arc<dyn Transport>>,
    settings: FetchSettings,
}

impl FetchContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the transport. Without one, a live HTTP client is built.
    #[must_use]
    pub fn transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets the fetch settings.
    #[must_use]
    pub fn settings(mut self, settings: FetchSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.settings.timeout = timeout;
        self
    }

    /// Restricts the live HTTP client to the given hosts.
    #[must_use]
    pub fn allowed_domains(mut self, domains: Vec<String>) -> Self {
        self.settings.allowed_domains = Some(domains);
        self
    }

    /// Builds the fetch context.
    pub fn build(self) -> FetchContext {
        let settings = self.settings;
        let transport = self
            .transport
            .unwrap_or_else(|| Arc::new(http_transport(&settings)));
        FetchContext { transport, settings }
    }
}

// ============================================================================
// Tests
// ============================================================================
