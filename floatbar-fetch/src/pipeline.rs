//! Stat pipeline.
//!
//! Runs one strategy per enabled service concurrently. Every service ends up
//! with a count: a failure is logged and recorded as 0, and never affects
//! the other services.

use floatbar_core::ServiceId;
use futures::future::join_all;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::strategy::StatStrategy;

// ============================================================================
// Fetch Attempt
// ============================================================================

/// Record of a single stat lookup.
#[derive(Debug, Clone)]
pub struct FetchAttempt {
    /// The service that was queried.
    pub service: ServiceId,
    /// Whether the lookup succeeded.
    pub success: bool,
    /// Error if the lookup failed.
    pub error: Option<String>,
    /// How long the lookup took.
    pub duration: Duration,
}

impl FetchAttempt {
    /// Creates a successful attempt record.
    pub fn success(service: ServiceId, duration: Duration) -> Self {
        Self {
            service,
            success: true,
            error: None,
            duration,
        }
    }

    /// Creates a failed attempt record.
    pub fn failure(service: ServiceId, error: impl Into<String>, duration: Duration) -> Self {
        Self {
            service,
            success: false,
            error: Some(error.into()),
            duration,
        }
    }
}

// ============================================================================
// Stat Outcome
// ============================================================================

/// The outcome of a pipeline run.
#[derive(Debug, Clone, Default)]
pub struct StatOutcome {
    /// Count per queried service. Failed services hold 0.
    pub counts: BTreeMap<ServiceId, u64>,
    /// One attempt per queried service, in pipeline order.
    pub attempts: Vec<FetchAttempt>,
    /// Wall-clock duration of the whole run.
    pub duration: Duration,
}

impl StatOutcome {
    /// Returns the count recorded for a service (0 if it was not queried).
    pub fn count(&self, service: ServiceId) -> u64 {
        self.counts.get(&service).copied().unwrap_or(0)
    }

    /// Returns the services whose lookup failed.
    pub fn failures(&self) -> Vec<ServiceId> {
        self.attempts
            .iter()
            .filter(|a| !a.success)
            .map(|a| a.service)
            .collect()
    }

    /// Returns true if every lookup succeeded.
    pub fn all_succeeded(&self) -> bool {
        self.attempts.iter().all(|a| a.success)
    }
}

// ============================================================================
// Stat Pipeline
// ============================================================================

/// A set of stat strategies run together for one post URL.
#[derive(Default)]
pub struct StatPipeline {
    strategies: Vec<Box<dyn StatStrategy>>,
}

impl StatPipeline {
    /// Creates an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a pipeline with the given strategies.
    pub fn with_strategies(strategies: Vec<Box<dyn StatStrategy>>) -> Self {
        Self { strategies }
    }

    /// Adds a strategy to the pipeline.
    pub fn add_strategy(&mut self, strategy: Box<dyn StatStrategy>) {
        self.strategies.push(strategy);
    }

    /// Returns the number of strategies in the pipeline.
    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    /// Returns true if the pipeline is empty.
    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Returns the services covered by this pipeline.
    pub fn services(&self) -> Vec<ServiceId> {
        self.strategies.iter().map(|s| s.service()).collect()
    }

    /// Fetches every count for `post_url`.
    ///
    /// Each lookup is bounded by the context timeout.
    #[instrument(skip(self, ctx), fields(strategies = self.strategies.len()))]
    pub async fn execute(&self, ctx: &FetchContext, post_url: &str) -> StatOutcome {
        let start = Instant::now();

        if self.strategies.is_empty() {
            debug!("No strategies configured");
            return StatOutcome::default();
        }

        info!(count = self.strategies.len(), "Executing stat pipeline");

        let lookups = self
            .strategies
            .iter()
            .map(|strategy| run_one(strategy.as_ref(), ctx, post_url));
        let results = join_all(lookups).await;

        let mut outcome = StatOutcome::default();
        for (service, result, duration) in results {
            match result {
                Ok(count) => {
                    debug!(service = %service, count, duration = ?duration, "Stat lookup succeeded");
                    outcome.counts.insert(service, count);
                    outcome.attempts.push(FetchAttempt::success(service, duration));
                }
                Err(error) => {
                    warn!(
                        service = %service,
                        error = %error,
                        duration = ?duration,
                        "Stat lookup failed, recording 0"
                    );
                    outcome.counts.insert(service, 0);
                    outcome
                        .attempts
                        .push(FetchAttempt::failure(service, error.to_string(), duration));
                }
            }
        }

        outcome.duration = start.elapsed();
        outcome
    }
}

async fn run_one(
    strategy: &dyn StatStrategy,
    ctx: &FetchContext,
    post_url: &str,
) -> (ServiceId, Result<u64, FetchError>, Duration) {
    let start = Instant::now();
    let timeout = ctx.timeout();
    let result = match tokio::time::timeout(timeout, strategy.fetch(ctx, post_url)).await {
        Ok(result) => result,
        Err(_) => Err(FetchError::Timeout(
            u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX),
        )),
    };
    (strategy.service(), result, start.elapsed())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::host::canned::CannedTransport;
    use crate::parse::{count_from_value, parse_json};
    use crate::request::{StatRequest, encode_query_value};
    use async_trait::async_trait;
    use std::sync::Arc;

    struct CountStrategy {
        service: ServiceId,
        base: &'static str,
    }

    #[async_trait]
    impl StatStrategy for CountStrategy {
        fn service(&self) -> ServiceId {
            self.service
        }

        fn request(&self, post_url: &str) -> StatRequest {
            StatRequest::get(format!("{}?url={}", self.base, encode_query_value(post_url)))
        }

        fn parse(&self, body: &str) -> Result<u64, FetchError> {
            let value = parse_json(body)?;
            count_from_value(&value["count"]).ok_or(FetchError::MissingField("count"))
        }
    }

    fn strategy(service: ServiceId, base: &'static str) -> Box<dyn StatStrategy> {
        Box::new(CountStrategy { service, base })
    }

    fn ctx(transport: Arc<CannedTransport>) -> FetchContext {
        FetchContext::builder()
            .transport(transport)
            .timeout(Duration::from_millis(200))
            .build()
    }

    #[tokio::test]
    async fn test_empty_pipeline() {
        let transport = Arc::new(CannedTransport::new());
        let outcome = StatPipeline::new()
            .execute(&ctx(transport.clone()), "https://example.com/p/")
            .await;

        assert!(outcome.counts.is_empty());
        assert!(outcome.attempts.is_empty());
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_one_request_per_service() {
        let transport = Arc::new(
            CannedTransport::new()
                .with_body("https://a.example/", r#"{"count":7}"#)
                .with_body("https://b.example/", r#"{"count":"12"}"#),
        );
        let pipeline = StatPipeline::with_strategies(vec![
            strategy(ServiceId::Twitter, "https://a.example/count"),
            strategy(ServiceId::Linkedin, "https://b.example/count"),
        ]);

        let outcome = pipeline
            .execute(&ctx(transport.clone()), "https://example.com/p/")
            .await;

        assert_eq!(outcome.count(ServiceId::Twitter), 7);
        assert_eq!(outcome.count(ServiceId::Linkedin), 12);
        assert!(outcome.all_succeeded());
        assert_eq!(transport.call_count(), 2);
        assert_eq!(
            transport.calls()[0].url(),
            "https://a.example/count?url=https%3A%2F%2Fexample.com%2Fp%2F"
        );
    }

    #[tokio::test]
    async fn test_failure_is_isolated_and_recorded_as_zero() {
        let transport = Arc::new(
            CannedTransport::new()
                .with_body("https://a.example/", r#"{"count":7}"#)
                .with_status("https://b.example/", 500)
                .with_body("https://c.example/", "not json"),
        );
        let pipeline = StatPipeline::with_strategies(vec![
            strategy(ServiceId::Twitter, "https://a.example/count"),
            strategy(ServiceId::Linkedin, "https://b.example/count"),
            strategy(ServiceId::Pinterest, "https://c.example/count"),
        ]);

        let outcome = pipeline.execute(&ctx(transport), "https://example.com/p/").await;

        assert_eq!(outcome.count(ServiceId::Twitter), 7);
        assert_eq!(outcome.count(ServiceId::Linkedin), 0);
        assert_eq!(outcome.count(ServiceId::Pinterest), 0);
        assert_eq!(
            outcome.failures(),
            vec![ServiceId::Linkedin, ServiceId::Pinterest]
        );
        assert_eq!(outcome.counts.len(), 3);
    }

    #[tokio::test]
    async fn test_slow_service_times_out() {
        let transport = Arc::new(
            CannedTransport::new()
                .with_slow_body("https://slow.example/", r#"{"count":9}"#, Duration::from_secs(5))
                .with_body("https://a.example/", r#"{"count":3}"#),
        );
        let pipeline = StatPipeline::with_strategies(vec![
            strategy(ServiceId::Facebook, "https://slow.example/count"),
            strategy(ServiceId::Twitter, "https://a.example/count"),
        ]);

        let outcome = pipeline.execute(&ctx(transport), "https://example.com/p/").await;

        assert_eq!(outcome.count(ServiceId::Facebook), 0);
        assert_eq!(outcome.count(ServiceId::Twitter), 3);
        let slow = &outcome.attempts[0];
        assert!(!slow.success);
        assert!(slow.error.as_deref().unwrap_or_default().contains("timed out"));
    }
}
