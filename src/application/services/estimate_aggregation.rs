//! # Estimate Aggregation
//!
//! Concurrent fan-out to provider adapters.
//!
//! This module provides the [`EstimateAggregator`] which invokes every
//! registered adapter concurrently under a per-adapter timeout and merges
//! the surviving results in registration order.

use crate::domain::entities::{Estimate, RideRequest};
use crate::infrastructure::providers::traits::ProviderAdapter;
use futures::future::join_all;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

/// Default per-adapter timeout in milliseconds.
pub const DEFAULT_PER_ADAPTER_TIMEOUT_MS: u64 = 2500;

/// Configuration for estimate aggregation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AggregationConfig {
    /// Per-adapter timeout in milliseconds, applied uniformly.
    pub per_adapter_timeout_ms: u64,
}

impl Default for AggregationConfig {
    fn default() -> Self {
        Self {
            per_adapter_timeout_ms: DEFAULT_PER_ADAPTER_TIMEOUT_MS,
        }
    }
}

impl AggregationConfig {
    /// Creates a configuration with the specified per-adapter timeout.
    #[must_use]
    pub fn with_per_adapter_timeout(timeout_ms: u64) -> Self {
        Self {
            per_adapter_timeout_ms: timeout_ms,
        }
    }

    /// Returns the per-adapter timeout.
    #[inline]
    #[must_use]
    pub fn per_adapter_timeout(&self) -> Duration {
        Duration::from_millis(self.per_adapter_timeout_ms)
    }
}

/// Outcome counters for one aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AggregationReport {
    /// Number of adapters invoked.
    pub adapters_queried: usize,
    /// Adapters that completed within the timeout (possibly with no estimates).
    pub adapters_responded: usize,
    /// Adapters abandoned at the timeout.
    pub adapters_timed_out: usize,
    /// Adapters whose task panicked.
    pub adapters_failed: usize,
    /// Estimates in the merged output.
    pub estimates_collected: usize,
}

impl fmt::Display for AggregationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "queried={} responded={} timed_out={} failed={} estimates={}",
            self.adapters_queried,
            self.adapters_responded,
            self.adapters_timed_out,
            self.adapters_failed,
            self.estimates_collected
        )
    }
}

/// Fan-out/fan-in over the registered provider adapters.
///
/// Holds no per-request state; one instance serves all requests.
#[derive(Debug, Clone)]
pub struct EstimateAggregator {
    adapters: Vec<Arc<dyn ProviderAdapter>>,
    config: AggregationConfig,
}

impl EstimateAggregator {
    /// Creates a new aggregator. Adapter order is the merge order.
    #[must_use]
    pub fn new(adapters: Vec<Arc<dyn ProviderAdapter>>, config: AggregationConfig) -> Self {
        Self { adapters, config }
    }

    /// Collects estimates from all adapters.
    ///
    /// Never fails: adapters that time out or panic contribute nothing.
    pub async fn aggregate(&self, request: &RideRequest) -> Vec<Estimate> {
        self.aggregate_with_report(request).await.0
    }

    /// Collects estimates from all adapters and reports per-adapter outcomes.
    ///
    /// Every adapter runs in its own task with its own copy of the request.
    /// Results are merged in registration order, not completion order. Total
    /// latency is bounded by the per-adapter timeout.
    pub async fn aggregate_with_report(
        &self,
        request: &RideRequest,
    ) -> (Vec<Estimate>, AggregationReport) {
        let per_adapter_timeout = self.config.per_adapter_timeout();
        let timeout_ms = self.config.per_adapter_timeout_ms;

        let handles: Vec<_> = self
            .adapters
            .iter()
            .map(|adapter| {
                let adapter = Arc::clone(adapter);
                let request = *request;

                // Dropping the timed-out future cancels it, so a late result
                // can never reach the merge.
                tokio::spawn(async move {
                    match timeout(per_adapter_timeout, adapter.get_estimates(&request)).await {
                        Ok(estimates) => Some(estimates),
                        Err(_) => {
                            tracing::warn!(
                                provider = %adapter.provider_id(),
                                timeout_ms,
                                "provider timed out"
                            );
                            None
                        }
                    }
                })
            })
            .collect();

        let mut report = AggregationReport {
            adapters_queried: handles.len(),
            ..AggregationReport::default()
        };
        let mut estimates = Vec::new();

        for (adapter, outcome) in self.adapters.iter().zip(join_all(handles).await) {
            match outcome {
                Ok(Some(batch)) => {
                    report.adapters_responded += 1;
                    estimates.extend(batch);
                }
                Ok(None) => report.adapters_timed_out += 1,
                Err(e) => {
                    tracing::error!(
                        provider = %adapter.provider_id(),
                        error = %e,
                        "provider task failed"
                    );
                    report.adapters_failed += 1;
                }
            }
        }

        report.estimates_collected = estimates.len();
        (estimates, report)
    }
}
