//! # Ride Comparison
//!
//! End-to-end pipeline for one comparison request: aggregate estimates,
//! attach deep links, rank.

use crate::application::services::estimate_aggregation::EstimateAggregator;
use crate::application::services::ranking_strategy::{BestPriceStrategy, RankingStrategy};
use crate::application::services::redirect_links::RedirectLinker;
use crate::domain::entities::{Estimate, RideRequest};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Orchestrates the comparison pipeline.
///
/// Stateless between calls; share one instance behind an `Arc`.
#[derive(Debug, Clone)]
pub struct CompareRidesService {
    aggregator: EstimateAggregator,
    linker: RedirectLinker,
    ranking: Arc<dyn RankingStrategy>,
}

impl CompareRidesService {
    /// Creates a service ranking by best price.
    #[must_use]
    pub fn new(aggregator: EstimateAggregator, linker: RedirectLinker) -> Self {
        Self::with_ranking(aggregator, linker, Arc::new(BestPriceStrategy))
    }

    /// Creates a service with a custom ranking strategy.
    #[must_use]
    pub fn with_ranking(
        aggregator: EstimateAggregator,
        linker: RedirectLinker,
        ranking: Arc<dyn RankingStrategy>,
    ) -> Self {
        Self {
            aggregator,
            linker,
            ranking,
        }
    }

    /// Runs the pipeline for a validated request.
    ///
    /// Never fails. An empty result means no provider produced an estimate
    /// in time.
    pub async fn execute(&self, request: &RideRequest) -> Vec<Estimate> {
        let started = Instant::now();

        let (estimates, report) = self.aggregator.aggregate_with_report(request).await;
        let linked = self.linker.attach(estimates, request);
        let ranked = self.ranking.rank(linked);

        tracing::info!(
            request = %request,
            report = %report,
            ranking = self.ranking.name(),
            elapsed_ms = elapsed_ms(started.elapsed()),
            "comparison complete"
        );

        ranked
    }
}

fn elapsed_ms(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::application::services::estimate_aggregation::AggregationConfig;
    use crate::domain::value_objects::{ProviderId, RideCategory};
    use crate::infrastructure::providers::traits::ProviderAdapter;
    use async_trait::async_trait;

    #[derive(Debug)]
    struct StubAdapter {
        provider_id: ProviderId,
        quotes: Vec<(f64, u32)>,
    }

    impl StubAdapter {
        fn new(provider: &str, quotes: &[(f64, u32)]) -> Arc<dyn ProviderAdapter> {
            Arc::new(Self {
                provider_id: ProviderId::new(provider).unwrap(),
                quotes: quotes.to_vec(),
            })
        }
    }

    #[async_trait]
    impl ProviderAdapter for StubAdapter {
        fn provider_id(&self) -> &ProviderId {
            &self.provider_id
        }

        async fn get_estimates(&self, request: &RideRequest) -> Vec<Estimate> {
            self.quotes
                .iter()
                .map(|(price, eta)| {
                    Estimate::new(self.provider_id.clone(), request.category(), *price, *eta)
                        .unwrap()
                })
                .collect()
        }
    }

    fn service(adapters: Vec<Arc<dyn ProviderAdapter>>) -> CompareRidesService {
        CompareRidesService::new(
            EstimateAggregator::new(adapters, AggregationConfig::default()),
            RedirectLinker::default(),
        )
    }

    fn request() -> RideRequest {
        RideRequest::from_degrees(37.7749, -122.4194, 37.3382, -121.8863, RideCategory::Xl)
            .unwrap()
    }

    #[tokio::test]
    async fn execute_links_and_ranks() {
        let service = service(vec![
            StubAdapter::new("Uber", &[(20.0, 5)]),
            StubAdapter::new("Lyft", &[(18.0, 7)]),
        ]);

        let results = service.execute(&request()).await;

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].provider().as_str(), "Lyft");
        assert!(results[0].redirect_url().starts_with("https://lyft.com/ride"));
        assert_eq!(results[1].provider().as_str(), "Uber");
        assert!(results[1].redirect_url().starts_with("https://m.uber.com/ul/"));
        assert!(results.iter().all(|e| e.normalized_category() == RideCategory::Xl));
    }

    #[tokio::test]
    async fn execute_unknown_provider_keeps_empty_link() {
        let service = service(vec![StubAdapter::new("Via", &[(9.0, 2)])]);
        let results = service.execute(&request()).await;
        assert_eq!(results.len(), 1);
        assert!(!results[0].has_redirect_url());
    }

    #[test]
    fn elapsed_ms_saturates() {
        assert_eq!(elapsed_ms(Duration::from_millis(1234)), 1234);
        assert_eq!(elapsed_ms(Duration::MAX), u64::MAX);
    }

    #[tokio::test]
    async fn execute_with_no_estimates() {
        let service = service(vec![StubAdapter::new("Uber", &[])]);
        assert!(service.execute(&request()).await.is_empty());
    }
}
