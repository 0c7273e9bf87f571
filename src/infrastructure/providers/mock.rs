//! # Mock Provider Adapter
//!
//! Simulated provider used when no API credentials are configured.
//!
//! Prices are drawn from a per-category range and scaled by a rough
//! distance factor. Latency and failures are simulated so the aggregator's
//! timeout and isolation paths get exercised outside of tests too.
//!
//! # Examples
//!
//! ```
//! use ride_compare::infrastructure::providers::mock::{MockBehavior, MockProfile, MockProviderAdapter};
//!
//! let adapter = MockProviderAdapter::new(MockProfile::uber(), MockBehavior::instant());
//! ```

use crate::domain::entities::{Estimate, RideRequest};
use crate::domain::value_objects::{ProviderId, RideCategory};
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::traits::{ProviderAdapter, estimates_or_empty};
use async_trait::async_trait;
use rand::Rng;
use std::time::Duration;

/// Default lower bound of simulated latency.
const DEFAULT_MIN_LATENCY_MS: u64 = 200;

/// Default upper bound of simulated latency.
const DEFAULT_MAX_LATENCY_MS: u64 = 800;

/// Default probability of a simulated failure.
const DEFAULT_FAILURE_RATE: f64 = 0.05;

/// Price and ETA ranges for one category.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryRange {
    /// Lowest base price.
    pub min_price: f64,
    /// Highest base price.
    pub max_price: f64,
    /// Lowest ETA in minutes.
    pub min_eta: u32,
    /// Highest ETA in minutes.
    pub max_eta: u32,
}

impl CategoryRange {
    /// Creates a range.
    #[must_use]
    pub const fn new(min_price: f64, max_price: f64, min_eta: u32, max_eta: u32) -> Self {
        Self {
            min_price,
            max_price,
            min_eta,
            max_eta,
        }
    }
}

/// Pricing profile of a simulated provider.
#[derive(Debug, Clone, PartialEq)]
pub struct MockProfile {
    provider_id: ProviderId,
    standard: CategoryRange,
    xl: CategoryRange,
    premium: CategoryRange,
}

impl MockProfile {
    /// Creates a profile with explicit ranges.
    #[must_use]
    pub fn new(
        provider_id: ProviderId,
        standard: CategoryRange,
        xl: CategoryRange,
        premium: CategoryRange,
    ) -> Self {
        Self {
            provider_id,
            standard,
            xl,
            premium,
        }
    }

    /// Uber pricing.
    #[must_use]
    pub fn uber() -> Self {
        Self::new(
            ProviderId::uber(),
            CategoryRange::new(12.0, 28.0, 3, 8),
            CategoryRange::new(20.0, 45.0, 5, 12),
            CategoryRange::new(35.0, 80.0, 7, 15),
        )
    }

    /// Lyft pricing.
    #[must_use]
    pub fn lyft() -> Self {
        Self::new(
            ProviderId::lyft(),
            CategoryRange::new(10.0, 26.0, 2, 7),
            CategoryRange::new(16.0, 40.0, 6, 14),
            CategoryRange::new(32.0, 70.0, 8, 18),
        )
    }

    /// Returns the range for a category.
    #[must_use]
    pub fn range(&self, category: RideCategory) -> CategoryRange {
        match category {
            RideCategory::Standard => self.standard,
            RideCategory::Xl => self.xl,
            RideCategory::Premium => self.premium,
        }
    }
}

/// Simulated latency and failure behavior.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockBehavior {
    /// Lowest simulated latency in milliseconds.
    pub min_latency_ms: u64,
    /// Highest simulated latency in milliseconds.
    pub max_latency_ms: u64,
    /// Probability in [0, 1] that a call fails.
    pub failure_rate: f64,
}

impl Default for MockBehavior {
    fn default() -> Self {
        Self {
            min_latency_ms: DEFAULT_MIN_LATENCY_MS,
            max_latency_ms: DEFAULT_MAX_LATENCY_MS,
            failure_rate: DEFAULT_FAILURE_RATE,
        }
    }
}

impl MockBehavior {
    /// No latency, never fails.
    #[must_use]
    pub fn instant() -> Self {
        Self {
            min_latency_ms: 0,
            max_latency_ms: 0,
            failure_rate: 0.0,
        }
    }

    /// Fixed latency, never fails.
    #[must_use]
    pub fn with_latency(latency_ms: u64) -> Self {
        Self {
            min_latency_ms: latency_ms,
            max_latency_ms: latency_ms,
            failure_rate: 0.0,
        }
    }

    /// Sets the failure probability, clamped to [0, 1].
    #[must_use]
    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.failure_rate = clamp_probability(rate);
        self
    }
}

fn clamp_probability(rate: f64) -> f64 {
    if rate.is_finite() {
        rate.clamp(0.0, 1.0)
    } else {
        0.0
    }
}

impl CategoryRange {
    // Fields are public, so bounds may arrive inverted or non-finite.
    fn price_bounds(&self) -> (f64, f64) {
        let low = self.min_price.min(self.max_price);
        let high = self.min_price.max(self.max_price);
        if low.is_finite() && high.is_finite() {
            (low, high)
        } else {
            (0.0, 0.0)
        }
    }

    fn eta_bounds(&self) -> (u32, u32) {
        (self.min_eta.min(self.max_eta), self.min_eta.max(self.max_eta))
    }
}

/// One random draw for a call.
#[derive(Debug, Clone, Copy)]
struct Draw {
    latency: Duration,
    fails: bool,
    base_price: f64,
    eta_minutes: u32,
}

/// Provider adapter producing simulated estimates.
#[derive(Debug, Clone)]
pub struct MockProviderAdapter {
    profile: MockProfile,
    behavior: MockBehavior,
}

impl MockProviderAdapter {
    /// Creates a mock adapter.
    #[must_use]
    pub fn new(profile: MockProfile, behavior: MockBehavior) -> Self {
        Self { profile, behavior }
    }

    /// Scales price with straight-line distance in degrees, clamped to [0.5, 2.0].
    #[must_use]
    pub fn distance_factor(request: &RideRequest) -> f64 {
        let lat_diff = request.dropoff().latitude() - request.pickup().latitude();
        let lng_diff = request.dropoff().longitude() - request.pickup().longitude();
        (lat_diff.hypot(lng_diff) * 50.0).clamp(0.5, 2.0)
    }

    fn draw(&self, category: RideCategory) -> Draw {
        let range = self.profile.range(category);
        let mut rng = rand::thread_rng();
        let min_latency = self.behavior.min_latency_ms.min(self.behavior.max_latency_ms);
        let (min_price, max_price) = range.price_bounds();
        let (min_eta, max_eta) = range.eta_bounds();
        Draw {
            latency: Duration::from_millis(
                rng.gen_range(min_latency..=self.behavior.max_latency_ms),
            ),
            fails: rng.gen_bool(clamp_probability(self.behavior.failure_rate)),
            base_price: rng.gen_range(min_price..=max_price),
            eta_minutes: rng.gen_range(min_eta..=max_eta),
        }
    }

    fn quote(&self, request: &RideRequest, draw: Draw) -> ProviderResult<Vec<Estimate>> {
        if draw.fails {
            return Err(ProviderError::connection(format!(
                "Simulated {} API timeout",
                self.profile.provider_id
            )));
        }

        let price = (draw.base_price * Self::distance_factor(request) * 100.0).round() / 100.0;
        let estimate = Estimate::new(
            self.profile.provider_id.clone(),
            request.category(),
            price,
            draw.eta_minutes,
        )
        .map_err(|e| ProviderError::internal_error(e.to_string()))?;

        Ok(vec![estimate])
    }
}

#[async_trait]
impl ProviderAdapter for MockProviderAdapter {
    fn provider_id(&self) -> &ProviderId {
        &self.profile.provider_id
    }

    async fn get_estimates(&self, request: &RideRequest) -> Vec<Estimate> {
        let draw = self.draw(request.category());
        if !draw.latency.is_zero() {
            tokio::time::sleep(draw.latency).await;
        }
        estimates_or_empty(&self.profile.provider_id, self.quote(request, draw))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;

    fn sample_request(category: RideCategory) -> RideRequest {
        RideRequest::from_degrees(37.7749, -122.4194, 37.3382, -121.8863, category).unwrap()
    }

    #[tokio::test]
    async fn uber_returns_one_estimate_in_requested_category() {
        let adapter = MockProviderAdapter::new(MockProfile::uber(), MockBehavior::instant());
        for category in RideCategory::ALL {
            let estimates = adapter.get_estimates(&sample_request(category)).await;
            assert_eq!(estimates.len(), 1);
            assert_eq!(estimates[0].provider().as_str(), "Uber");
            assert_eq!(estimates[0].normalized_category(), category);
        }
    }

    #[tokio::test]
    async fn uber_price_reasonable() {
        let adapter = MockProviderAdapter::new(MockProfile::uber(), MockBehavior::instant());
        for _ in 0..20 {
            let estimates = adapter.get_estimates(&sample_request(RideCategory::Standard)).await;
            let price = estimates[0].estimated_price();
            assert!((5.0..=60.0).contains(&price), "unexpected price: {price}");
        }
    }

    #[tokio::test]
    async fn lyft_price_and_eta_reasonable() {
        let adapter = MockProviderAdapter::new(MockProfile::lyft(), MockBehavior::instant());
        for _ in 0..20 {
            let estimates = adapter.get_estimates(&sample_request(RideCategory::Standard)).await;
            let estimate = &estimates[0];
            assert_eq!(estimate.provider().as_str(), "Lyft");
            assert!((4.0..=55.0).contains(&estimate.estimated_price()));
            assert!((2..=7).contains(&estimate.eta_minutes()));
        }
    }

    #[tokio::test]
    async fn always_failing_returns_empty() {
        let adapter = MockProviderAdapter::new(
            MockProfile::lyft(),
            MockBehavior::instant().with_failure_rate(1.0),
        );
        let estimates = adapter.get_estimates(&sample_request(RideCategory::Xl)).await;
        assert!(estimates.is_empty());
    }

    #[test]
    fn distance_factor_scaling() {
        let short =
            RideRequest::from_degrees(37.77, -122.41, 37.78, -122.42, RideCategory::Standard)
                .unwrap();
        let long =
            RideRequest::from_degrees(37.77, -122.41, 38.77, -121.41, RideCategory::Standard)
                .unwrap();
        let short_factor = MockProviderAdapter::distance_factor(&short);
        let long_factor = MockProviderAdapter::distance_factor(&long);
        assert!(long_factor > short_factor);
        assert!((long_factor - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn failure_rate_is_clamped() {
        let high = MockBehavior::instant().with_failure_rate(3.0);
        assert!((high.failure_rate - 1.0).abs() < f64::EPSILON);
        let nan = MockBehavior::instant().with_failure_rate(f64::NAN);
        assert!(nan.failure_rate.abs() < f64::EPSILON);
    }

    #[tokio::test]
    async fn out_of_range_fields_do_not_panic() {
        let inverted = CategoryRange::new(30.0, 10.0, 9, 2);
        let profile = MockProfile::new(ProviderId::uber(), inverted, inverted, inverted);
        let behavior = MockBehavior {
            min_latency_ms: 5,
            max_latency_ms: 0,
            failure_rate: -0.5,
        };
        let adapter = MockProviderAdapter::new(profile, behavior);

        let estimates = adapter.get_estimates(&sample_request(RideCategory::Standard)).await;
        assert_eq!(estimates.len(), 1);
        assert!((2..=9).contains(&estimates[0].eta_minutes()));

        let always = MockProviderAdapter::new(
            MockProfile::lyft(),
            MockBehavior {
                failure_rate: 2.0,
                ..MockBehavior::instant()
            },
        );
        assert!(always.get_estimates(&sample_request(RideCategory::Xl)).await.is_empty());
    }

    #[tokio::test]
    async fn non_finite_price_bounds_do_not_panic() {
        let range = CategoryRange::new(f64::NAN, f64::INFINITY, 3, 3);
        let profile = MockProfile::new(ProviderId::lyft(), range, range, range);
        let adapter = MockProviderAdapter::new(profile, MockBehavior::instant());
        let estimates = adapter.get_estimates(&sample_request(RideCategory::Premium)).await;
        assert_eq!(estimates.len(), 1);
        assert!(estimates[0].estimated_price().abs() < f64::EPSILON);
    }
}
