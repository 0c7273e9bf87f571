//! # Provider Adapter Trait
//!
//! Port definition for ride-hailing provider integrations.
//!
//! Every provider integration implements [`ProviderAdapter`]. The aggregator
//! holds adapters as `Arc<dyn ProviderAdapter>` in registration order.
//!
//! # Examples
//!
//! ```ignore
//! use ride_compare::infrastructure::providers::traits::ProviderAdapter;
//!
//! struct MyProviderAdapter { /* ... */ }
//!
//! #[async_trait::async_trait]
//! impl ProviderAdapter for MyProviderAdapter {
//!     // ... implement required methods
//! }
//! ```

use crate::domain::entities::{Estimate, RideRequest};
use crate::domain::value_objects::ProviderId;
use crate::infrastructure::providers::error::ProviderResult;
use async_trait::async_trait;
use std::fmt;

/// Port for one ride-hailing provider.
///
/// # Contract
///
/// `get_estimates` must not fail outward. Network errors, malformed
/// responses and simulated faults are logged inside the adapter and turned
/// into an empty list. Every returned estimate carries a category from the
/// closed [`RideCategory`](crate::domain::value_objects::RideCategory) set;
/// mapping the provider's own taxonomy is the adapter's job.
///
/// The call runs under a timeout owned by the caller and may be dropped at
/// any suspension point.
#[async_trait]
pub trait ProviderAdapter: Send + Sync + fmt::Debug {
    /// Returns the provider this adapter speaks for.
    fn provider_id(&self) -> &ProviderId;

    /// Fetches normalized estimates for the request.
    ///
    /// Returns an empty list on any failure.
    async fn get_estimates(&self, request: &RideRequest) -> Vec<Estimate>;
}

/// Converts an adapter-internal result into the infallible adapter output.
///
/// Logs the error against the provider and yields no estimates.
pub(crate) fn estimates_or_empty(
    provider: &ProviderId,
    result: ProviderResult<Vec<Estimate>>,
) -> Vec<Estimate> {
    match result {
        Ok(estimates) => estimates,
        Err(error) => {
            tracing::warn!(provider = %provider, error = %error, "provider returned no estimates");
            Vec::new()
        }
    }
}
