//! # Uber API Adapter
//!
//! Live adapter against Uber's Rides API estimate endpoints.
//!
//! Issues the price and time estimate requests concurrently and joins them
//! on `product_id`. Products outside the normalized category set are
//! dropped.

use crate::domain::entities::{Estimate, RideRequest};
use crate::domain::value_objects::{ProviderId, RideCategory};
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::traits::{ProviderAdapter, estimates_or_empty};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Production base URL of the Uber API.
pub const DEFAULT_BASE_URL: &str = "https://api.uber.com";

#[derive(Debug, Deserialize)]
struct PriceEstimates {
    prices: Vec<PriceEstimate>,
}

#[derive(Debug, Deserialize)]
struct PriceEstimate {
    product_id: String,
    display_name: String,
    low_estimate: Option<f64>,
    high_estimate: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct TimeEstimates {
    times: Vec<TimeEstimate>,
}

#[derive(Debug, Deserialize)]
struct TimeEstimate {
    product_id: String,
    /// Seconds until pickup.
    estimate: u32,
}

/// Maps an Uber product name onto the category set.
fn category_for_product(display_name: &str) -> Option<RideCategory> {
    match display_name.to_ascii_lowercase().as_str() {
        "uberx" => Some(RideCategory::Standard),
        "uberxl" => Some(RideCategory::Xl),
        "black" | "uber black" => Some(RideCategory::Premium),
        _ => None,
    }
}

/// Adapter for the Uber Rides API.
#[derive(Clone)]
pub struct UberApiAdapter {
    provider_id: ProviderId,
    client: HttpClient,
    base_url: String,
    server_token: String,
}

impl UberApiAdapter {
    /// Creates an adapter using a server token.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InternalError` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        server_token: impl Into<String>,
        timeout_ms: u64,
    ) -> ProviderResult<Self> {
        Ok(Self {
            provider_id: ProviderId::uber(),
            client: HttpClient::new(timeout_ms)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            server_token: server_token.into(),
        })
    }

    async fn fetch(&self, request: &RideRequest) -> ProviderResult<Vec<Estimate>> {
        let pickup = request.pickup();
        let dropoff = request.dropoff();
        let price_params = [
            ("start_latitude", pickup.latitude()),
            ("start_longitude", pickup.longitude()),
            ("end_latitude", dropoff.latitude()),
            ("end_longitude", dropoff.longitude()),
        ];
        let time_params = [
            ("start_latitude", pickup.latitude()),
            ("start_longitude", pickup.longitude()),
        ];
        let price_url = format!("{}/v1.2/estimates/price", self.base_url);
        let time_url = format!("{}/v1.2/estimates/time", self.base_url);

        let headers = HttpClient::authorization("Token", &self.server_token)?;

        let (prices, times): (PriceEstimates, TimeEstimates) = tokio::try_join!(
            self.client
                .get_with_params_and_headers(&price_url, &price_params, headers.clone()),
            self.client
                .get_with_params_and_headers(&time_url, &time_params, headers),
        )?;

        let etas: HashMap<&str, u32> = times
            .times
            .iter()
            .map(|t| (t.product_id.as_str(), t.estimate.div_ceil(60)))
            .collect();

        prices
            .prices
            .iter()
            .filter(|p| category_for_product(&p.display_name) == Some(request.category()))
            .filter_map(|p| {
                let eta = etas.get(p.product_id.as_str())?;
                let price = match (p.low_estimate, p.high_estimate) {
                    (Some(low), Some(high)) => (low + high) / 2.0,
                    (Some(single), None) | (None, Some(single)) => single,
                    (None, None) => return None,
                };
                Some(
                    Estimate::new(self.provider_id.clone(), request.category(), price, *eta)
                        .map_err(|e| ProviderError::protocol_error(e.to_string())),
                )
            })
            .collect()
    }
}

impl fmt::Debug for UberApiAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UberApiAdapter")
            .field("provider_id", &self.provider_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ProviderAdapter for UberApiAdapter {
    fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    async fn get_estimates(&self, request: &RideRequest) -> Vec<Estimate> {
        estimates_or_empty(&self.provider_id, self.fetch(request).await)
    }
}
