//! # Lyft API Adapter
//!
//! Live adapter against Lyft's public cost and ETA endpoints.

use crate::domain::entities::{Estimate, RideRequest};
use crate::domain::value_objects::{ProviderId, RideCategory};
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::http_client::HttpClient;
use crate::infrastructure::providers::traits::{ProviderAdapter, estimates_or_empty};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;

/// Production base URL of the Lyft API.
pub const DEFAULT_BASE_URL: &str = "https://api.lyft.com";

#[derive(Debug, Deserialize)]
struct CostEstimates {
    cost_estimates: Vec<CostEstimate>,
}

#[derive(Debug, Deserialize)]
struct CostEstimate {
    ride_type: String,
    estimated_cost_cents_min: Option<u64>,
    estimated_cost_cents_max: Option<u64>,
}

#[derive(Debug, Deserialize)]
struct EtaEstimates {
    eta_estimates: Vec<EtaEstimate>,
}

#[derive(Debug, Deserialize)]
struct EtaEstimate {
    ride_type: String,
    eta_seconds: Option<u32>,
}

fn category_for_ride_type(ride_type: &str) -> Option<RideCategory> {
    match ride_type {
        "lyft" => Some(RideCategory::Standard),
        "lyft_plus" | "lyft_xl" => Some(RideCategory::Xl),
        "lyft_lux" => Some(RideCategory::Premium),
        _ => None,
    }
}

/// Adapter for the Lyft API.
#[derive(Clone)]
pub struct LyftApiAdapter {
    provider_id: ProviderId,
    client: HttpClient,
    base_url: String,
    access_token: String,
}

impl LyftApiAdapter {
    /// Creates an adapter using an OAuth access token.
    ///
    /// # Errors
    ///
    /// Returns `ProviderError::InternalError` if the HTTP client cannot be built.
    pub fn new(
        base_url: impl Into<String>,
        access_token: impl Into<String>,
        timeout_ms: u64,
    ) -> ProviderResult<Self> {
        Ok(Self {
            provider_id: ProviderId::lyft(),
            client: HttpClient::new(timeout_ms)?,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            access_token: access_token.into(),
        })
    }

    async fn fetch(&self, request: &RideRequest) -> ProviderResult<Vec<Estimate>> {
        let pickup = request.pickup();
        let dropoff = request.dropoff();
        let cost_params = [
            ("start_lat", pickup.latitude()),
            ("start_lng", pickup.longitude()),
            ("end_lat", dropoff.latitude()),
            ("end_lng", dropoff.longitude()),
        ];
        let eta_params = [("lat", pickup.latitude()), ("lng", pickup.longitude())];
        let cost_url = format!("{}/v1/cost", self.base_url);
        let eta_url = format!("{}/v1/eta", self.base_url);
        let headers = HttpClient::authorization("Bearer", &self.access_token)?;

        let (costs, etas): (CostEstimates, EtaEstimates) = tokio::try_join!(
            self.client
                .get_with_params_and_headers(&cost_url, &cost_params, headers.clone()),
            self.client
                .get_with_params_and_headers(&eta_url, &eta_params, headers),
        )?;

        let etas: HashMap<&str, u32> = etas
            .eta_estimates
            .iter()
            .filter_map(|e| Some((e.ride_type.as_str(), e.eta_seconds?.div_ceil(60))))
            .collect();

        costs
            .cost_estimates
            .iter()
            .filter(|c| category_for_ride_type(&c.ride_type) == Some(request.category()))
            .filter_map(|c| {
                let eta = etas.get(c.ride_type.as_str())?;
                let cents = match (c.estimated_cost_cents_min, c.estimated_cost_cents_max) {
                    (Some(min), Some(max)) => (min as f64 + max as f64) / 2.0,
                    (Some(single), None) | (None, Some(single)) => single as f64,
                    (None, None) => return None,
                };
                Some(
                    Estimate::new(
                        self.provider_id.clone(),
                        request.category(),
                        cents.round() / 100.0,
                        *eta,
                    )
                    .map_err(|e| ProviderError::protocol_error(e.to_string())),
                )
            })
            .collect()
    }
}

impl fmt::Debug for LyftApiAdapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LyftApiAdapter")
            .field("provider_id", &self.provider_id)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[async_trait]
impl ProviderAdapter for LyftApiAdapter {
    fn provider_id(&self) -> &ProviderId {
        &self.provider_id
    }

    async fn get_estimates(&self, request: &RideRequest) -> Vec<Estimate> {
        estimates_or_empty(&self.provider_id, self.fetch(request).await)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn request(category: RideCategory) -> RideRequest {
        RideRequest::from_degrees(37.7749, -122.4194, 37.3382, -121.8863, category).unwrap()
    }

    #[tokio::test]
    async fn maps_lux_to_premium() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/cost"))
            .and(query_param("start_lat", "37.7749"))
            .and(query_param("end_lng", "-121.8863"))
            .and(header("authorization", "Bearer tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cost_estimates": [
                    {"ride_type": "lyft", "estimated_cost_cents_min": 1052, "estimated_cost_cents_max": 1763},
                    {"ride_type": "lyft_lux", "estimated_cost_cents_min": 4000, "estimated_cost_cents_max": 5000}
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/eta"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "eta_estimates": [
                    {"ride_type": "lyft", "eta_seconds": 120},
                    {"ride_type": "lyft_lux", "eta_seconds": 601}
                ]
            })))
            .mount(&server)
            .await;
        let adapter = LyftApiAdapter::new(server.uri(), "tok", 1000).unwrap();

        let estimates = adapter.get_estimates(&request(RideCategory::Premium)).await;

        assert_eq!(estimates.len(), 1);
        assert_eq!(estimates[0].provider().as_str(), "Lyft");
        assert!((estimates[0].estimated_price() - 45.0).abs() < f64::EPSILON);
        assert_eq!(estimates[0].eta_minutes(), 11);
    }

    #[tokio::test]
    async fn missing_eta_drops_product() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/cost"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cost_estimates": [
                    {"ride_type": "lyft", "estimated_cost_cents_min": 1000, "estimated_cost_cents_max": 1200}
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/eta"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "eta_estimates": [{"ride_type": "lyft", "eta_seconds": null}]
            })))
            .mount(&server)
            .await;
        let adapter = LyftApiAdapter::new(server.uri(), "tok", 1000).unwrap();

        assert!(adapter.get_estimates(&request(RideCategory::Standard)).await.is_empty());
    }

    #[tokio::test]
    async fn malformed_response_yields_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;
        let adapter = LyftApiAdapter::new(server.uri(), "tok", 1000).unwrap();

        assert!(adapter.get_estimates(&request(RideCategory::Standard)).await.is_empty());
    }

    #[tokio::test]
    async fn huge_cents_do_not_overflow() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/cost"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "cost_estimates": [
                    {"ride_type": "lyft", "estimated_cost_cents_min": u64::MAX, "estimated_cost_cents_max": 1}
                ]
            })))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/v1/eta"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "eta_estimates": [{"ride_type": "lyft", "eta_seconds": 60}]
            })))
            .mount(&server)
            .await;
        let adapter = LyftApiAdapter::new(server.uri(), "tok", 1000).unwrap();

        let estimates = adapter.get_estimates(&request(RideCategory::Standard)).await;

        assert_eq!(estimates.len(), 1);
        assert!(estimates[0].estimated_price().is_finite());
        assert!(estimates[0].estimated_price() > 1.0e16);
    }

    #[test]
    fn ride_type_mapping() {
        assert_eq!(category_for_ride_type("lyft_plus"), Some(RideCategory::Xl));
        assert_eq!(category_for_ride_type("lyft_shared"), None);
    }
}
