//! # REST Handlers
//!
//! Request/response types and handlers for the comparison API.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::{CompareRidesService, EstimateAggregator, RedirectLinker};
use crate::domain::entities::{Estimate, RideRequest};
use crate::domain::value_objects::RideCategory;
use crate::infrastructure::config::AppSettings;
use crate::infrastructure::providers::build_adapters;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::Instrument;
use uuid::Uuid;

/// Body returned for every internal fault. Never carries fault detail.
pub const INTERNAL_ERROR_DETAIL: &str = "An internal error occurred. Please try again.";

// ============================================================================
// State
// ============================================================================

/// Shared application state.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Comparison pipeline.
    pub compare_service: CompareRidesService,
    /// Origins allowed by CORS.
    pub cors_origins: Vec<String>,
}

impl AppState {
    /// Wires the pipeline from settings.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a provider adapter
    /// cannot be built.
    pub fn from_settings(settings: &AppSettings) -> ApplicationResult<Self> {
        let aggregator =
            EstimateAggregator::new(build_adapters(settings)?, settings.aggregation_config());
        let linker = RedirectLinker::new(settings.deep_links());
        Ok(Self {
            compare_service: CompareRidesService::new(aggregator, linker),
            cors_origins: settings.cors_origins.clone(),
        })
    }
}

// ============================================================================
// Request / Response Types
// ============================================================================

/// Body of `POST /compare`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct CompareRequest {
    /// Pickup latitude in degrees.
    pub pickup_lat: f64,
    /// Pickup longitude in degrees.
    pub pickup_lng: f64,
    /// Dropoff latitude in degrees.
    pub drop_lat: f64,
    /// Dropoff longitude in degrees.
    pub drop_lng: f64,
    /// Requested category.
    pub category: RideCategory,
}

impl TryFrom<CompareRequest> for RideRequest {
    type Error = ApplicationError;

    fn try_from(body: CompareRequest) -> Result<Self, Self::Error> {
        Ok(RideRequest::from_degrees(
            body.pickup_lat,
            body.pickup_lng,
            body.drop_lat,
            body.drop_lng,
            body.category,
        )?)
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub detail: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `ok` while the process serves requests.
    pub status: String,
}

// ============================================================================
// Errors
// ============================================================================

/// HTTP-facing error.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request rejected before reaching the pipeline.
    #[error("{0}")]
    Validation(String),
    /// Unexpected fault; detail is logged, never returned.
    #[error("{0}")]
    Internal(String),
}

impl From<ApplicationError> for ApiError {
    fn from(err: ApplicationError) -> Self {
        if err.is_validation() {
            ApiError::Validation(err.to_string())
        } else {
            ApiError::Internal(err.to_string())
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::Validation(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::Validation(detail) => (StatusCode::UNPROCESSABLE_ENTITY, detail),
            ApiError::Internal(detail) => {
                tracing::error!(error = %detail, "internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_DETAIL.to_string(),
                )
            }
        };
        (status, Json(ErrorResponse { detail })).into_response()
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// `POST /compare`: ranked estimates for a trip.
///
/// # Errors
///
/// Returns `ApiError::Validation` for any malformed body.
pub async fn compare_rides(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<CompareRequest>, JsonRejection>,
) -> Result<Json<Vec<Estimate>>, ApiError> {
    let Json(body) = payload?;
    let request = RideRequest::try_from(body)?;

    let span = tracing::info_span!("compare", request_id = %Uuid::new_v4());
    let estimates = state
        .compare_service
        .execute(&request)
        .instrument(span)
        .await;

    Ok(Json(estimates))
}

/// `GET /health`.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}
