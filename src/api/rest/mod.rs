//! # REST API
//!
//! HTTP endpoints using axum.
//!
//! # Endpoints
//!
//! - `POST /compare` - Ranked estimates for a trip
//! - `GET /health` - Health check endpoint
//!
//! # Usage
//!
//! ```ignore
//! use ride_compare::api::rest::{create_router, AppState};
//! use std::sync::Arc;
//!
//! let state = Arc::new(AppState {
//!     compare_service: /* ... */,
//!     cors_origins: vec!["http://localhost:3000".to_string()],
//! });
//!
//! let router = create_router(state);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:8000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{
    ApiError, AppState, CompareRequest, ErrorResponse, HealthResponse, INTERNAL_ERROR_DETAIL,
};
pub use routes::create_router;
