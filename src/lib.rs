//! # RideCompare
//!
//! Ride-hailing price comparison service.
//!
//! A comparison request fans out to every registered provider adapter
//! concurrently, drops providers that fail or exceed the per-adapter
//! timeout, attaches a deep link to each surviving estimate and returns the
//! list ranked by price, then ETA.
//!
//! # Layers
//!
//! - [`domain`]: coordinates, categories, requests and estimates
//! - [`application`]: aggregation, deep links, ranking and the pipeline
//! - [`infrastructure`]: provider adapters, settings, logging
//! - [`api`]: axum REST surface

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
