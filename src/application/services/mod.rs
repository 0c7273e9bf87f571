//! # Application Services
//!
//! Services that orchestrate domain logic and infrastructure.
//!
//! This module provides application-level services including:
//! - [`CompareRidesService`]: Aggregate, link and rank pipeline
//! - [`EstimateAggregator`]: Concurrent estimate collection
//! - [`RedirectLinker`]: Provider deep links
//! - [`RankingStrategy`]: Strategies for ranking estimates

pub mod compare_rides;
pub mod estimate_aggregation;
pub mod ranking_strategy;
pub mod redirect_links;

pub use compare_rides::CompareRidesService;
pub use estimate_aggregation::{AggregationConfig, AggregationReport, EstimateAggregator};
pub use ranking_strategy::{BestPriceStrategy, RankingStrategy, rank_estimates};
pub use redirect_links::{DeepLinkConfig, RedirectLinker};
