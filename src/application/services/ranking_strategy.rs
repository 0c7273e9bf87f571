//! # Ranking Strategy
//!
//! Strategies for ordering estimates.
//!
//! This module provides the [`RankingStrategy`] trait and the
//! [`BestPriceStrategy`] used to order comparison results.

use crate::domain::entities::Estimate;
use std::cmp::Ordering;
use std::fmt;

/// Trait for ranking strategies.
///
/// Implementations reorder estimates without adding, dropping or modifying
/// any of them.
pub trait RankingStrategy: Send + Sync + fmt::Debug {
    /// Returns the estimates in ranked order, best first.
    fn rank(&self, estimates: Vec<Estimate>) -> Vec<Estimate>;

    /// Returns the name of this ranking strategy.
    fn name(&self) -> &'static str;
}

/// Best price ranking strategy.
///
/// Orders by ascending price, then ascending ETA. The sort is stable, so
/// estimates equal on both keys keep their input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BestPriceStrategy;

impl BestPriceStrategy {
    /// Creates a new best price strategy.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn compare(a: &Estimate, b: &Estimate) -> Ordering {
        a.estimated_price()
            .total_cmp(&b.estimated_price())
            .then_with(|| a.eta_minutes().cmp(&b.eta_minutes()))
    }
}

impl RankingStrategy for BestPriceStrategy {
    fn rank(&self, mut estimates: Vec<Estimate>) -> Vec<Estimate> {
        estimates.sort_by(Self::compare);
        estimates
    }

    fn name(&self) -> &'static str {
        "BestPrice"
    }
}

/// Ranks estimates with [`BestPriceStrategy`].
#[must_use]
pub fn rank_estimates(estimates: Vec<Estimate>) -> Vec<Estimate> {
    BestPriceStrategy.rank(estimates)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use super::*;
    use crate::domain::value_objects::{ProviderId, RideCategory};

    fn estimate(provider: &str, price: f64, eta: u32) -> Estimate {
        Estimate::new(
            ProviderId::new(provider).unwrap(),
            RideCategory::Standard,
            price,
            eta,
        )
        .unwrap()
    }

    fn summary(estimates: &[Estimate]) -> Vec<(&str, f64, u32)> {
        estimates
            .iter()
            .map(|e| (e.provider().as_str(), e.estimated_price(), e.eta_minutes()))
            .collect()
    }

    #[test]
    fn ranks_by_price_ascending() {
        let ranked = rank_estimates(vec![
            estimate("Uber", 20.0, 5),
            estimate("Lyft", 18.0, 7),
        ]);
        assert_eq!(summary(&ranked), vec![("Lyft", 18.0, 7), ("Uber", 20.0, 5)]);
    }

    #[test]
    fn breaks_price_ties_by_eta() {
        let ranked = rank_estimates(vec![
            estimate("Uber", 15.0, 9),
            estimate("Lyft", 15.0, 4),
        ]);
        assert_eq!(summary(&ranked), vec![("Lyft", 15.0, 4), ("Uber", 15.0, 9)]);
    }

    #[test]
    fn signed_zero_prices_tie_on_eta() {
        let ranked = rank_estimates(vec![
            estimate("B", 0.0, 1),
            estimate("A", -0.0, 10),
        ]);
        let names: Vec<_> = ranked.iter().map(|e| e.provider().as_str()).collect();
        assert_eq!(names, vec!["B", "A"]);
    }

    #[test]
    fn full_ties_keep_input_order() {
        let ranked = rank_estimates(vec![
            estimate("Uber", 15.0, 4),
            estimate("Lyft", 15.0, 4),
        ]);
        assert_eq!(summary(&ranked), vec![("Uber", 15.0, 4), ("Lyft", 15.0, 4)]);
    }

    #[test]
    fn ranks_mixed_list() {
        let ranked = rank_estimates(vec![
            estimate("A", 30.0, 1),
            estimate("B", 10.0, 20),
            estimate("C", 10.0, 3),
            estimate("D", 0.0, 50),
        ]);
        let names: Vec<_> = ranked.iter().map(|e| e.provider().as_str()).collect();
        assert_eq!(names, vec!["D", "C", "B", "A"]);
    }

    #[test]
    fn empty_and_single() {
        assert!(rank_estimates(vec![]).is_empty());
        let ranked = rank_estimates(vec![estimate("Uber", 12.5, 3)]);
        assert_eq!(ranked.len(), 1);
    }

    #[test]
    fn strategy_name() {
        assert_eq!(BestPriceStrategy::new().name(), "BestPrice");
    }
}
