//! # Estimate Entity
//!
//! One provider's price/ETA quote for a requested ride.
//!
//! # Examples
//!
//! ```
//! use ride_compare::domain::entities::Estimate;
//! use ride_compare::domain::value_objects::{ProviderId, RideCategory};
//!
//! let estimate = Estimate::new(
//!     ProviderId::new("Uber").unwrap(),
//!     RideCategory::Standard,
//!     18.40,
//!     4,
//! ).unwrap();
//!
//! assert!(estimate.redirect_url().is_empty());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{ProviderId, RideCategory};
use serde::Serialize;
use std::fmt;

/// A normalized estimate produced by a provider adapter.
///
/// # Invariants
///
/// - Provider id is non-empty
/// - Price is finite and non-negative
/// - The redirect URL is empty until the redirect linker sets it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    /// Provider that quoted this ride.
    provider: ProviderId,
    /// Category after mapping the provider taxonomy.
    normalized_category: RideCategory,
    /// Estimated price, currency implicit.
    estimated_price: f64,
    /// Estimated pickup time in whole minutes.
    eta_minutes: u32,
    /// Provider deep link, empty when unknown.
    redirect_url: String,
}

impl Estimate {
    /// Creates a new estimate with an empty redirect URL.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` if the price is negative or not finite.
    pub fn new(
        provider: ProviderId,
        normalized_category: RideCategory,
        estimated_price: f64,
        eta_minutes: u32,
    ) -> DomainResult<Self> {
        if !estimated_price.is_finite() || estimated_price < 0.0 {
            return Err(DomainError::InvalidPrice(estimated_price));
        }
        Ok(Self {
            provider,
            normalized_category,
            // -0.0 becomes 0.0
            estimated_price: estimated_price + 0.0,
            eta_minutes,
            redirect_url: String::new(),
        })
    }

    /// Returns the provider id.
    #[inline]
    #[must_use]
    pub fn provider(&self) -> &ProviderId {
        &self.provider
    }

    /// Returns the normalized category.
    #[inline]
    #[must_use]
    pub fn normalized_category(&self) -> RideCategory {
        self.normalized_category
    }

    /// Returns the estimated price.
    #[inline]
    #[must_use]
    pub fn estimated_price(&self) -> f64 {
        self.estimated_price
    }

    /// Returns the ETA in minutes.
    #[inline]
    #[must_use]
    pub fn eta_minutes(&self) -> u32 {
        self.eta_minutes
    }

    /// Returns the redirect URL (empty if none was attached).
    #[inline]
    #[must_use]
    pub fn redirect_url(&self) -> &str {
        &self.redirect_url
    }

    /// Returns true if a redirect URL has been attached.
    #[inline]
    #[must_use]
    pub fn has_redirect_url(&self) -> bool {
        !self.redirect_url.is_empty()
    }

    /// Attaches the provider deep link.
    #[must_use]
    pub(crate) fn with_redirect_url(mut self, url: String) -> Self {
        self.redirect_url = url;
        self
    }
}

impl fmt::Display for Estimate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Estimate({} {} ${:.2} eta={}m)",
            self.provider, self.normalized_category, self.estimated_price, self.eta_minutes
        )
    }
}
