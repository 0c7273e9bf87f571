//! # Ride Request
//!
//! The immutable input of a comparison.

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Coordinates, RideCategory};
use serde::Serialize;
use std::fmt;

/// A validated pickup/dropoff pair and the requested category.
///
/// `Copy`, so every adapter invocation receives its own copy.
///
/// # Examples
///
/// ```
/// use ride_compare::domain::entities::RideRequest;
/// use ride_compare::domain::value_objects::RideCategory;
///
/// let request = RideRequest::from_degrees(
///     37.7749, -122.4194,
///     37.3382, -121.8863,
///     RideCategory::Standard,
/// ).unwrap();
/// assert_eq!(request.dropoff().latitude(), 37.3382);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RideRequest {
    pickup: Coordinates,
    dropoff: Coordinates,
    category: RideCategory,
}

impl RideRequest {
    /// Creates a request from already-validated coordinates.
    #[must_use]
    pub fn new(pickup: Coordinates, dropoff: Coordinates, category: RideCategory) -> Self {
        Self {
            pickup,
            dropoff,
            category,
        }
    }

    /// Creates a request from raw degrees, validating each coordinate.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if any latitude or longitude is out of range.
    pub fn from_degrees(
        pickup_lat: f64,
        pickup_lng: f64,
        drop_lat: f64,
        drop_lng: f64,
        category: RideCategory,
    ) -> DomainResult<Self> {
        Ok(Self::new(
            Coordinates::new(pickup_lat, pickup_lng)?,
            Coordinates::new(drop_lat, drop_lng)?,
            category,
        ))
    }

    /// Returns the pickup position.
    #[inline]
    #[must_use]
    pub fn pickup(&self) -> Coordinates {
        self.pickup
    }

    /// Returns the dropoff position.
    #[inline]
    #[must_use]
    pub fn dropoff(&self) -> Coordinates {
        self.dropoff
    }

    /// Returns the requested category.
    #[inline]
    #[must_use]
    pub fn category(&self) -> RideCategory {
        self.category
    }
}

impl fmt::Display for RideRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RideRequest({} -> {} {})",
            self.pickup, self.dropoff, self.category
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;

    #[test]
    fn from_degrees_validates_each_point() {
        let err = RideRequest::from_degrees(37.0, -122.0, 37.0, -999.0, RideCategory::Xl);
        assert_eq!(err, Err(DomainError::InvalidLongitude(-999.0)));
    }

    #[test]
    fn display_format() {
        let request =
            RideRequest::from_degrees(1.5, 2.0, 3.0, -4.25, RideCategory::Premium).unwrap();
        assert_eq!(request.to_string(), "RideRequest(1.5,2 -> 3,-4.25 Premium)");
    }
}
