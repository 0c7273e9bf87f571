//! # Coordinates
//!
//! Validated geographic position.

use crate::domain::errors::{DomainError, DomainResult};
use serde::Serialize;
use std::fmt;

/// Latitude bound in degrees.
pub const MAX_LATITUDE: f64 = 90.0;

/// Longitude bound in degrees.
pub const MAX_LONGITUDE: f64 = 180.0;

/// A latitude/longitude pair in decimal degrees.
///
/// # Invariants
///
/// - Latitude is finite and within [-90, 90]
/// - Longitude is finite and within [-180, 180]
///
/// # Examples
///
/// ```
/// use ride_compare::domain::value_objects::Coordinates;
///
/// let sf = Coordinates::new(37.7749, -122.4194).unwrap();
/// assert_eq!(sf.latitude(), 37.7749);
/// assert!(Coordinates::new(999.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    latitude: f64,
    longitude: f64,
}

impl Coordinates {
    /// Creates validated coordinates.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLatitude` or `DomainError::InvalidLongitude`
    /// if a component is out of range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> DomainResult<Self> {
        if !latitude.is_finite() || latitude.abs() > MAX_LATITUDE {
            return Err(DomainError::InvalidLatitude(latitude));
        }
        if !longitude.is_finite() || longitude.abs() > MAX_LONGITUDE {
            return Err(DomainError::InvalidLongitude(longitude));
        }
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Returns the latitude in degrees.
    #[inline]
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude in degrees.
    #[inline]
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}
