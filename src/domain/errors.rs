//! # Domain Errors
//!
//! Error types for domain validation failures.
//!
//! # Examples
//!
//! ```
//! use ride_compare::domain::errors::DomainError;
//!
//! let err = DomainError::InvalidLatitude(999.0);
//! assert!(err.to_string().contains("999"));
//! ```

use thiserror::Error;

/// Error raised when a domain invariant is violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// Latitude outside [-90, 90] or not finite.
    #[error("invalid latitude: {0} (must be between -90 and 90)")]
    InvalidLatitude(f64),

    /// Longitude outside [-180, 180] or not finite.
    #[error("invalid longitude: {0} (must be between -180 and 180)")]
    InvalidLongitude(f64),

    /// Price negative or not finite.
    #[error("invalid price: {0} (must be a finite, non-negative amount)")]
    InvalidPrice(f64),

    /// Provider identifier is empty.
    #[error("provider id must not be empty")]
    EmptyProviderId,
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
