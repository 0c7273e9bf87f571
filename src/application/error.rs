//! # Application Errors
//!
//! Error types for the application layer.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Domain(DomainError)         - Invalid coordinates, prices, ids
//! ├── Validation(String)          - Request shape failures
//! ├── Configuration(String)       - Settings that cannot be loaded or are invalid
//! └── Internal(String)            - Unexpected faults
//! ```
//!
//! Provider failures are absent on purpose: they are absorbed inside each
//! adapter and at the aggregator, and never reach this layer.
//!
//! # Examples
//!
//! ```
//! use ride_compare::application::error::ApplicationError;
//!
//! let err = ApplicationError::validation("category is required");
//! assert!(err.is_validation());
//! ```

use crate::domain::errors::DomainError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain invariant violated by caller input.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Request validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Settings could not be loaded or are invalid.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Returns true if the caller sent invalid input.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Domain(_))
    }
}

impl From<config::ConfigError> for ApplicationError {
    fn from(error: config::ConfigError) -> Self {
        Self::Configuration(error.to_string())
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn domain_error_is_validation() {
        let err: ApplicationError = DomainError::InvalidLatitude(999.0).into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("999"));
    }

    #[test]
    fn configuration_is_not_validation() {
        let err = ApplicationError::configuration("port must be positive");
        assert!(!err.is_validation());
        assert_eq!(err.to_string(), "configuration error: port must be positive");
    }

    #[test]
    fn internal_display() {
        let err = ApplicationError::internal("boom");
        assert_eq!(err.to_string(), "internal error: boom");
    }
}
