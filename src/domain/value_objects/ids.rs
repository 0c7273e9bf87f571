//! # Identifiers
//!
//! String-based identifiers for providers.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider name of Uber.
pub const UBER: &str = "Uber";

/// Provider name of Lyft.
pub const LYFT: &str = "Lyft";

/// Identifier of a ride-hailing provider, e.g. `"Uber"`.
///
/// Never empty.
///
/// # Examples
///
/// ```
/// use ride_compare::domain::value_objects::ProviderId;
///
/// let id = ProviderId::new("Lyft").unwrap();
/// assert_eq!(id.as_str(), "Lyft");
/// assert!(ProviderId::new("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ProviderId(String);

impl ProviderId {
    /// Creates a provider id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyProviderId` if `id` is empty or whitespace.
    pub fn new(id: impl Into<String>) -> DomainResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(DomainError::EmptyProviderId);
        }
        Ok(Self(id))
    }

    /// Uber's provider id.
    #[must_use]
    pub fn uber() -> Self {
        Self(UBER.to_string())
    }

    /// Lyft's provider id.
    #[must_use]
    pub fn lyft() -> Self {
        Self(LYFT.to_string())
    }

    /// Returns the id as a string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ProviderId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ProviderId> for String {
    fn from(id: ProviderId) -> Self {
        id.0
    }
}

impl AsRef<str> for ProviderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
