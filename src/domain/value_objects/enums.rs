//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! - [`RideCategory`] - The closed set of ride categories every provider
//!   taxonomy is normalized onto
//!
//! Parsing goes through Serde; the wire names are the `Display` forms.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Normalized ride category.
///
/// The string form is case-exact: `"Standard"`, `"XL"`, `"Premium"`.
///
/// # Examples
///
/// ```
/// use ride_compare::domain::value_objects::enums::RideCategory;
///
/// let category: RideCategory = serde_json::from_str("\"XL\"").unwrap();
/// assert_eq!(category, RideCategory::Xl);
/// assert_eq!(category.to_string(), "XL");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum RideCategory {
    /// Everyday ride for up to four passengers.
    Standard = 0,
    /// Larger vehicle for groups.
    #[serde(rename = "XL")]
    Xl = 1,
    /// High-end vehicle.
    Premium = 2,
}

impl RideCategory {
    /// All categories, in declaration order.
    pub const ALL: [Self; 3] = [Self::Standard, Self::Xl, Self::Premium];

    /// Returns the canonical string form.
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "Standard",
            Self::Xl => "XL",
            Self::Premium => "Premium",
        }
    }
}

impl fmt::Display for RideCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_wire_name() {
        for category in RideCategory::ALL {
            let wire = serde_json::to_string(&category).unwrap();
            assert_eq!(wire, format!("\"{category}\""));
        }
    }

    #[test]
    fn deserialize_is_case_exact() {
        for name in ["\"standard\"", "\"PREMIUM\"", "\"Helicopter\""] {
            assert!(serde_json::from_str::<RideCategory>(name).is_err());
        }
    }

    #[test]
    fn serde_uses_canonical_names() {
        assert_eq!(serde_json::to_string(&RideCategory::Xl).unwrap(), "\"XL\"");
        assert_eq!(
            serde_json::from_str::<RideCategory>("\"Premium\"").unwrap(),
            RideCategory::Premium
        );
        assert!(serde_json::from_str::<RideCategory>("\"Xl\"").is_err());
    }
}
