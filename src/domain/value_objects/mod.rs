//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`Coordinates`]: validated latitude/longitude pair
//! - [`ProviderId`]: non-empty provider identifier
//! - [`RideCategory`]: closed ride category set

pub mod coordinates;
pub mod enums;
pub mod ids;

pub use coordinates::Coordinates;
pub use enums::RideCategory;
pub use ids::{LYFT, ProviderId, UBER};
