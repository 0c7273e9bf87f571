//! # Domain Entities
//!
//! - [`RideRequest`]: validated pickup/dropoff and requested category
//! - [`Estimate`]: normalized price/ETA quote from one provider

pub mod estimate;
pub mod ride_request;

pub use estimate::Estimate;
pub use ride_request::RideRequest;
