//! # Application Layer
//!
//! Comparison pipeline and its supporting services.

pub mod error;
pub mod services;
