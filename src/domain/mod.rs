//! # Domain Layer
//!
//! Core types of a ride comparison, free of I/O.

pub mod entities;
pub mod errors;
pub mod value_objects;
