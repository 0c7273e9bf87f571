//! # Infrastructure Layer
//!
//! Adapters to the outside world: provider integrations, settings and
//! logging.

pub mod config;
pub mod logging;
pub mod providers;
