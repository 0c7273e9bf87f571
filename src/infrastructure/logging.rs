//! # Logging
//!
//! `tracing` subscriber setup.

use crate::infrastructure::config::{AppSettings, LogFormat};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

/// Default filter directive when `RUST_LOG` is unset.
#[must_use]
pub fn default_directive(settings: &AppSettings) -> &'static str {
    if settings.debug { "debug" } else { "info" }
}

/// Installs the global subscriber.
///
/// `RUST_LOG` takes precedence over the settings-derived default.
/// Repeated calls are no-ops.
pub fn init_tracing(settings: &AppSettings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(settings)));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match settings.log_format {
        LogFormat::Json => registry
            .with(fmt::layer().json().with_current_span(true))
            .try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().with_target(true)).try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
