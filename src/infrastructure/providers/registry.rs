//! # Provider Registry
//!
//! Static composition of the adapter list. Order here is the merge order
//! of every aggregation.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::infrastructure::config::AppSettings;
use crate::infrastructure::providers::lyft::LyftApiAdapter;
use crate::infrastructure::providers::mock::{MockBehavior, MockProfile, MockProviderAdapter};
use crate::infrastructure::providers::traits::ProviderAdapter;
use crate::infrastructure::providers::uber::UberApiAdapter;
use std::sync::Arc;

/// Builds the adapters in registration order: Uber, then Lyft.
///
/// A provider with an API key gets its live adapter, otherwise a mock.
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if a live adapter's HTTP
/// client cannot be constructed.
pub fn build_adapters(settings: &AppSettings) -> ApplicationResult<Vec<Arc<dyn ProviderAdapter>>> {
    let timeout_ms = settings.adapter_timeout_ms;

    let uber: Arc<dyn ProviderAdapter> = match settings.uber_api_key() {
        Some(key) => Arc::new(
            UberApiAdapter::new(&settings.uber_api_base_url, key, timeout_ms)
                .map_err(|e| ApplicationError::configuration(format!("uber adapter: {e}")))?,
        ),
        None => Arc::new(MockProviderAdapter::new(
            MockProfile::uber(),
            MockBehavior::default(),
        )),
    };

    let lyft: Arc<dyn ProviderAdapter> = match settings.lyft_api_key() {
        Some(key) => Arc::new(
            LyftApiAdapter::new(&settings.lyft_api_base_url, key, timeout_ms)
                .map_err(|e| ApplicationError::configuration(format!("lyft adapter: {e}")))?,
        ),
        None => Arc::new(MockProviderAdapter::new(
            MockProfile::lyft(),
            MockBehavior::default(),
        )),
    };

    tracing::info!(
        uber = if settings.uber_api_key().is_some() { "live" } else { "mock" },
        lyft = if settings.lyft_api_key().is_some() { "live" } else { "mock" },
        timeout_ms,
        "registered providers"
    );

    Ok(vec![uber, lyft])
}
