//! # Provider Adapters
//!
//! Integrations with ride-hailing providers.
//!
//! - [`ProviderAdapter`]: port implemented by every integration
//! - [`MockProviderAdapter`]: simulated provider used without credentials
//! - [`UberApiAdapter`] / [`LyftApiAdapter`]: live HTTP integrations
//! - [`build_adapters`]: ordered registry built from settings

pub mod error;
pub mod http_client;
pub mod lyft;
pub mod mock;
pub mod registry;
pub mod traits;
pub mod uber;

pub use error::{ProviderError, ProviderResult};
pub use lyft::LyftApiAdapter;
pub use mock::{MockBehavior, MockProfile, MockProviderAdapter};
pub use registry::build_adapters;
pub use traits::ProviderAdapter;
pub use uber::UberApiAdapter;
