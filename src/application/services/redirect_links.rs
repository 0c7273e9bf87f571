//! # Redirect Links
//!
//! Provider deep-link construction.
//!
//! Builders are looked up in a closed table keyed by provider id. An
//! estimate whose provider has no builder keeps an empty redirect URL.

use crate::domain::entities::{Estimate, RideRequest};
use crate::domain::value_objects::{Coordinates, LYFT, UBER};
use url::form_urlencoded::Serializer;

/// Base of the Uber universal deep link.
pub const UBER_DEEP_LINK_BASE: &str = "https://m.uber.com/ul/";

/// Base of the Lyft ride deep link.
pub const LYFT_DEEP_LINK_BASE: &str = "https://lyft.com/ride";

/// Optional partner identifiers appended to deep links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeepLinkConfig {
    /// Uber `client_id` query parameter.
    pub uber_client_id: Option<String>,
    /// Lyft `partner` query parameter.
    pub lyft_partner_id: Option<String>,
}

type LinkBuilder = fn(&RideRequest, &DeepLinkConfig) -> String;

const BUILDERS: [(&str, LinkBuilder); 2] = [(UBER, build_uber_url), (LYFT, build_lyft_url)];

fn append_location(query: &mut Serializer<'_, String>, key: &str, at: Coordinates, nickname: &str) {
    query
        .append_pair(&format!("{key}[latitude]"), &at.latitude().to_string())
        .append_pair(&format!("{key}[longitude]"), &at.longitude().to_string())
        .append_pair(&format!("{key}[nickname]"), nickname)
        .append_pair(&format!("{key}[formatted_address]"), &at.to_string());
}

/// Builds the Uber universal link for a request.
#[must_use]
pub fn build_uber_url(request: &RideRequest, config: &DeepLinkConfig) -> String {
    let mut query = Serializer::new(String::new());
    query.append_pair("action", "setPickup");
    if let Some(client_id) = &config.uber_client_id {
        query.append_pair("client_id", client_id);
    }
    append_location(&mut query, "pickup", request.pickup(), "Pickup");
    append_location(&mut query, "dropoff", request.dropoff(), "Dropoff");
    format!("{UBER_DEEP_LINK_BASE}?{}", query.finish())
}

/// Builds the Lyft ride link for a request.
#[must_use]
pub fn build_lyft_url(request: &RideRequest, config: &DeepLinkConfig) -> String {
    let pickup = request.pickup();
    let dropoff = request.dropoff();
    let mut query = Serializer::new(String::new());
    query
        .append_pair("id", "lyft")
        .append_pair("pickup[latitude]", &pickup.latitude().to_string())
        .append_pair("pickup[longitude]", &pickup.longitude().to_string());
    if let Some(partner) = &config.lyft_partner_id {
        query.append_pair("partner", partner);
    }
    query
        .append_pair("destination[latitude]", &dropoff.latitude().to_string())
        .append_pair("destination[longitude]", &dropoff.longitude().to_string());
    format!("{LYFT_DEEP_LINK_BASE}?{}", query.finish())
}

/// Attaches provider deep links to estimates.
#[derive(Debug, Clone, Default)]
pub struct RedirectLinker {
    config: DeepLinkConfig,
}

impl RedirectLinker {
    /// Creates a linker with the given partner identifiers.
    #[must_use]
    pub fn new(config: DeepLinkConfig) -> Self {
        Self { config }
    }

    /// Returns the deep link for a provider, or `None` if it has no builder.
    #[must_use]
    pub fn url_for(&self, provider: &str, request: &RideRequest) -> Option<String> {
        BUILDERS
            .iter()
            .find(|(id, _)| *id == provider)
            .map(|(_, build)| build(request, &self.config))
    }

    /// Sets `redirect_url` on every estimate with a known provider.
    ///
    /// Order and all other fields are preserved.
    #[must_use]
    pub fn attach(&self, estimates: Vec<Estimate>, request: &RideRequest) -> Vec<Estimate> {
        estimates
            .into_iter()
            .map(|estimate| match self.url_for(estimate.provider().as_str(), request) {
                Some(url) => estimate.with_redirect_url(url),
                None => estimate,
            })
            .collect()
    }
}
