//! # Application Settings
//!
//! Settings loaded once at startup from `RIDECOMPARE_*` environment
//! variables, after `.env` has been read by the binary.
//!
//! # Examples
//!
//! ```
//! use ride_compare::infrastructure::config::AppSettings;
//!
//! let settings = AppSettings::default();
//! assert_eq!(settings.port, 8000);
//! assert!(settings.validate().is_ok());
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::{AggregationConfig, DeepLinkConfig};
use crate::infrastructure::providers::{lyft, uber};
use config::{Config, Environment, Map};
use serde::Deserialize;
use std::fmt;
use url::Url;

/// Environment variable prefix, joined to keys with `_`.
pub const ENV_PREFIX: &str = "RIDECOMPARE";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable output.
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Service settings.
#[derive(Clone, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Service name reported in logs.
    pub app_name: String,
    /// Enables debug-level logging by default.
    pub debug: bool,
    /// Bind host.
    pub host: String,
    /// Bind port.
    pub port: u16,
    /// Origins allowed by CORS.
    pub cors_origins: Vec<String>,
    /// Per-adapter timeout in milliseconds.
    pub adapter_timeout_ms: u64,
    /// Uber server token; the mock adapter is used when unset.
    pub uber_api_key: Option<String>,
    /// Lyft access token; the mock adapter is used when unset.
    pub lyft_api_key: Option<String>,
    /// Uber API base URL.
    pub uber_api_base_url: String,
    /// Lyft API base URL.
    pub lyft_api_base_url: String,
    /// Uber deep-link `client_id`.
    pub uber_client_id: Option<String>,
    /// Lyft deep-link `partner`.
    pub lyft_partner_id: Option<String>,
    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            app_name: "RideCompare API".to_string(),
            debug: false,
            host: "0.0.0.0".to_string(),
            port: 8000,
            cors_origins: vec!["http://localhost:3000".to_string()],
            adapter_timeout_ms: 2500,
            uber_api_key: None,
            lyft_api_key: None,
            uber_api_base_url: uber::DEFAULT_BASE_URL.to_string(),
            lyft_api_base_url: lyft::DEFAULT_BASE_URL.to_string(),
            uber_client_id: None,
            lyft_partner_id: None,
            log_format: LogFormat::Pretty,
        }
    }
}

// Keys and tokens stay out of logs.
impl fmt::Debug for AppSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppSettings")
            .field("app_name", &self.app_name)
            .field("debug", &self.debug)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("cors_origins", &self.cors_origins)
            .field("adapter_timeout_ms", &self.adapter_timeout_ms)
            .field("uber_api_key", &self.uber_api_key().map(|_| "<redacted>"))
            .field("lyft_api_key", &self.lyft_api_key().map(|_| "<redacted>"))
            .field("uber_api_base_url", &self.uber_api_base_url)
            .field("lyft_api_base_url", &self.lyft_api_base_url)
            .field("uber_client_id", &self.uber_client_id)
            .field("lyft_partner_id", &self.lyft_partner_id)
            .field("log_format", &self.log_format)
            .finish()
    }
}

fn non_blank(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

impl AppSettings {
    /// Loads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` if a variable cannot be
    /// parsed or the result fails [`validate`](Self::validate).
    pub fn from_env() -> ApplicationResult<Self> {
        Self::load(Self::environment())
    }

    /// Loads settings from an explicit variable map instead of the process
    /// environment. Keys carry the `RIDECOMPARE_` prefix.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_vars(vars: Map<String, String>) -> ApplicationResult<Self> {
        Self::load(Self::environment().source(Some(vars)))
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("cors_origins")
    }

    fn load(environment: Environment) -> ApplicationResult<Self> {
        let settings: Self = Config::builder()
            .add_source(environment)
            .build()?
            .try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Checks settings invariants.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::Configuration` naming the offending key.
    pub fn validate(&self) -> ApplicationResult<()> {
        if self.adapter_timeout_ms == 0 {
            return Err(ApplicationError::configuration(
                "adapter_timeout_ms must be greater than zero",
            ));
        }
        if self.port == 0 {
            return Err(ApplicationError::configuration(
                "port must be greater than zero",
            ));
        }
        for (key, value) in [
            ("uber_api_base_url", &self.uber_api_base_url),
            ("lyft_api_base_url", &self.lyft_api_base_url),
        ] {
            Url::parse(value).map_err(|e| {
                ApplicationError::configuration(format!("{key} is not a valid URL: {e}"))
            })?;
        }
        Ok(())
    }

    /// Returns `host:port`.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Uber server token, if set and non-blank.
    #[must_use]
    pub fn uber_api_key(&self) -> Option<&str> {
        non_blank(self.uber_api_key.as_ref())
    }

    /// Lyft access token, if set and non-blank.
    #[must_use]
    pub fn lyft_api_key(&self) -> Option<&str> {
        non_blank(self.lyft_api_key.as_ref())
    }

    /// Aggregation settings derived from these settings.
    #[must_use]
    pub fn aggregation_config(&self) -> AggregationConfig {
        AggregationConfig::with_per_adapter_timeout(self.adapter_timeout_ms)
    }

    /// Deep-link partner identifiers, blanks treated as unset.
    #[must_use]
    pub fn deep_links(&self) -> DeepLinkConfig {
        DeepLinkConfig {
            uber_client_id: non_blank(self.uber_client_id.as_ref()).map(str::to_string),
            lyft_partner_id: non_blank(self.lyft_partner_id.as_ref()).map(str::to_string),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Map<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn defaults() {
        let settings = AppSettings::from_vars(Map::new()).unwrap();
        assert_eq!(settings.app_name, "RideCompare API");
        assert!(!settings.debug);
        assert_eq!(settings.bind_address(), "0.0.0.0:8000");
        assert_eq!(settings.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(settings.adapter_timeout_ms, 2500);
        assert_eq!(settings.log_format, LogFormat::Pretty);
        assert!(settings.uber_api_key().is_none());
        assert_eq!(settings.deep_links(), DeepLinkConfig::default());
    }

    #[test]
    fn overrides_from_environment() {
        let settings = AppSettings::from_vars(vars(&[
            ("RIDECOMPARE_PORT", "9090"),
            ("RIDECOMPARE_DEBUG", "true"),
            ("RIDECOMPARE_ADAPTER_TIMEOUT_MS", "750"),
            (
                "RIDECOMPARE_CORS_ORIGINS",
                "http://a.example,http://b.example",
            ),
            ("RIDECOMPARE_LOG_FORMAT", "json"),
            ("RIDECOMPARE_UBER_API_KEY", "secret"),
            ("RIDECOMPARE_LYFT_PARTNER_ID", "partner-7"),
        ]))
        .unwrap();

        assert_eq!(settings.port, 9090);
        assert!(settings.debug);
        assert_eq!(settings.aggregation_config().per_adapter_timeout_ms, 750);
        assert_eq!(
            settings.cors_origins,
            vec!["http://a.example", "http://b.example"]
        );
        assert_eq!(settings.log_format, LogFormat::Json);
        assert_eq!(settings.uber_api_key(), Some("secret"));
        assert_eq!(
            settings.deep_links().lyft_partner_id.as_deref(),
            Some("partner-7")
        );
    }

    #[test]
    fn blank_keys_are_unset() {
        let settings =
            AppSettings::from_vars(vars(&[("RIDECOMPARE_LYFT_API_KEY", "  ")])).unwrap();
        assert!(settings.lyft_api_key().is_none());
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let err =
            AppSettings::from_vars(vars(&[("RIDECOMPARE_ADAPTER_TIMEOUT_MS", "0")])).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
        assert!(err.to_string().contains("adapter_timeout_ms"));
    }

    #[test]
    fn unparseable_value_is_configuration_error() {
        let err = AppSettings::from_vars(vars(&[("RIDECOMPARE_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ApplicationError::Configuration(_)));
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let settings = AppSettings {
            uber_api_base_url: "not a url".to_string(),
            ..AppSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn debug_output_redacts_keys() {
        let settings = AppSettings {
            uber_api_key: Some("super-secret".to_string()),
            ..AppSettings::default()
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
