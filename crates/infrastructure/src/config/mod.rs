//! Application configuration
//!
//! Loaded from environment variables only, e.g. `SKYCAST_WEATHER__API_KEY`.
//! Split into focused sub-modules:
//! - `weather`: upstream provider endpoint, key and timeout
//! - `resolution`: fallback city, default units, device position

mod resolution;
mod weather;

use std::collections::HashMap;

use serde::Deserialize;
use tracing::debug;

pub use resolution::{GeoLocationConfig, ResolutionAppConfig};
pub use weather::WeatherAppConfig;

use crate::telemetry::TelemetryConfig;

/// Prefix of all configuration environment variables
pub const ENV_PREFIX: &str = "SKYCAST";

/// Separator between nested keys, e.g. `SKYCAST_RESOLUTION__FALLBACK_CITY`
pub const ENV_SEPARATOR: &str = "__";

/// Longest accepted per-request timeout in seconds
const MAX_TIMEOUT_SECS: u64 = 120;

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Upstream weather provider
    #[serde(default)]
    pub weather: WeatherAppConfig,

    /// Location resolution behaviour
    #[serde(default)]
    pub resolution: ResolutionAppConfig,

    /// Logging
    #[serde(default)]
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from the process environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(None)
    }

    /// Load configuration from the given variables instead of the process
    /// environment
    pub fn load_from_vars(vars: HashMap<String, String>) -> Result<Self, config::ConfigError> {
        Self::load_from(Some(vars))
    }

    fn load_from(vars: Option<HashMap<String, String>>) -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true)
                    .source(vars),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        debug!(
            base_url = %app_config.weather.base_url,
            api_key_set = app_config.weather.api_key().is_some(),
            "Configuration loaded"
        );
        Ok(app_config)
    }

    /// Reject values that cannot work
    pub fn validate(&self) -> Result<(), config::ConfigError> {
        validate_timeout("weather.timeout_secs", self.weather.timeout_secs)?;
        validate_timeout(
            "resolution.request_timeout_secs",
            self.resolution.request_timeout_secs,
        )?;
        validate_http_url("weather.base_url", &self.weather.base_url)?;
        validate_http_url("weather.icon_base_url", &self.weather.icon_base_url)?;

        if let Some(location) = self.resolution.device_location {
            if location.to_coordinate().is_none() {
                return Err(config::ConfigError::Message(format!(
                    "resolution.device_location: ({}, {}) is not a valid coordinate",
                    location.latitude, location.longitude
                )));
            }
        }
        Ok(())
    }
}

fn validate_timeout(key: &str, secs: u64) -> Result<(), config::ConfigError> {
    if secs == 0 || secs > MAX_TIMEOUT_SECS {
        return Err(config::ConfigError::Message(format!(
            "{key}: {secs} must be between 1 and {MAX_TIMEOUT_SECS} seconds"
        )));
    }
    Ok(())
}

fn validate_http_url(key: &str, url: &str) -> Result<(), config::ConfigError> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(config::ConfigError::Message(format!(
            "{key}: '{url}' must be an http(s) URL"
        )))
    }
}
