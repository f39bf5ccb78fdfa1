//! Upstream weather provider configuration

use domain::DEFAULT_ICON_BASE_URL;
use integration_openweather::DEFAULT_BASE_URL;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// OpenWeatherMap configuration
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherAppConfig {
    /// API key (sensitive - uses SecretString)
    #[serde(default)]
    pub api_key: Option<SecretString>,

    /// API base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Base URL for condition icons (default: <https://openweathermap.org/img/wn>)
    #[serde(default = "default_icon_base_url")]
    pub icon_base_url: String,

    /// HTTP timeout in seconds (default: 10)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_icon_base_url() -> String {
    DEFAULT_ICON_BASE_URL.to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for WeatherAppConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            icon_base_url: default_icon_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl WeatherAppConfig {
    /// The API key, if set and not blank
    #[must_use]
    pub fn api_key(&self) -> Option<&str> {
        self.api_key
            .as_ref()
            .map(ExposeSecret::expose_secret)
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}
