//! Condition icon identifier

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default public base URL for condition icons
pub const DEFAULT_ICON_BASE_URL: &str = "https://openweathermap.org/img/wn";

/// Provider icon code such as `10d`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeatherIcon(String);

impl WeatherIcon {
    /// Wrap a provider icon code
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into().trim().to_string())
    }

    /// The raw icon code
    #[must_use]
    pub fn code(&self) -> &str {
        &self.0
    }

    /// Image URL under the given base, e.g. `{base}/10d@2x.png`
    #[must_use]
    pub fn url(&self, base_url: &str) -> String {
        format!("{}/{}@2x.png", base_url.trim_end_matches('/'), self.0)
    }

    /// Image URL under [`DEFAULT_ICON_BASE_URL`]
    #[must_use]
    pub fn default_url(&self) -> String {
        self.url(DEFAULT_ICON_BASE_URL)
    }
}

impl fmt::Display for WeatherIcon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
