//! Location resolution configuration

use std::time::Duration;

use application::{DEFAULT_FALLBACK_CITY, ResolutionConfig};
use domain::{Coordinate, UnitSystem};
use serde::{Deserialize, Serialize};

/// Geographic location configuration (latitude/longitude pair)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct GeoLocationConfig {
    /// Latitude (-90.0 to 90.0)
    pub latitude: f64,
    /// Longitude (-180.0 to 180.0)
    pub longitude: f64,
}

impl GeoLocationConfig {
    /// Convert to a domain `Coordinate`
    ///
    /// Returns `None` if coordinates are invalid.
    #[must_use]
    pub fn to_coordinate(&self) -> Option<Coordinate> {
        Coordinate::new(self.latitude, self.longitude).ok()
    }
}

/// Orchestrator and dashboard settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResolutionAppConfig {
    /// City shown when the device position is unavailable at startup
    /// (default: Bangalore; empty disables the fallback)
    #[serde(default = "default_fallback_city")]
    pub fallback_city: Option<String>,

    /// Unit system selected at startup (default: metric)
    #[serde(default)]
    pub default_unit: UnitSystem,

    /// Upper bound for each upstream call in seconds (default: 10)
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Fixed device position; unset means the device reports no position
    #[serde(default)]
    pub device_location: Option<GeoLocationConfig>,
}

#[allow(clippy::unnecessary_wraps)]
fn default_fallback_city() -> Option<String> {
    Some(DEFAULT_FALLBACK_CITY.to_string())
}

const fn default_request_timeout_secs() -> u64 {
    10
}

impl Default for ResolutionAppConfig {
    fn default() -> Self {
        Self {
            fallback_city: default_fallback_city(),
            default_unit: UnitSystem::default(),
            request_timeout_secs: default_request_timeout_secs(),
            device_location: None,
        }
    }
}

impl ResolutionAppConfig {
    /// Orchestrator configuration
    #[must_use]
    pub fn to_resolution_config(&self) -> ResolutionConfig {
        ResolutionConfig {
            request_timeout: Duration::from_secs(self.request_timeout_secs),
            fallback_city: self
                .fallback_city
                .as_deref()
                .map(str::trim)
                .filter(|city| !city.is_empty())
                .map(str::to_string),
        }
    }
}
