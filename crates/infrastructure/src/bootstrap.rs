//! Composition root
//!
//! Wires the OpenWeatherMap adapter, the device location provider and the
//! orchestrator into a ready-to-use [`Dashboard`].

use std::sync::Arc;

use application::ports::DeviceLocationPort;
use application::{Dashboard, LocationResolutionService};
use domain::WeatherIcon;
use integration_openweather::{OpenWeatherConfig, OpenWeatherError};
use secrecy::SecretString;
use thiserror::Error;
use tracing::{info, warn};

use crate::adapters::{DeniedLocationProvider, FixedLocationProvider, OpenWeatherAdapter};
use crate::config::{AppConfig, GeoLocationConfig};

/// Errors raised while wiring the application
#[derive(Debug, Error)]
pub enum BootstrapError {
    /// No usable API key was configured
    #[error("Missing API key: set SKYCAST_WEATHER__API_KEY")]
    MissingApiKey,

    /// Configuration could not be loaded or failed validation
    #[error(transparent)]
    Config(#[from] config::ConfigError),

    /// The HTTP client could not be created
    #[error("Failed to create weather client: {0}")]
    Client(#[from] OpenWeatherError),
}

/// The wired application core handed to the presentation layer
#[derive(Debug, Clone)]
pub struct Skycast {
    /// Application state and user actions
    pub dashboard: Dashboard,
    icon_base_url: String,
}

impl Skycast {
    /// Wire everything from configuration
    ///
    /// # Errors
    ///
    /// Fails on invalid configuration, a missing API key or when the HTTP
    /// client cannot be created.
    pub fn build(config: &AppConfig) -> Result<Self, BootstrapError> {
        config.validate()?;
        let api_key = config
            .weather
            .api_key()
            .ok_or(BootstrapError::MissingApiKey)?;

        let adapter = Arc::new(OpenWeatherAdapter::new(OpenWeatherConfig {
            api_key: SecretString::from(api_key.to_string()),
            base_url: config.weather.base_url.clone(),
            timeout_secs: config.weather.timeout_secs,
        })?);

        let device: Arc<dyn DeviceLocationPort> = match config
            .resolution
            .device_location
            .as_ref()
            .and_then(GeoLocationConfig::to_coordinate)
        {
            Some(position) => Arc::new(FixedLocationProvider::new(position)),
            None => {
                warn!("No device location configured, location requests will be denied");
                Arc::new(DeniedLocationProvider)
            },
        };

        let resolver = LocationResolutionService::new(
            Arc::clone(&adapter) as _,
            Arc::clone(&adapter) as _,
            Arc::clone(&adapter) as _,
            adapter,
        )
        .with_config(config.resolution.to_resolution_config())
        .with_device_location(device);

        info!(
            base_url = %config.weather.base_url,
            unit = %config.resolution.default_unit,
            fallback_city = ?resolver.config().fallback_city,
            "Skycast initialized"
        );

        Ok(Self {
            dashboard: Dashboard::new(resolver, config.resolution.default_unit),
            icon_base_url: config.weather.icon_base_url.clone(),
        })
    }

    /// Load configuration from the environment and wire everything
    ///
    /// # Errors
    ///
    /// See [`Skycast::build`].
    pub fn from_env() -> Result<Self, BootstrapError> {
        Self::build(&AppConfig::load()?)
    }

    /// Image URL for a condition icon under the configured base
    #[must_use]
    pub fn icon_url(&self, icon: &WeatherIcon) -> String {
        icon.url(&self.icon_base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_with_key() -> AppConfig {
        let mut config = AppConfig::default();
        config.weather.api_key = Some("key".to_string().into());
        config
    }

    #[test]
    fn missing_api_key_is_reported() {
        let err = Skycast::build(&AppConfig::default()).unwrap_err();
        assert!(matches!(err, BootstrapError::MissingApiKey));
        assert!(err.to_string().contains("SKYCAST_WEATHER__API_KEY"));
    }

    #[test]
    fn invalid_config_is_reported() {
        let mut config = config_with_key();
        config.weather.timeout_secs = 0;
        assert!(matches!(
            Skycast::build(&config),
            Err(BootstrapError::Config(_))
        ));
    }

    #[tokio::test]
    async fn builds_idle_dashboard() {
        let skycast = Skycast::build(&config_with_key()).unwrap();
        let state = skycast.dashboard.state();
        assert_eq!(state.phase, application::ResolutionPhase::Idle);
        assert_eq!(state.unit, domain::UnitSystem::Metric);
    }

    #[test]
    fn icon_url_uses_configured_base() {
        let mut config = config_with_key();
        config.weather.icon_base_url = "https://cdn.example.com/icons/".to_string();
        let skycast = Skycast::build(&config).unwrap();
        assert_eq!(
            skycast.icon_url(&WeatherIcon::new("10d")),
            "https://cdn.example.com/icons/10d@2x.png"
        );
    }
}
