//! OpenWeatherMap client
//!
//! HTTP client for the geocoding, current weather, 5-day forecast and air
//! pollution endpoints. The API key travels as the `appid` query parameter
//! and is never logged.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::UnitSystem;
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{
    AirPollution, CurrentWeather, ForecastEntry, GeocodedPlace, RawCurrentResponse,
    RawForecastResponse, RawPollutionResponse,
};

const GEOCODING_PATH: &str = "/geo/1.0/direct";
const CURRENT_PATH: &str = "/data/2.5/weather";
const FORECAST_PATH: &str = "/data/2.5/forecast";
const AIR_POLLUTION_PATH: &str = "/data/2.5/air_pollution";

/// OpenWeatherMap client errors
#[derive(Debug, Error)]
pub enum OpenWeatherError {
    /// Connection to the service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// The service did not answer in time
    #[error("Request timed out")]
    Timeout,

    /// The service answered with a non-success status
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Service is temporarily unavailable (5xx)
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded (429)
    #[error("Rate limit exceeded")]
    RateLimitExceeded,

    /// The API key was rejected (401)
    #[error("API key rejected")]
    Unauthorized,

    /// Failed to parse response
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Invalid coordinates provided
    #[error("Invalid coordinates: latitude must be -90 to 90, longitude must be -180 to 180")]
    InvalidCoordinates,
}

impl OpenWeatherError {
    /// Whether the request never got an answer from the service
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::ConnectionFailed(_) | Self::Timeout)
    }

    fn from_transport(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            // The request URL carries the API key.
            Self::ConnectionFailed(err.without_url().to_string())
        }
    }

    fn from_status(status: StatusCode) -> Self {
        match status {
            StatusCode::UNAUTHORIZED => Self::Unauthorized,
            StatusCode::TOO_MANY_REQUESTS => Self::RateLimitExceeded,
            s if s.is_server_error() => Self::ServiceUnavailable(format!("HTTP {s}")),
            s => Self::RequestFailed(format!("HTTP {s}")),
        }
    }
}

/// OpenWeatherMap client configuration
#[derive(Debug, Clone, Deserialize)]
pub struct OpenWeatherConfig {
    /// API key sent as `appid`
    pub api_key: SecretString,

    /// API base URL (default: <https://api.openweathermap.org>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds (default: 10)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Default API base URL
pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_timeout() -> u64 {
    10
}

impl OpenWeatherConfig {
    /// Configuration with default endpoints for the given key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Client trait for the OpenWeatherMap endpoints
#[async_trait]
pub trait WeatherClient: Send + Sync {
    /// Look up a place name, best match first
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<GeocodedPlace>, OpenWeatherError>;

    /// Current weather at a coordinate
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<CurrentWeather, OpenWeatherError>;

    /// The full 3-hour forecast series (about 5 days)
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<Vec<ForecastEntry>, OpenWeatherError>;

    /// The most current air pollution reading
    async fn get_air_pollution(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AirPollution, OpenWeatherError>;
}

/// OpenWeatherMap HTTP client implementation
#[derive(Debug)]
pub struct OpenWeatherClient {
    client: Client,
    config: OpenWeatherConfig,
}

impl OpenWeatherClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: OpenWeatherConfig) -> Result<Self, OpenWeatherError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| OpenWeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Validate coordinates
    fn validate_coordinates(latitude: f64, longitude: f64) -> Result<(), OpenWeatherError> {
        if !(-90.0..=90.0).contains(&latitude) || !(-180.0..=180.0).contains(&longitude) {
            return Err(OpenWeatherError::InvalidCoordinates);
        }
        Ok(())
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.config.base_url.trim_end_matches('/'))
    }

    /// GET `path` with `params` plus the API key and decode the JSON body
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, OpenWeatherError> {
        debug!(path = %path, params = ?params, "Calling OpenWeatherMap");

        let response = self
            .client
            .get(self.endpoint(path))
            .query(params)
            .query(&[("appid", self.config.api_key.expose_secret())])
            .send()
            .await
            .map_err(OpenWeatherError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            debug!(path = %path, status = %status, "OpenWeatherMap returned an error status");
            return Err(OpenWeatherError::from_status(status));
        }

        response
            .json()
            .await
            .map_err(|e| OpenWeatherError::ParseError(e.without_url().to_string()))
    }

    fn parse_timestamp(secs: i64) -> Result<DateTime<Utc>, OpenWeatherError> {
        DateTime::from_timestamp(secs, 0)
            .ok_or_else(|| OpenWeatherError::ParseError(format!("Invalid timestamp: {secs}")))
    }

    fn coordinate_params(latitude: f64, longitude: f64) -> Vec<(&'static str, String)> {
        vec![("lat", latitude.to_string()), ("lon", longitude.to_string())]
    }
}

#[async_trait]
impl WeatherClient for OpenWeatherClient {
    #[instrument(skip(self))]
    async fn geocode(&self, query: &str, limit: u8) -> Result<Vec<GeocodedPlace>, OpenWeatherError> {
        let params = [("q", query.to_string()), ("limit", limit.to_string())];
        let places: Vec<GeocodedPlace> = self.get_json(GEOCODING_PATH, &params).await?;
        debug!(matches = places.len(), "Geocoding finished");
        Ok(places)
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, units = %units))]
    async fn get_current(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<CurrentWeather, OpenWeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let mut params = Self::coordinate_params(latitude, longitude);
        params.push(("units", units.as_query_value().to_string()));
        let raw: RawCurrentResponse = self.get_json(CURRENT_PATH, &params).await?;

        let humidity = raw
            .main
            .humidity
            .ok_or_else(|| OpenWeatherError::ParseError("Missing humidity".to_string()))?;

        Ok(CurrentWeather {
            name: raw.name,
            latitude: raw.coord.lat,
            longitude: raw.coord.lon,
            temperature: raw.main.temp,
            humidity,
            wind_speed: raw.wind.speed,
            condition: raw.weather.into_iter().next(),
            observed_at: raw
                .dt
                .map_or_else(|| Ok(Utc::now()), Self::parse_timestamp)?,
        })
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude, units = %units))]
    async fn get_forecast(
        &self,
        latitude: f64,
        longitude: f64,
        units: UnitSystem,
    ) -> Result<Vec<ForecastEntry>, OpenWeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let mut params = Self::coordinate_params(latitude, longitude);
        params.push(("units", units.as_query_value().to_string()));
        let raw: RawForecastResponse = self.get_json(FORECAST_PATH, &params).await?;

        raw.list
            .into_iter()
            .map(|item| {
                Ok(ForecastEntry {
                    timestamp: Self::parse_timestamp(item.dt)?,
                    temperature: item.main.temp,
                    condition: item.weather.into_iter().next(),
                })
            })
            .collect()
    }

    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    async fn get_air_pollution(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<AirPollution, OpenWeatherError> {
        Self::validate_coordinates(latitude, longitude)?;

        let params = Self::coordinate_params(latitude, longitude);
        let raw: RawPollutionResponse = self.get_json(AIR_POLLUTION_PATH, &params).await?;

        let first = raw.list.into_iter().next().ok_or_else(|| {
            OpenWeatherError::ParseError("No entries in air pollution response".to_string())
        })?;
        Ok(AirPollution {
            aqi: first.main.aqi,
        })
    }
}
