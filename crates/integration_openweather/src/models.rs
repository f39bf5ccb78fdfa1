//! OpenWeatherMap data models
//!
//! Public types returned by the client, plus the raw response shapes they
//! are parsed from.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A geocoding match
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedPlace {
    /// Place name as returned by the provider
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lon")]
    pub longitude: f64,
    /// ISO 3166 country code
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
}

/// Condition classification attached to weather entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    /// Condition code, e.g. 803
    pub id: u16,
    /// Condition group, e.g. `Clouds`
    pub main: String,
    pub description: String,
    /// Icon code, e.g. `04d`
    pub icon: String,
}

/// Current weather at a coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentWeather {
    /// Place name; empty when the provider knows none
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    /// Temperature in the requested units
    pub temperature: f64,
    /// Relative humidity in percent
    pub humidity: u8,
    /// Wind speed in the requested units
    pub wind_speed: f64,
    /// First condition entry, if any
    pub condition: Option<Condition>,
    /// Provider observation time, or the fetch time when the response has none
    pub observed_at: DateTime<Utc>,
}

/// One 3-hour forecast sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastEntry {
    pub timestamp: DateTime<Utc>,
    pub temperature: f64,
    pub condition: Option<Condition>,
}

/// Air pollution reading
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AirPollution {
    /// Provider index, nominally 1 (good) to 5 (very poor)
    pub aqi: i64,
}

// ----------------------------------------------------------------------------
// Raw response shapes
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct RawCoord {
    pub lat: f64,
    pub lon: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawMain {
    pub temp: f64,
    #[serde(default)]
    pub humidity: Option<u8>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct RawWind {
    #[serde(default)]
    pub speed: f64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawCurrentResponse {
    pub coord: RawCoord,
    #[serde(default)]
    pub weather: Vec<Condition>,
    pub main: RawMain,
    #[serde(default)]
    pub wind: RawWind,
    #[serde(default)]
    pub name: String,
    /// Observation time; some deployments omit it
    #[serde(default)]
    pub dt: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawForecastItem {
    pub dt: i64,
    pub main: RawMain,
    #[serde(default)]
    pub weather: Vec<Condition>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawForecastResponse {
    #[serde(default)]
    pub list: Vec<RawForecastItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPollutionMain {
    pub aqi: i64,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPollutionItem {
    pub main: RawPollutionMain,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawPollutionResponse {
    #[serde(default)]
    pub list: Vec<RawPollutionItem>,
}
