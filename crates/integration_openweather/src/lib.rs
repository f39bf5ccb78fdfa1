//! OpenWeatherMap integration
//!
//! Client for the OpenWeatherMap APIs (<https://openweathermap.org/api>):
//! direct geocoding, current weather, the 5-day/3-hour forecast and air
//! pollution. Every request needs an API key.

pub mod client;
mod models;

pub use client::{
    DEFAULT_BASE_URL, OpenWeatherClient, OpenWeatherConfig, OpenWeatherError, WeatherClient,
};
pub use models::{AirPollution, Condition, CurrentWeather, ForecastEntry, GeocodedPlace};
