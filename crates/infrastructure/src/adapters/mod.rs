//! Adapters implementing application ports
//!
//! Each adapter wraps an integration client and translates its types and
//! errors into the domain vocabulary.

mod device_location_adapter;
mod openweather_adapter;

pub use device_location_adapter::{DeniedLocationProvider, FixedLocationProvider};
pub use openweather_adapter::OpenWeatherAdapter;
