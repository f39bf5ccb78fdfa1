//! Port definitions for application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. Adapters in the infrastructure layer implement these ports.

mod air_quality_port;
mod device_location_port;
mod forecast_port;
mod geocoding_port;
mod weather_port;

pub use air_quality_port::AirQualityPort;
#[cfg(test)]
pub use air_quality_port::MockAirQualityPort;
pub use device_location_port::DeviceLocationPort;
#[cfg(test)]
pub use device_location_port::MockDeviceLocationPort;
pub use forecast_port::ForecastPort;
#[cfg(test)]
pub use forecast_port::MockForecastPort;
pub use geocoding_port::GeocodingPort;
#[cfg(test)]
pub use geocoding_port::MockGeocodingPort;
#[cfg(test)]
pub use weather_port::MockCurrentWeatherPort;
pub use weather_port::CurrentWeatherPort;
