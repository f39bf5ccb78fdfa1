//! Infrastructure layer - Adapters for external systems
//!
//! Implements the application ports on top of the OpenWeatherMap client and
//! carries the ambient stack: configuration, logging and the composition root.

pub mod adapters;
pub mod bootstrap;
pub mod config;
pub mod telemetry;

pub use adapters::*;
pub use bootstrap::{BootstrapError, Skycast};
pub use config::{AppConfig, GeoLocationConfig, ResolutionAppConfig, WeatherAppConfig};
pub use telemetry::{TelemetryConfig, TelemetryError, init_telemetry};
