//! Value Objects - Immutable, identity-less domain primitives

mod air_quality;
mod coordinate;
mod humidity;
mod unit_system;
mod weather_icon;

pub use air_quality::{AirQualityIndex, aqi_label};
pub use coordinate::{Coordinate, InvalidCoordinates};
pub use humidity::{Humidity, InvalidHumidity};
pub use unit_system::UnitSystem;
pub use weather_icon::{DEFAULT_ICON_BASE_URL, WeatherIcon};
