//! Domain entities - the weather view model and its parts

mod current_conditions;
mod forecast;
mod location_query;
mod snapshot;

pub use current_conditions::{CurrentConditions, DEFAULT_CONDITION_GROUP, WeatherCondition};
pub use forecast::{ForecastPoint, ForecastSeries, SAMPLES_PER_DAY, downsample};
pub use location_query::{LocationQuery, ResolvedPlace};
pub use snapshot::{MARKER_RADIUS_METERS, MapMarker, SnapshotPart, WeatherSnapshot};
