//! The assembled weather view model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::{CurrentConditions, ForecastSeries};
use crate::value_objects::{AirQualityIndex, Coordinate, UnitSystem};

/// Radius of the accuracy circle drawn around the map marker
pub const MARKER_RADIUS_METERS: u32 = 1500;

/// Auxiliary part of a snapshot that could not be fetched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotPart {
    Forecast,
    AirQuality,
}

impl fmt::Display for SnapshotPart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forecast => write!(f, "forecast"),
            Self::AirQuality => write!(f, "air quality"),
        }
    }
}

/// Map marker derived from a snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub center: Coordinate,
    pub title: String,
    /// Popup text with the place name and the coordinate to 3 decimals
    pub popup: String,
    pub radius_m: u32,
}

/// Everything the dashboard shows for one location
///
/// All parts are fetched for the same coordinate and unit system. The
/// constructor takes both from the current conditions so they cannot drift.
/// Serialize-only: snapshots are built by the orchestrator, never read back.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeatherSnapshot {
    location: Coordinate,
    unit: UnitSystem,
    current: CurrentConditions,
    forecast: ForecastSeries,
    air_quality: AirQualityIndex,
    missing: Vec<SnapshotPart>,
    fetched_at: DateTime<Utc>,
}

impl WeatherSnapshot {
    /// Assemble a complete snapshot
    #[must_use]
    pub fn new(
        current: CurrentConditions,
        unit: UnitSystem,
        forecast: ForecastSeries,
        air_quality: AirQualityIndex,
    ) -> Self {
        Self {
            location: current.coordinate,
            unit,
            current,
            forecast,
            air_quality,
            missing: Vec::new(),
            fetched_at: Utc::now(),
        }
    }

    /// Record that an auxiliary part failed and was replaced with its empty value
    #[must_use]
    pub fn with_missing(mut self, part: SnapshotPart) -> Self {
        if !self.missing.contains(&part) {
            self.missing.push(part);
        }
        self
    }

    #[must_use]
    pub const fn location(&self) -> Coordinate {
        self.location
    }

    #[must_use]
    pub const fn unit(&self) -> UnitSystem {
        self.unit
    }

    #[must_use]
    pub const fn current(&self) -> &CurrentConditions {
        &self.current
    }

    #[must_use]
    pub const fn forecast(&self) -> &ForecastSeries {
        &self.forecast
    }

    #[must_use]
    pub const fn air_quality(&self) -> AirQualityIndex {
        self.air_quality
    }

    /// Parts that were degraded to their empty value
    #[must_use]
    pub fn missing(&self) -> &[SnapshotPart] {
        &self.missing
    }

    /// Whether any auxiliary part is missing
    #[must_use]
    pub fn is_degraded(&self) -> bool {
        !self.missing.is_empty()
    }

    #[must_use]
    pub const fn fetched_at(&self) -> DateTime<Utc> {
        self.fetched_at
    }

    /// Display name, falling back to the coordinate label
    #[must_use]
    pub fn display_name(&self) -> String {
        let name = self.current.display_name.trim();
        if name.is_empty() {
            self.location.label()
        } else {
            name.to_string()
        }
    }

    /// Marker for the map panel
    #[must_use]
    pub fn map_marker(&self) -> MapMarker {
        let title = self.display_name();
        let popup = format!(
            "{title} ({:.3}, {:.3})",
            self.location.latitude(),
            self.location.longitude()
        );
        MapMarker {
            center: self.location,
            title,
            popup,
            radius_m: MARKER_RADIUS_METERS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::WeatherCondition;
    use crate::value_objects::{Humidity, WeatherIcon};

    fn current(name: &str) -> CurrentConditions {
        CurrentConditions {
            display_name: name.to_string(),
            coordinate: Coordinate::new(12.9716, 77.5946).unwrap(),
            temperature: 28.0,
            humidity: Humidity::clamped(70),
            wind_speed: 3.1,
            condition: WeatherCondition {
                code: 803,
                group: "Clouds".to_string(),
                description: "broken clouds".to_string(),
            },
            icon: WeatherIcon::new("04d"),
            observed_at: Utc::now(),
        }
    }

    #[test]
    fn location_comes_from_current_conditions() {
        let snapshot = WeatherSnapshot::new(
            current("Bangalore"),
            UnitSystem::Metric,
            ForecastSeries::empty(),
            AirQualityIndex::Fair,
        );
        assert_eq!(snapshot.location(), snapshot.current().coordinate);
        assert_eq!(snapshot.unit(), UnitSystem::Metric);
        assert!(!snapshot.is_degraded());
    }

    #[test]
    fn serialized_snapshot_has_one_location() {
        let snapshot = WeatherSnapshot::new(
            current("Bangalore"),
            UnitSystem::Imperial,
            ForecastSeries::empty(),
            AirQualityIndex::Fair,
        )
        .with_missing(SnapshotPart::Forecast);
        let json = serde_json::to_value(&snapshot).unwrap();

        assert_eq!(json["location"], json["current"]["coordinate"]);
        assert_eq!(json["unit"], serde_json::to_value(UnitSystem::Imperial).unwrap());
        assert_eq!(json["missing"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn missing_parts_are_deduplicated() {
        let snapshot = WeatherSnapshot::new(
            current("Bangalore"),
            UnitSystem::Metric,
            ForecastSeries::empty(),
            AirQualityIndex::Unknown,
        )
        .with_missing(SnapshotPart::AirQuality)
        .with_missing(SnapshotPart::AirQuality);
        assert!(snapshot.is_degraded());
        assert_eq!(snapshot.missing(), &[SnapshotPart::AirQuality]);
    }

    #[test]
    fn map_marker_popup() {
        let snapshot = WeatherSnapshot::new(
            current("Bangalore"),
            UnitSystem::Metric,
            ForecastSeries::empty(),
            AirQualityIndex::Good,
        );
        let marker = snapshot.map_marker();
        assert_eq!(marker.title, "Bangalore");
        assert_eq!(marker.popup, "Bangalore (12.972, 77.595)");
        assert_eq!(marker.radius_m, 1500);
    }

    #[test]
    fn blank_name_uses_coordinate_label() {
        let snapshot = WeatherSnapshot::new(
            current("  "),
            UnitSystem::Imperial,
            ForecastSeries::empty(),
            AirQualityIndex::Good,
        );
        assert_eq!(snapshot.display_name(), "12.9716, 77.5946");
    }
}
