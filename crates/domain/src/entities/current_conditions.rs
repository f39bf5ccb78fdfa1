//! Current weather conditions at a resolved location

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Coordinate, Humidity, UnitSystem, WeatherIcon};

/// Condition group used when the provider sends none
pub const DEFAULT_CONDITION_GROUP: &str = "Default";

/// Provider condition classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherCondition {
    /// Provider condition code (e.g. 803)
    pub code: u16,
    /// Condition group such as `Clouds` or `Rain`
    pub group: String,
    /// Free-text description such as `broken clouds`
    pub description: String,
}

impl WeatherCondition {
    /// Group name, or `Default` when empty
    ///
    /// The presentation layer picks its background theme from this.
    #[must_use]
    pub fn group_or_default(&self) -> &str {
        if self.group.trim().is_empty() {
            DEFAULT_CONDITION_GROUP
        } else {
            &self.group
        }
    }
}

/// Current conditions as returned by the weather fetcher
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    /// Resolved place name shown as the card title
    pub display_name: String,
    /// Coordinate the conditions were requested for
    pub coordinate: Coordinate,
    /// Temperature in the requested unit system
    pub temperature: f64,
    /// Relative humidity
    pub humidity: Humidity,
    /// Wind speed in the requested unit system
    pub wind_speed: f64,
    /// Condition code, group and description
    pub condition: WeatherCondition,
    /// Condition icon
    pub icon: WeatherIcon,
    /// Observation time reported by the provider
    pub observed_at: DateTime<Utc>,
}

impl CurrentConditions {
    /// One-line summary, e.g. `Bangalore: 28°C, broken clouds, humidity 70%, wind 3.1 m/s`
    #[must_use]
    pub fn summary(&self, unit: UnitSystem) -> String {
        format!(
            "{}: {}, {}, humidity {}, wind {}",
            self.display_name,
            unit.format_temperature(self.temperature),
            self.condition.description,
            self.humidity,
            unit.format_wind_speed(self.wind_speed)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CurrentConditions {
        CurrentConditions {
            display_name: "Bangalore".to_string(),
            coordinate: Coordinate::new(12.97, 77.59).unwrap(),
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
    fn summary_uses_unit_labels() {
        let summary = sample().summary(UnitSystem::Metric);
        assert_eq!(
            summary,
            "Bangalore: 28°C, broken clouds, humidity 70%, wind 3.1 m/s"
        );
    }

    #[test]
    fn empty_group_falls_back_to_default() {
        let mut conditions = sample();
        assert_eq!(conditions.condition.group_or_default(), "Clouds");
        conditions.condition.group = String::new();
        assert_eq!(conditions.condition.group_or_default(), "Default");
    }
}
