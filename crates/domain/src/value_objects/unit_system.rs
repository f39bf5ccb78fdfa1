//! Measurement unit system

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Unit system applied to temperature and wind speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Celsius and metres per second
    #[default]
    Metric,
    /// Fahrenheit and miles per hour
    Imperial,
}

impl UnitSystem {
    /// Value of the provider's `units` query parameter
    #[must_use]
    pub const fn as_query_value(&self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Temperature unit label
    #[must_use]
    pub const fn temperature_label(&self) -> &'static str {
        match self {
            Self::Metric => "°C",
            Self::Imperial => "°F",
        }
    }

    /// Wind speed unit label
    #[must_use]
    pub const fn wind_speed_label(&self) -> &'static str {
        match self {
            Self::Metric => "m/s",
            Self::Imperial => "mph",
        }
    }

    /// The other unit system
    #[must_use]
    pub const fn toggled(&self) -> Self {
        match self {
            Self::Metric => Self::Imperial,
            Self::Imperial => Self::Metric,
        }
    }

    /// Format a temperature rounded to whole degrees, e.g. `28°C`
    #[must_use]
    pub fn format_temperature(&self, value: f64) -> String {
        format!("{:.0}{}", value.round(), self.temperature_label())
    }

    /// Format a wind speed, e.g. `3.1 m/s`
    #[must_use]
    pub fn format_wind_speed(&self, value: f64) -> String {
        format!("{value} {}", self.wind_speed_label())
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_query_value())
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "metric" | "c" | "celsius" => Ok(Self::Metric),
            "imperial" | "f" | "fahrenheit" => Ok(Self::Imperial),
            _ => Err(format!(
                "Invalid unit system: {s}. Use 'metric' or 'imperial'"
            )),
        }
    }
}
