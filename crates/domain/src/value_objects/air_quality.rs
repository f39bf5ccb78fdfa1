//! Air quality index value object

use serde::{Deserialize, Serialize};
use std::fmt;

/// Air quality on the provider's 1 (best) to 5 (worst) scale
///
/// Any value outside the scale, or a failed lookup, is `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirQualityIndex {
    /// Index 1
    Good,
    /// Index 2
    Fair,
    /// Index 3
    Moderate,
    /// Index 4
    Poor,
    /// Index 5
    VeryPoor,
    /// Missing or unrecognized index
    #[default]
    Unknown,
}

impl AirQualityIndex {
    /// Map a raw index to a level; total over `i64`
    #[must_use]
    pub const fn from_index(index: i64) -> Self {
        match index {
            1 => Self::Good,
            2 => Self::Fair,
            3 => Self::Moderate,
            4 => Self::Poor,
            5 => Self::VeryPoor,
            _ => Self::Unknown,
        }
    }

    /// Raw index, `None` for `Unknown`
    #[must_use]
    pub const fn index(&self) -> Option<u8> {
        match self {
            Self::Good => Some(1),
            Self::Fair => Some(2),
            Self::Moderate => Some(3),
            Self::Poor => Some(4),
            Self::VeryPoor => Some(5),
            Self::Unknown => None,
        }
    }

    /// Human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Moderate => "Moderate",
            Self::Poor => "Poor",
            Self::VeryPoor => "Very Poor",
            Self::Unknown => "Unknown",
        }
    }

    /// Traffic-light marker shown next to the label
    #[must_use]
    pub const fn emoji(&self) -> &'static str {
        match self {
            Self::Good => "🟢",
            Self::Fair => "🟡",
            Self::Moderate => "🟠",
            Self::Poor => "🔴",
            Self::VeryPoor => "🟣",
            Self::Unknown => "",
        }
    }
}

/// Label for a raw index
#[must_use]
pub const fn aqi_label(index: i64) -> &'static str {
    AirQualityIndex::from_index(index).label()
}

impl fmt::Display for AirQualityIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_scale_values() {
        assert_eq!(aqi_label(1), "Good");
        assert_eq!(aqi_label(2), "Fair");
        assert_eq!(aqi_label(3), "Moderate");
        assert_eq!(aqi_label(4), "Poor");
        assert_eq!(aqi_label(5), "Very Poor");
    }

    #[test]
    fn out_of_range_is_unknown() {
        for value in [0, 6, -1, i64::MIN, i64::MAX] {
            assert_eq!(AirQualityIndex::from_index(value), AirQualityIndex::Unknown);
            assert_eq!(aqi_label(value), "Unknown");
        }
    }

    #[test]
    fn index_round_trips_for_known_levels() {
        for value in 1..=5 {
            let level = AirQualityIndex::from_index(value);
            assert_eq!(level.index().map(i64::from), Some(value));
        }
        assert_eq!(AirQualityIndex::Unknown.index(), None);
    }

    #[test]
    fn default_is_unknown() {
        assert_eq!(AirQualityIndex::default(), AirQualityIndex::Unknown);
    }

    #[test]
    fn emoji_markers() {
        assert_eq!(AirQualityIndex::Fair.emoji(), "🟡");
        assert_eq!(AirQualityIndex::Unknown.emoji(), "");
    }
}
