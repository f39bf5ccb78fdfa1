//! Multi-day forecast series

use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::WeatherIcon;

/// Number of 3-hour samples the provider returns per day
pub const SAMPLES_PER_DAY: usize = 8;

/// A single forecast point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    /// Sample time
    pub timestamp: DateTime<Utc>,
    /// Temperature in the requested unit system
    pub temperature: f64,
    /// Condition icon
    pub icon: WeatherIcon,
    /// Free-text description
    pub description: String,
}

impl ForecastPoint {
    /// Short weekday label such as `Mon`, in UTC
    ///
    /// Late-evening samples east of Greenwich fall on the next local day;
    /// use [`ForecastPoint::weekday_label_at`] when the place's offset is known.
    #[must_use]
    pub fn weekday_label(&self) -> String {
        self.timestamp.format("%a").to_string()
    }

    /// Short weekday label in the place's local time
    #[must_use]
    pub fn weekday_label_at(&self, offset: FixedOffset) -> String {
        self.timestamp.with_timezone(&offset).format("%a").to_string()
    }
}

/// Roughly one point per day, in chronological order
///
/// An empty series is a valid state; the forecast is auxiliary data and
/// its absence never fails a resolution.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ForecastSeries(Vec<ForecastPoint>);

impl ForecastSeries {
    /// Series with no points
    #[must_use]
    pub const fn empty() -> Self {
        Self(Vec::new())
    }

    /// Down-sample a chronological run of 3-hour samples to one per day
    ///
    /// Keeps the samples at positions 0, 8, 16, ... regardless of their
    /// wall-clock time.
    #[must_use]
    pub fn from_samples(samples: Vec<ForecastPoint>) -> Self {
        Self(downsample(samples))
    }

    /// Points in chronological order
    #[must_use]
    pub fn points(&self) -> &[ForecastPoint] {
        &self.0
    }

    /// Number of points
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the series has no points
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over points
    pub fn iter(&self) -> impl Iterator<Item = &ForecastPoint> {
        self.0.iter()
    }
}

/// Keep every [`SAMPLES_PER_DAY`]th element, starting with the first
pub fn downsample<T>(samples: Vec<T>) -> Vec<T> {
    samples.into_iter().step_by(SAMPLES_PER_DAY).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn samples(count: usize) -> Vec<ForecastPoint> {
        let start = Utc.with_ymd_and_hms(2024, 6, 3, 0, 0, 0).unwrap();
        (0..count)
            .map(|i| ForecastPoint {
                timestamp: start + Duration::hours(3 * i as i64),
                temperature: i as f64,
                icon: WeatherIcon::new("01d"),
                description: "clear sky".to_string(),
            })
            .collect()
    }

    #[test]
    fn forty_samples_become_five_days() {
        let series = ForecastSeries::from_samples(samples(40));
        assert_eq!(series.len(), 5);
        let temps: Vec<f64> = series.iter().map(|p| p.temperature).collect();
        assert_eq!(temps, vec![0.0, 8.0, 16.0, 24.0, 32.0]);
    }

    #[test]
    fn partial_last_day_is_kept() {
        assert_eq!(ForecastSeries::from_samples(samples(9)).len(), 2);
        assert_eq!(ForecastSeries::from_samples(samples(1)).len(), 1);
    }

    #[test]
    fn empty_input_gives_empty_series() {
        let series = ForecastSeries::from_samples(Vec::new());
        assert!(series.is_empty());
        assert_eq!(series, ForecastSeries::empty());
    }

    #[test]
    fn weekday_labels() {
        let series = ForecastSeries::from_samples(samples(40));
        let labels: Vec<String> = series.iter().map(ForecastPoint::weekday_label).collect();
        assert_eq!(labels, vec!["Mon", "Tue", "Wed", "Thu", "Fri"]);
    }

    #[test]
    fn weekday_label_at_local_offset() {
        let point = ForecastPoint {
            timestamp: Utc.with_ymd_and_hms(2024, 6, 3, 21, 0, 0).unwrap(),
            temperature: 24.0,
            icon: WeatherIcon::new("01n"),
            description: "clear sky".to_string(),
        };
        // 21:00 UTC on Monday is 02:30 on Tuesday at UTC+5:30.
        let india = FixedOffset::east_opt(5 * 3600 + 1800).unwrap();
        assert_eq!(point.weekday_label(), "Mon");
        assert_eq!(point.weekday_label_at(india), "Tue");
    }

    #[test]
    fn serializes_as_array() {
        let json = serde_json::to_value(ForecastSeries::empty()).unwrap();
        assert_eq!(json, serde_json::json!([]));
    }
}
