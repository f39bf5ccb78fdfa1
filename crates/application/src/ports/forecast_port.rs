//! Forecast port

use async_trait::async_trait;
use domain::{Coordinate, ForecastSeries, ResolutionError, UnitSystem};
#[cfg(test)]
use mockall::automock;

/// Port for the multi-day forecast
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Fetch the forecast at `coordinate`, down-sampled to one point per day
    async fn fetch_forecast(
        &self,
        coordinate: &Coordinate,
        unit: UnitSystem,
    ) -> Result<ForecastSeries, ResolutionError>;
}
