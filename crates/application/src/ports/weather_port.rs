//! Current weather port

use async_trait::async_trait;
use domain::{Coordinate, CurrentConditions, ResolutionError, UnitSystem};
#[cfg(test)]
use mockall::automock;

/// Port for current-conditions retrieval
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CurrentWeatherPort: Send + Sync {
    /// Fetch current conditions at exactly `coordinate`
    ///
    /// Temperature and wind speed are expressed in `unit`.
    async fn fetch_current(
        &self,
        coordinate: &Coordinate,
        unit: UnitSystem,
    ) -> Result<CurrentConditions, ResolutionError>;
}
