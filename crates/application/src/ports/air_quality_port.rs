//! Air quality port

use async_trait::async_trait;
use domain::{AirQualityIndex, Coordinate, ResolutionError};
#[cfg(test)]
use mockall::automock;

/// Port for the air pollution index
#[cfg_attr(test, automock)]
#[async_trait]
pub trait AirQualityPort: Send + Sync {
    /// Fetch the most current pollution index at `coordinate`
    ///
    /// Out-of-range provider values map to `AirQualityIndex::Unknown`
    /// rather than an error.
    async fn fetch_air_quality(
        &self,
        coordinate: &Coordinate,
    ) -> Result<AirQualityIndex, ResolutionError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn AirQualityPort>();
    }
}
