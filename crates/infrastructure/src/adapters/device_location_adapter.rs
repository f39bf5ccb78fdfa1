//! Device location adapter - Implements DeviceLocationPort from configuration
//!
//! Stands in for a platform geolocation API on hosts without one.

use application::ports::DeviceLocationPort;
use async_trait::async_trait;
use domain::{Coordinate, ResolutionError};
use tracing::debug;

/// Reports a fixed, configured position
#[derive(Debug, Clone, Copy)]
pub struct FixedLocationProvider {
    position: Coordinate,
}

impl FixedLocationProvider {
    #[must_use]
    pub const fn new(position: Coordinate) -> Self {
        Self { position }
    }
}

#[async_trait]
impl DeviceLocationPort for FixedLocationProvider {
    async fn current_position(&self) -> Result<Coordinate, ResolutionError> {
        debug!(position = %self.position, "Reporting configured device position");
        Ok(self.position)
    }
}

/// A device whose user refused the location permission
#[derive(Debug, Clone, Copy, Default)]
pub struct DeniedLocationProvider;

#[async_trait]
impl DeviceLocationPort for DeniedLocationProvider {
    async fn current_position(&self) -> Result<Coordinate, ResolutionError> {
        debug!("Device location permission denied");
        Err(ResolutionError::PermissionDenied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fixed_provider_reports_its_position() {
        let position = Coordinate::new(12.97, 77.59).unwrap();
        let provider = FixedLocationProvider::new(position);
        assert_eq!(provider.current_position().await.unwrap(), position);
    }

    #[tokio::test]
    async fn denied_provider_reports_permission_denied() {
        assert_eq!(
            DeniedLocationProvider.current_position().await,
            Err(ResolutionError::PermissionDenied)
        );
    }
}
