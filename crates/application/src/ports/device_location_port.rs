//! Device location port
//!
//! Stands in for the platform geolocation API. The permission prompt is
//! modelled as a plain async call that either yields a position or fails.

use async_trait::async_trait;
use domain::{Coordinate, ResolutionError};
#[cfg(test)]
use mockall::automock;

/// Port for the device's current position
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DeviceLocationPort: Send + Sync {
    /// Current position of the device
    ///
    /// Fails with `PermissionDenied` when the user refuses or the platform
    /// has no location capability.
    async fn current_position(&self) -> Result<Coordinate, ResolutionError>;
}
