//! Geocoding port
//!
//! Resolves a free-text place name to a coordinate.

use async_trait::async_trait;
use domain::{ResolutionError, ResolvedPlace};
#[cfg(test)]
use mockall::automock;

/// Port for place-name lookups
#[cfg_attr(test, automock)]
#[async_trait]
pub trait GeocodingPort: Send + Sync {
    /// Resolve `name` to the provider's best match
    ///
    /// Fails with `LocationNotFound` when the provider has no match and with
    /// `NetworkFailure` when it cannot be reached. Issues a single request.
    async fn geocode(&self, name: &str) -> Result<ResolvedPlace, ResolutionError>;
}
