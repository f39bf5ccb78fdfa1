//! Resolution error taxonomy

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors a location resolution can end in
///
/// None of these are fatal: the presentation layer shows the message and
/// keeps the previously displayed snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum ResolutionError {
    /// The place name did not match any known location
    #[error("Location not found: {0}")]
    LocationNotFound(String),

    /// The upstream service could not be reached or did not answer in time
    #[error("Network failure: {0}")]
    NetworkFailure(String),

    /// The platform refused (or cannot provide) the device position
    #[error("Location permission denied")]
    PermissionDenied,

    /// The upstream service answered with an error or an unreadable payload
    #[error("Upstream error: {0}")]
    UpstreamError(String),
}

impl ResolutionError {
    /// Create a location-not-found error for the given query
    pub fn not_found(query: impl Into<String>) -> Self {
        Self::LocationNotFound(query.into())
    }

    /// Create a network failure error
    pub fn network(detail: impl Into<String>) -> Self {
        Self::NetworkFailure(detail.into())
    }

    /// Create an upstream error
    pub fn upstream(detail: impl Into<String>) -> Self {
        Self::UpstreamError(detail.into())
    }

    /// Message suitable for showing to the user
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::LocationNotFound(query) if query.trim().is_empty() => {
                "Please enter a city name.".to_string()
            },
            Self::LocationNotFound(query) => format!("Location not found: {query}"),
            Self::NetworkFailure(_) => {
                "Unable to reach the weather service. Please check your connection.".to_string()
            },
            Self::PermissionDenied => "Location permission denied".to_string(),
            Self::UpstreamError(_) => {
                "The weather service returned an error. Please try again later.".to_string()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_build_expected_variants() {
        assert_eq!(
            ResolutionError::not_found("Zzzzqx"),
            ResolutionError::LocationNotFound("Zzzzqx".to_string())
        );
        assert!(matches!(
            ResolutionError::network("timeout"),
            ResolutionError::NetworkFailure(_)
        ));
        assert!(matches!(
            ResolutionError::upstream("HTTP 500"),
            ResolutionError::UpstreamError(_)
        ));
    }

    #[test]
    fn display_includes_detail() {
        let err = ResolutionError::not_found("Atlantis");
        assert_eq!(err.to_string(), "Location not found: Atlantis");

        let err = ResolutionError::upstream("HTTP 502");
        assert_eq!(err.to_string(), "Upstream error: HTTP 502");
    }

    #[test]
    fn user_messages_are_distinct() {
        let not_found = ResolutionError::not_found("Atlantis").user_message();
        let network = ResolutionError::network("refused").user_message();
        let denied = ResolutionError::PermissionDenied.user_message();
        let upstream = ResolutionError::upstream("HTTP 500").user_message();

        assert!(not_found.contains("Atlantis"));
        assert!(network.contains("connection"));
        assert_eq!(denied, "Location permission denied");
        assert_ne!(network, upstream);
        assert_ne!(not_found, network);
    }

    #[test]
    fn empty_query_asks_for_input() {
        let err = ResolutionError::not_found("   ");
        assert!(err.user_message().contains("enter a city"));
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_string(&ResolutionError::PermissionDenied).unwrap();
        assert!(json.contains("permission_denied"));

        let json = serde_json::to_string(&ResolutionError::network("timeout")).unwrap();
        assert!(json.contains("network_failure"));
        assert!(json.contains("timeout"));
    }
}
