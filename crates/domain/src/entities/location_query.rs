//! Input to a location resolution

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value_objects::Coordinate;

/// What the user asked to see weather for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationQuery {
    /// Free-text place name that still needs geocoding
    ByName(String),
    /// Raw coordinate, e.g. from the platform location API
    ByCoordinate(Coordinate),
}

impl LocationQuery {
    /// Build a by-name query
    pub fn by_name(name: impl Into<String>) -> Self {
        Self::ByName(name.into())
    }

    /// Whether this query can be resolved without a network call
    ///
    /// A blank name is rejected up front.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::ByName(name) if name.trim().is_empty())
    }
}

impl From<Coordinate> for LocationQuery {
    fn from(coordinate: Coordinate) -> Self {
        Self::ByCoordinate(coordinate)
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ByName(name) => write!(f, "\"{}\"", name.trim()),
            Self::ByCoordinate(coordinate) => write!(f, "({coordinate})"),
        }
    }
}

/// Outcome of geocoding a place name
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPlace {
    /// Canonical display name from the provider
    pub display_name: String,
    /// Coordinate of the best match
    pub coordinate: Coordinate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_detected() {
        assert!(LocationQuery::by_name("").is_blank());
        assert!(LocationQuery::by_name("  \t").is_blank());
        assert!(!LocationQuery::by_name("Bangalore").is_blank());

        let coord = Coordinate::new(12.97, 77.59).unwrap();
        assert!(!LocationQuery::from(coord).is_blank());
    }

    #[test]
    fn display() {
        assert_eq!(LocationQuery::by_name(" Paris ").to_string(), "\"Paris\"");
        let coord = Coordinate::new(1.0, 2.0).unwrap();
        assert!(LocationQuery::from(coord).to_string().starts_with("(1.000000"));
    }
}
