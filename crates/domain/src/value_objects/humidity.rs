//! Relative humidity shown on the current-conditions card
//!
//! OpenWeatherMap reports humidity as an integer percentage. Saturated air
//! (fog, heavy rain) occasionally comes back above 100. Such a reading is a
//! provider artefact, and failing the whole resolution over it would hide
//! otherwise good current conditions, so adapters go through
//! [`Humidity::clamped`]. Deserialization stays strict.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// A stored or configured humidity outside 0-100%
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("humidity {0}% is outside 0-100%")]
pub struct InvalidHumidity(u8);

/// Relative humidity percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Humidity(u8);

impl Humidity {
    /// Saturation
    pub const MAX: u8 = 100;

    /// Strict constructor
    ///
    /// # Errors
    ///
    /// Returns `InvalidHumidity` above [`Humidity::MAX`].
    pub const fn new(value: u8) -> Result<Self, InvalidHumidity> {
        if value > Self::MAX {
            Err(InvalidHumidity(value))
        } else {
            Ok(Self(value))
        }
    }

    /// Provider reading, capped at saturation
    #[must_use]
    pub const fn clamped(value: u8) -> Self {
        if value > Self::MAX {
            Self(Self::MAX)
        } else {
            Self(value)
        }
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Humidity {
    type Error = InvalidHumidity;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Humidity> for u8 {
    fn from(humidity: Humidity) -> Self {
        humidity.0
    }
}

impl fmt::Display for Humidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
