//! Coordinate input normalization
//!
//! The reverse-geocoding endpoints accept one canonical coordinate form:
//! a `"latitude,longitude"` string. Callers may hand in either that
//! string directly or a latitude/longitude pair; both are folded into
//! the canonical form before any request is built.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GeocodioError;

/// A latitude/longitude pair.
///
/// Deserializes from both long-form (`latitude`/`longitude`) and
/// short-form (`lat`/`lng`) keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(alias = "lng")]
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate pair
    #[must_use]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// One coordinate input, in whichever representation the caller has.
///
/// Exactly one representation per value; there is no mixed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoordinateInput {
    /// A delimited `"latitude,longitude"` string
    Raw(String),
    /// A structured latitude/longitude pair
    Pair(Coordinate),
}

impl CoordinateInput {
    /// Normalize to the canonical `"latitude,longitude"` string.
    ///
    /// Idempotent for already-canonical strings. No numeric range
    /// checking happens here; out-of-range values are passed through and
    /// reported by the service as a request error.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodioError::InvalidInput`] for a raw string that is
    /// not two non-empty comma-separated parts.
    pub fn normalize(&self) -> Result<String, GeocodioError> {
        match self {
            Self::Raw(raw) => {
                let mut parts = raw.split(',');
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(lat), Some(lng), None)
                        if !lat.trim().is_empty() && !lng.trim().is_empty() =>
                    {
                        Ok(format!("{},{}", lat.trim(), lng.trim()))
                    }
                    _ => Err(GeocodioError::InvalidInput(format!(
                        "coordinate string must be \"latitude,longitude\", got {raw:?}"
                    ))),
                }
            }
            Self::Pair(pair) => Ok(pair.to_string()),
        }
    }
}

impl From<&str> for CoordinateInput {
    fn from(raw: &str) -> Self {
        Self::Raw(raw.to_string())
    }
}

impl From<String> for CoordinateInput {
    fn from(raw: String) -> Self {
        Self::Raw(raw)
    }
}

impl From<(f64, f64)> for CoordinateInput {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self::Pair(Coordinate::new(latitude, longitude))
    }
}

impl From<Coordinate> for CoordinateInput {
    fn from(pair: Coordinate) -> Self {
        Self::Pair(pair)
    }
}
