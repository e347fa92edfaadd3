//! Geocoding result models
//!
//! Typed representations of geocoded addresses as returned by the
//! Geocodio API. All models are plain data: built once from a decoded
//! response, never mutated afterwards.

use std::fmt;
use std::ops::Index;
use std::slice;

use serde::{Deserialize, Serialize};

/// One candidate address, either geocoded or parsed.
///
/// Every field is optional: the parse endpoint echoes only the
/// components present in the input, and geocoded candidates omit
/// components the service could not determine.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Address {
    /// Full single-line rendering of the address
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_address: Option<String>,
    /// Street number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    /// Directional prefix (e.g. "W")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predirectional: Option<String>,
    /// Street name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street: Option<String>,
    /// Street suffix (e.g. "Blvd")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    /// City name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// County name
    #[serde(skip_serializing_if = "Option::is_none")]
    pub county: Option<String>,
    /// State or province code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Postal code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub zip: Option<String>,
    /// Country code
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Latitude in decimal degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Confidence score (0..1, 1 is an exact match)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy: Option<f64>,
    /// Match granularity (e.g. "rooftop", "range_interpolation")
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accuracy_type: Option<String>,
    /// Data source the candidate came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.formatted_address {
            Some(formatted) => write!(f, "{formatted}"),
            None => write!(f, "(unformatted address)"),
        }
    }
}

/// The ordered candidate addresses returned for one input query.
///
/// The input query that produced the set is retained for traceability.
/// Candidate order is exactly the service's order (best match first); no
/// re-ranking or de-duplication is done client-side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressSet {
    query: String,
    addresses: Vec<Address>,
}

impl AddressSet {
    /// Create a set from a query and its candidates
    #[must_use]
    pub fn new(query: impl Into<String>, addresses: Vec<Address>) -> Self {
        Self {
            query: query.into(),
            addresses,
        }
    }

    /// The input query this set was produced for
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Number of candidates (zero when the service found no match)
    #[must_use]
    pub fn len(&self) -> usize {
        self.addresses.len()
    }

    /// True when the service found no match
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.addresses.is_empty()
    }

    /// The best-ranked candidate, if any
    #[must_use]
    pub fn best(&self) -> Option<&Address> {
        self.addresses.first()
    }

    /// Iterate over candidates in service order
    pub fn iter(&self) -> slice::Iter<'_, Address> {
        self.addresses.iter()
    }
}

impl Index<usize> for AddressSet {
    type Output = Address;

    fn index(&self, index: usize) -> &Self::Output {
        &self.addresses[index]
    }
}

impl IntoIterator for AddressSet {
    type Item = Address;
    type IntoIter = std::vec::IntoIter<Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.into_iter()
    }
}

impl<'a> IntoIterator for &'a AddressSet {
    type Item = &'a Address;
    type IntoIter = slice::Iter<'a, Address>;

    fn into_iter(self) -> Self::IntoIter {
        self.addresses.iter()
    }
}

impl fmt::Display for AddressSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} candidates)", self.query, self.len())
    }
}
