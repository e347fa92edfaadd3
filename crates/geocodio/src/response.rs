//! Response body parsing
//!
//! The Geocodio API answers in two shapes: single-query responses carry
//! a flat `results` list, batch responses carry one nested entry per
//! input query, each wrapping a flat response. Both are folded into the
//! [`AddressSet`] model here; the parse endpoint's bare component object
//! becomes a single [`Address`].

use serde::Deserialize;

use crate::error::GeocodioError;
use crate::models::{Address, AddressSet};

/// Flat single-query response: a `results` list of candidates
#[derive(Debug, Deserialize)]
struct RawSingleResponse {
    #[serde(default)]
    results: Vec<RawResult>,
}

/// Nested batch response: one entry per input query, input order
#[derive(Debug, Deserialize)]
struct RawBatchResponse {
    #[serde(default)]
    results: Vec<RawBatchEntry>,
}

#[derive(Debug, Deserialize)]
struct RawBatchEntry {
    query: Option<String>,
    response: RawSingleResponse,
}

#[derive(Debug, Deserialize)]
struct RawResult {
    address_components: Option<RawComponents>,
    formatted_address: Option<String>,
    location: Option<RawLocation>,
    accuracy: Option<f64>,
    accuracy_type: Option<String>,
    source: Option<String>,
}

/// Parse-endpoint response: a bare component object, no candidate list
#[derive(Debug, Deserialize)]
struct RawParsedAddress {
    address_components: Option<RawComponents>,
    formatted_address: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
struct RawComponents {
    number: Option<String>,
    predirectional: Option<String>,
    street: Option<String>,
    suffix: Option<String>,
    city: Option<String>,
    county: Option<String>,
    state: Option<String>,
    zip: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLocation {
    lat: f64,
    lng: f64,
}

/// Interpret a flat single-query body as one [`AddressSet`]
pub(crate) fn parse_single(query: &str, body: &str) -> Result<AddressSet, GeocodioError> {
    let raw: RawSingleResponse =
        serde_json::from_str(body).map_err(|e| GeocodioError::ParseError(e.to_string()))?;

    Ok(convert_response(query.to_string(), raw))
}

/// Interpret a nested batch body as one [`AddressSet`] per input query.
///
/// Correlation is strictly positional: the service echoes every input in
/// input order, and an entry count differing from the input count is a
/// protocol error. The echoed query string, when present, is kept as the
/// set's query.
pub(crate) fn parse_batch(
    queries: &[String],
    body: &str,
) -> Result<Vec<AddressSet>, GeocodioError> {
    let raw: RawBatchResponse =
        serde_json::from_str(body).map_err(|e| GeocodioError::ParseError(e.to_string()))?;

    if raw.results.len() != queries.len() {
        return Err(GeocodioError::BatchMismatch {
            expected: queries.len(),
            actual: raw.results.len(),
        });
    }

    Ok(raw
        .results
        .into_iter()
        .zip(queries)
        .map(|(entry, query)| {
            let query = entry.query.unwrap_or_else(|| query.clone());
            convert_response(query, entry.response)
        })
        .collect())
}

/// Interpret a parse-endpoint body as a single [`Address`]
pub(crate) fn parse_components(body: &str) -> Result<Address, GeocodioError> {
    let raw: RawParsedAddress =
        serde_json::from_str(body).map_err(|e| GeocodioError::ParseError(e.to_string()))?;

    let mut address = convert_components(raw.address_components.unwrap_or_default());
    address.formatted_address = raw.formatted_address;
    Ok(address)
}

fn convert_response(query: String, raw: RawSingleResponse) -> AddressSet {
    let addresses = raw.results.into_iter().map(convert_result).collect();
    AddressSet::new(query, addresses)
}

fn convert_result(raw: RawResult) -> Address {
    let mut address = convert_components(raw.address_components.unwrap_or_default());
    address.formatted_address = raw.formatted_address;
    address.accuracy = raw.accuracy;
    address.accuracy_type = raw.accuracy_type;
    address.source = raw.source;
    if let Some(location) = raw.location {
        address.latitude = Some(location.lat);
        address.longitude = Some(location.lng);
    }
    address
}

fn convert_components(raw: RawComponents) -> Address {
    Address {
        number: raw.number,
        predirectional: raw.predirectional,
        street: raw.street,
        suffix: raw.suffix,
        city: raw.city,
        county: raw.county,
        state: raw.state,
        zip: raw.zip,
        country: raw.country,
        ..Default::default()
    }
}
