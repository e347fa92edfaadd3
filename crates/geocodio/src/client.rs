//! Geocodio API client
//!
//! Dispatches geocode, reverse-geocode, and parse operations against the
//! Geocodio HTTP API. Single-input calls go out as a GET with the query
//! in the URL; multi-input calls go out as one batch POST carrying the
//! ordered inputs as a JSON array. Batching is protocol-level grouping
//! only; the client never issues concurrent exchanges.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::ACCEPT;
use tracing::{debug, instrument};

use crate::config::GeocodioConfig;
use crate::coordinates::CoordinateInput;
use crate::error::GeocodioError;
use crate::models::{Address, AddressSet};
use crate::response;

/// Trait for geocoding service clients
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// Geocode one or more addresses, one [`AddressSet`] per input in
    /// input order
    async fn geocode(&self, addresses: &[&str]) -> Result<Vec<AddressSet>, GeocodioError>;

    /// Reverse-geocode one or more coordinate inputs, one [`AddressSet`]
    /// per input in input order
    async fn reverse_geocode(
        &self,
        coordinates: &[CoordinateInput],
    ) -> Result<Vec<AddressSet>, GeocodioError>;

    /// Decompose a raw address string into structured components.
    ///
    /// The parse endpoint does no candidate ranking, so this returns one
    /// [`Address`]; components absent from the input stay absent.
    async fn parse(&self, address: &str) -> Result<Address, GeocodioError>;

    /// Check if the geocoding service is reachable
    async fn is_healthy(&self) -> bool;
}

/// Read-style (GET) vs. write-style (POST) exchange
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RequestMethod {
    Read,
    Write,
}

/// HTTP client for the Geocodio API
#[derive(Debug)]
pub struct GeocodioClient {
    client: Client,
    config: GeocodioConfig,
    api_key: String,
}

impl GeocodioClient {
    /// Create a new Geocodio client.
    ///
    /// The credential is resolved once here (explicit config key, else
    /// the `GEOCODIO_API_KEY` environment variable) and attached to every
    /// outgoing request.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, no API key can
    /// be resolved, or the HTTP client cannot be initialized.
    pub fn new(config: &GeocodioConfig) -> Result<Self, GeocodioError> {
        config
            .validate()
            .map_err(GeocodioError::ConfigurationError)?;
        let api_key = config.resolve_api_key()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent("geocodio-rs/0.2")
            .build()
            .map_err(|e| GeocodioError::ConnectionFailed(e.to_string()))?;

        Ok(Self {
            client,
            config: config.clone(),
            api_key,
        })
    }

    /// Build and perform one exchange against the API.
    ///
    /// Attaches the credential and the `Accept` header on every request;
    /// a `Write` exchange additionally carries the payload as a JSON
    /// body. Non-success statuses fail with the raw status and body
    /// retained; nothing is retried.
    async fn execute(
        &self,
        method: RequestMethod,
        path: &str,
        query: &[(&str, String)],
        payload: Option<&serde_json::Value>,
    ) -> Result<String, GeocodioError> {
        let url = format!("{}{path}", self.config.base_url);

        let mut request = match method {
            RequestMethod::Read => self.client.get(&url),
            RequestMethod::Write => self.client.post(&url),
        };

        request = request
            .query(&[("api_key", self.api_key.as_str())])
            .query(query)
            .header(ACCEPT, "application/json");

        if method == RequestMethod::Write {
            // reqwest sets Content-Type: application/json here; an empty
            // payload is still sent as an empty JSON value, not omitted
            let empty = serde_json::Value::Array(vec![]);
            request = request.json(payload.unwrap_or(&empty));
        }

        debug!(?method, path, "Dispatching geocoding request");

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                GeocodioError::Timeout {
                    timeout_secs: self.config.timeout_secs,
                }
            } else {
                GeocodioError::ConnectionFailed(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| GeocodioError::ConnectionFailed(e.to_string()))?;

        if !status.is_success() {
            return Err(GeocodioError::RequestFailed {
                status: status.as_u16(),
                body,
            });
        }

        Ok(body)
    }

    /// Single-query GET against `path` with `q=<query>`
    async fn fetch_single(&self, path: &str, query: &str) -> Result<AddressSet, GeocodioError> {
        let params = [("q", query.to_string())];
        let body = self
            .execute(RequestMethod::Read, path, &params, None)
            .await?;
        response::parse_single(query, &body)
    }

    /// Batch POST against `path` with the ordered queries as the payload
    async fn fetch_batch(
        &self,
        path: &str,
        queries: &[String],
    ) -> Result<Vec<AddressSet>, GeocodioError> {
        let payload = serde_json::json!(queries);
        let body = self
            .execute(RequestMethod::Write, path, &[], Some(&payload))
            .await?;
        response::parse_batch(queries, &body)
    }
}

#[async_trait]
impl Geocoder for GeocodioClient {
    #[instrument(skip(self), fields(count = addresses.len()))]
    async fn geocode(&self, addresses: &[&str]) -> Result<Vec<AddressSet>, GeocodioError> {
        match addresses {
            [] => Err(GeocodioError::InvalidInput(
                "at least one address required".to_string(),
            )),
            [single] => Ok(vec![self.fetch_single("/geocode", single).await?]),
            many => {
                let queries: Vec<String> = many.iter().map(|a| (*a).to_string()).collect();
                self.fetch_batch("/geocode", &queries).await
            }
        }
    }

    #[instrument(skip(self), fields(count = coordinates.len()))]
    async fn reverse_geocode(
        &self,
        coordinates: &[CoordinateInput],
    ) -> Result<Vec<AddressSet>, GeocodioError> {
        if coordinates.is_empty() {
            return Err(GeocodioError::InvalidInput(
                "at least one coordinate pair required".to_string(),
            ));
        }

        // every input is normalized before any exchange, so a malformed
        // coordinate fails the whole call up front
        let queries = coordinates
            .iter()
            .map(CoordinateInput::normalize)
            .collect::<Result<Vec<_>, _>>()?;

        match queries.as_slice() {
            [single] => Ok(vec![self.fetch_single("/reverse", single).await?]),
            _ => self.fetch_batch("/reverse", &queries).await,
        }
    }

    #[instrument(skip(self))]
    async fn parse(&self, address: &str) -> Result<Address, GeocodioError> {
        let address = address.trim();
        if address.is_empty() {
            return Err(GeocodioError::InvalidInput(
                "address must not be empty".to_string(),
            ));
        }

        let params = [("q", address.to_string())];
        let body = self
            .execute(RequestMethod::Read, "/parse", &params, None)
            .await?;
        response::parse_components(&body)
    }

    async fn is_healthy(&self) -> bool {
        let params = [("q", "test".to_string())];
        self.execute(RequestMethod::Read, "/parse", &params, None)
            .await
            .is_ok()
    }
}
