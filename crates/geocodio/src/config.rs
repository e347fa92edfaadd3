//! Geocodio client configuration

use serde::{Deserialize, Serialize};

use crate::error::GeocodioError;

/// Environment variable consulted when no explicit API key is configured
pub const API_KEY_ENV: &str = "GEOCODIO_API_KEY";

/// Configuration for the Geocodio API client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeocodioConfig {
    /// Geocodio API key; falls back to `GEOCODIO_API_KEY` when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Base URL for the Geocodio API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.geocod.io/v1.7".to_string()
}

const fn default_timeout_secs() -> u64 {
    10
}

impl Default for GeocodioConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl GeocodioConfig {
    /// Create a configuration with an explicit API key
    #[must_use]
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Default::default()
        }
    }

    /// Create a configuration suitable for testing
    #[must_use]
    pub fn for_testing() -> Self {
        Self {
            api_key: Some("test_api_key".to_string()),
            timeout_secs: 5,
            ..Default::default()
        }
    }

    /// Resolve the credential to attach to every request.
    ///
    /// An explicitly configured key wins; otherwise the `GEOCODIO_API_KEY`
    /// environment variable is consulted once, at client construction.
    ///
    /// # Errors
    ///
    /// Returns [`GeocodioError::ConfigurationError`] if neither source
    /// yields a non-empty key.
    pub fn resolve_api_key(&self) -> Result<String, GeocodioError> {
        let key = match &self.api_key {
            Some(key) => Some(key.clone()),
            None => std::env::var(API_KEY_ENV).ok(),
        };

        match key {
            Some(key) if !key.trim().is_empty() => Ok(key),
            _ => Err(GeocodioError::ConfigurationError(format!(
                "API key is required (set api_key or the {API_KEY_ENV} environment variable)"
            ))),
        }
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.base_url.is_empty() {
            return Err("base_url must not be empty".to_string());
        }

        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than 0".to_string());
        }

        Ok(())
    }
}
