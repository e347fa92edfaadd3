//! Geocoding error types

use thiserror::Error;

/// Errors that can occur during geocoding operations
#[derive(Debug, Error)]
pub enum GeocodioError {
    /// The caller supplied input the client cannot dispatch
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error (missing or unusable settings)
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Connection to the geocoding service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request timed out
    #[error("Request timed out after {timeout_secs} seconds")]
    Timeout {
        /// The timeout duration in seconds
        timeout_secs: u64,
    },

    /// The service answered with a non-success status
    #[error("Request failed: HTTP {status}")]
    RequestFailed {
        /// HTTP status code returned by the service
        status: u16,
        /// Raw response body, kept for caller inspection
        body: String,
    },

    /// Failed to parse a response body from the service
    #[error("Parse error: {0}")]
    ParseError(String),

    /// Batch response entry count does not match the input count
    #[error("Batch mismatch: sent {expected} queries, got {actual} results")]
    BatchMismatch {
        /// Number of queries sent
        expected: usize,
        /// Number of result entries received
        actual: usize,
    },
}

impl GeocodioError {
    /// Returns true if a later identical call could plausibly succeed.
    ///
    /// The client itself never retries; this only classifies the failure
    /// for callers that want to.
    #[must_use]
    pub const fn is_transient(&self) -> bool {
        match self {
            Self::ConnectionFailed(_) | Self::Timeout { .. } => true,
            Self::RequestFailed { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// HTTP status of the failed exchange, when one completed
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            _ => None,
        }
    }
}
