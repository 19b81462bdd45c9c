/*
[INPUT]:  Error sources (HTTP transport, JSON, URL, headers, API status)
[OUTPUT]: Structured error type for every client operation
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the bitFlyer adapter
#[derive(Error, Debug)]
pub enum BitflyerError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API rejected a request whose outcome is checked (cancel endpoints)
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Credential could not be encoded as a header value
    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl BitflyerError {
    /// Check if the error is worth retrying.
    ///
    /// The client itself never retries; this is a hint for callers.
    pub fn is_retryable(&self) -> bool {
        match self {
            BitflyerError::Http(err) => err.is_timeout() || err.is_connect(),
            BitflyerError::Api { status, .. } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// Check if error indicates an authentication failure
    pub fn is_auth_error(&self) -> bool {
        match self {
            BitflyerError::Api { status, .. } => *status == 401 || *status == 403,
            BitflyerError::Config(_) => true,
            _ => false,
        }
    }

    /// Create an API error from status code and message
    pub fn api_error(status: StatusCode, message: impl Into<String>) -> Self {
        BitflyerError::Api {
            status: status.as_u16(),
            message: message.into(),
        }
    }

    pub(crate) fn missing_credentials(endpoint: &str) -> Self {
        BitflyerError::Config(format!(
            "API key and secret are required for private endpoint {endpoint}"
        ))
    }
}

/// Result type alias for bitFlyer operations
pub type Result<T> = std::result::Result<T, BitflyerError>;
