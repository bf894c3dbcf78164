//! Error types for the HTTP client

use thiserror::Error;

/// Errors that can occur while talking to the Bot API
#[derive(Debug, Error)]
pub enum HttpError {
    /// Network or HTTP communication error
    #[error("Network/HTTP error: {0}")]
    Network(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    Parse(String),

    /// Failure reported by the remote API
    #[error("API error {error_code}: {description}")]
    Api {
        /// Numeric error code reported by the API (usually an HTTP status)
        error_code: u16,
        /// Human-readable description from the API response
        description: String,
    },
}
