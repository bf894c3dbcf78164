use http_client::HttpError;
use thiserror::Error;

/// High-level errors for Bot API operations
///
/// This enum abstracts away the underlying HTTP communication details and
/// provides meaningful error information for the common failure scenarios
/// when calling Bot API methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network communication error
    ///
    /// Returned when there are network-level issues reaching the Bot API,
    /// such as connection timeouts or DNS resolution failures.
    #[error("Network error: {0}")]
    Network(String),

    /// Response parsing error
    ///
    /// Returned when the API answers but the response content cannot be
    /// parsed into the expected shape. This covers malformed JSON, a broken
    /// response envelope, and result payloads that fail deserialization.
    #[error("Parse error: {0}")]
    Parse(String),

    /// Failure reported by the Bot API
    ///
    /// Returned when the API rejects a request, carrying the numeric error
    /// code and the status description from the response envelope.
    #[error("Bot API error {error_code}: {description}")]
    Api {
        error_code: u16,
        description: String,
    },

    /// Invalid parameter value
    ///
    /// Returned when an operation parameter is out of range before any
    /// request is sent, e.g. a `getUpdates` limit outside 1..=100.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
}

/// Type alias for results that can return an ApiError
pub type Result<T> = std::result::Result<T, ApiError>;

impl From<HttpError> for ApiError {
    fn from(error: HttpError) -> Self {
        match error {
            HttpError::Network(msg) => ApiError::Network(msg),
            HttpError::Parse(msg) => ApiError::Parse(msg),
            HttpError::Api {
                error_code,
                description,
            } => ApiError::Api {
                error_code,
                description,
            },
        }
    }
}
