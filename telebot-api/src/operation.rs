use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::method::Method;

/// Base trait for all Bot API operations
///
/// This trait defines the common interface that all Bot API methods
/// implement. It provides type safety through associated types and keeps a
/// consistent request/response pattern across all operations.
pub trait BotOperation {
    /// The request type for this operation, must be serializable
    type Request: Serialize;

    /// The response type for this operation, must be deserializable
    type Response: DeserializeOwned;

    /// The Bot API method this operation calls
    const METHOD: Method;

    /// Build the request parameters from the typed request data
    ///
    /// Returns the name/value pairs sent as query parameters or form
    /// fields, depending on the method's HTTP verb. Optional request
    /// fields that are unset produce no pair.
    fn build_params(request: &Self::Request) -> Vec<(&'static str, String)>;

    /// Parse the `result` payload of the response envelope
    ///
    /// The default implementation deserializes the payload directly into
    /// `Self::Response`; operations with irregular payloads can override.
    fn parse_response(value: &Value) -> Result<Self::Response, ApiError> {
        serde_json::from_value(value.clone()).map_err(|e| {
            ApiError::Parse(format!("{} response: {}", Self::METHOD.name(), e))
        })
    }
}
