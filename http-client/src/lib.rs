//! Private HTTP client for Telegram Bot API communication
//!
//! This crate provides a minimal HTTP client specifically designed for
//! calling Bot API methods at `https://api.telegram.org/bot{token}/{method}`.
//! It handles the response envelope (`ok`/`result`/`description`) so callers
//! only ever see the `result` payload or a typed error.

mod error;

pub use error::HttpError;

use std::time::Duration;

use serde_json::Value;

/// Default base URL of the Bot API
pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// HTTP verb used for a Bot API method
///
/// `getUpdates` is issued as a GET with query parameters; every other
/// method posts its parameters as a form body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Get,
    Post,
}

/// A minimal HTTP client for Bot API method calls
#[derive(Debug, Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
    base_url: String,
}

impl HttpClient {
    /// Create a new HTTP client with default configuration
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client pointed at a custom base URL
    ///
    /// Used by tests to direct requests at a local mock server instead of
    /// the real Bot API.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            agent: ureq::AgentBuilder::new()
                .timeout_connect(Duration::from_secs(5))
                .timeout_read(Duration::from_secs(30))
                .build(),
            base_url: base_url.into(),
        }
    }

    /// Call a Bot API method and return the `result` payload
    ///
    /// Formats the `/bot{token}/{method}` URL, attaches `params` as query
    /// parameters (GET) or a form body (POST), and unwraps the response
    /// envelope. A response with `"ok": false`, or a non-success HTTP
    /// status, becomes [`HttpError::Api`] carrying the remote description.
    pub fn call(
        &self,
        token: &str,
        method: &str,
        verb: Verb,
        params: &[(&'static str, String)],
    ) -> Result<Value, HttpError> {
        let url = format!("{}/bot{}/{}", self.base_url, token, method);

        let result = match verb {
            Verb::Get => {
                let mut request = self.agent.get(&url);
                for (name, value) in params {
                    request = request.query(name, value);
                }
                request.call()
            }
            Verb::Post => {
                let pairs: Vec<(&str, &str)> = params
                    .iter()
                    .map(|(name, value)| (*name, value.as_str()))
                    .collect();
                self.agent.post(&url).send_form(&pairs)
            }
        };

        let body = match result {
            Ok(response) => response
                .into_string()
                .map_err(|e| HttpError::Network(e.to_string()))?,
            Err(ureq::Error::Status(code, response)) => {
                let status_text = response.status_text().to_string();
                let body = response.into_string().unwrap_or_default();
                return Err(error_from_status(code, &status_text, &body));
            }
            Err(ureq::Error::Transport(transport)) => {
                return Err(HttpError::Network(transport.to_string()));
            }
        };

        extract_result(&body)
    }
}

impl Default for HttpClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Unwrap the Bot API response envelope from a successful HTTP response
fn extract_result(body: &str) -> Result<Value, HttpError> {
    let envelope: Value =
        serde_json::from_str(body).map_err(|e| HttpError::Parse(e.to_string()))?;

    let ok = envelope
        .get("ok")
        .and_then(Value::as_bool)
        .ok_or_else(|| HttpError::Parse("Missing ok field in response".to_string()))?;

    if !ok {
        return Err(api_error_from_envelope(&envelope, 400));
    }

    envelope
        .get("result")
        .cloned()
        .ok_or_else(|| HttpError::Parse("Missing result field in response".to_string()))
}

/// Build an error for a non-success HTTP status
///
/// The Bot API sends its envelope even on error statuses; fall back to the
/// status line when the body carries no usable description.
fn error_from_status(code: u16, status_text: &str, body: &str) -> HttpError {
    match serde_json::from_str::<Value>(body) {
        Ok(envelope) if envelope.get("description").is_some() => {
            api_error_from_envelope(&envelope, code)
        }
        _ => HttpError::Api {
            error_code: code,
            description: status_text.to_string(),
        },
    }
}

fn api_error_from_envelope(envelope: &Value, fallback_code: u16) -> HttpError {
    let error_code = envelope
        .get("error_code")
        .and_then(Value::as_u64)
        .and_then(|code| u16::try_from(code).ok())
        .unwrap_or(fallback_code);

    let description = envelope
        .get("description")
        .and_then(Value::as_str)
        .unwrap_or("Unknown error")
        .to_string();

    HttpError::Api {
        error_code,
        description,
    }
}
