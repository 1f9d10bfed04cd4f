//! Request error taxonomy and server message extraction.

use serde_json::Value;
use thiserror::Error;

use crate::domain::ValidationError;

/// Errors that can occur while talking to the remote API.
///
/// `Display` is the human-readable message stored in a slice's `error`.
#[derive(Debug, Error)]
pub enum RequestError {
    /// The server could not be reached or the connection broke.
    #[error("Network error: {source}")]
    Transport {
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Response { status: u16, message: String },

    /// The body of a successful response did not have the expected shape.
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Client-side input rejected before sending.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The request could not be built (bad base URL, unserializable query).
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl From<reqwest::Error> for RequestError {
    fn from(source: reqwest::Error) -> Self {
        RequestError::Transport { source }
    }
}

impl RequestError {
    /// HTTP status when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Response { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Get error type string for logs.
    pub fn error_type(&self) -> &'static str {
        match self {
            RequestError::Transport { .. } => "transport_error",
            RequestError::Response { .. } => "response_error",
            RequestError::Decode(_) => "decode_error",
            RequestError::Validation(_) => "validation_error",
            RequestError::InvalidRequest(_) => "invalid_request",
        }
    }

    pub fn from_response(status: u16, body: &str) -> Self {
        RequestError::Response {
            status,
            message: extract_error_message(body)
                .unwrap_or_else(|| format!("Request failed with status code {}", status)),
        }
    }
}

/// Pull a message out of a structured error body.
///
/// Understands `{"message": "..."}`, `{"message": ["...", "..."]}`,
/// `{"error": "..."}` and `{"error": {"message": "..."}}`.
pub fn extract_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;
    let object = value.as_object()?;

    let from_value = |v: &Value| -> Option<String> {
        match v {
            Value::String(s) if !s.is_empty() => Some(s.clone()),
            Value::Array(items) => {
                let parts: Vec<&str> = items.iter().filter_map(Value::as_str).collect();
                (!parts.is_empty()).then(|| parts.join(", "))
            }
            _ => None,
        }
    };

    if let Some(message) = object.get("message").and_then(from_value) {
        return Some(message);
    }

    match object.get("error")? {
        Value::Object(inner) => inner.get("message").and_then(from_value),
        other => from_value(other),
    }
}
