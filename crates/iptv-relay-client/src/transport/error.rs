//! The single error contract shared by every resource client.
//!
//! Failures are normalized here and nowhere else. Callers either match on
//! [`ApiError`] or render [`ErrorBody`], the `{message, detail?, status?}`
//! object the UI layer consumes.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Message used when the backend sent a structured body with nothing usable.
pub const REQUEST_FAILED: &str = "request failed";

/// Message used when no response was received at all.
pub const NETWORK_ERROR: &str = "network error, cannot reach server";

/// Message used when a request could not be built and the cause was silent.
pub const UNKNOWN_ERROR: &str = "unknown error";

/// Errors from the relay API.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The backend answered with an error status.
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        detail: Option<Value>,
    },

    /// No response was received (refused, reset, timed out).
    #[error("network error, cannot reach server")]
    Network { reason: String },

    /// The outgoing request could not be constructed.
    #[error("{}", or_unknown(.reason))]
    Request { reason: String },

    /// The backend answered with success but the body did not match the expected type.
    #[error("failed to decode response from {path}")]
    Decode {
        path: String,
        status: u16,
        reason: String,
    },
}

impl ApiError {
    /// The user-facing message, as rendered by `Display`.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// HTTP status, when a response was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } | Self::Decode { status, .. } => Some(*status),
            Self::Network { .. } | Self::Request { .. } => None,
        }
    }

    /// Raw `detail` value from the backend body, or the decode failure reason.
    pub fn detail(&self) -> Option<Value> {
        match self {
            Self::Server { detail, .. } => detail.clone(),
            Self::Decode { reason, .. } => Some(Value::String(reason.clone())),
            Self::Network { .. } | Self::Request { .. } => None,
        }
    }

    /// Whether the backend could not be reached at all.
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Normalize into the error object handed to the UI layer.
    pub fn to_body(&self) -> ErrorBody {
        ErrorBody {
            message: self.message(),
            detail: self.detail(),
            status: self.status(),
        }
    }

    /// Classify a transport-level `reqwest` failure.
    ///
    /// Builder failures mean the request never left; everything else
    /// (connect, timeout, body read) means no usable response arrived.
    pub(crate) fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_builder() {
            Self::Request {
                reason: err.to_string(),
            }
        } else {
            Self::Network {
                reason: err.to_string(),
            }
        }
    }
}

/// Normalized error object: `{message, detail?, status?}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
}

/// Turn an error-status response into an [`ApiError::Server`].
///
/// A JSON object body is structured: its `detail`, then `message`, supplies
/// the text. Anything else (empty, plain text, HTML, scalars) only yields
/// `"request failed (<status>)"`.
pub fn normalize_error_response(status: u16, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Object(map)) => {
            let detail = map.get("detail").filter(|v| !v.is_null()).cloned();
            let message = map
                .get("detail")
                .and_then(truthy_text)
                .or_else(|| map.get("message").and_then(truthy_text))
                .unwrap_or_else(|| REQUEST_FAILED.to_string());
            ApiError::Server {
                status,
                message,
                detail,
            }
        }
        Ok(Value::Array(_)) => ApiError::Server {
            status,
            message: REQUEST_FAILED.to_string(),
            detail: None,
        },
        _ => ApiError::Server {
            status,
            message: format!("{REQUEST_FAILED} ({status})"),
            detail: None,
        },
    }
}

fn or_unknown(reason: &str) -> &str {
    if reason.is_empty() {
        UNKNOWN_ERROR
    } else {
        reason
    }
}

/// Render a JSON value as message text, skipping the falsy ones
/// (`null`, `false`, `0`, `""`).
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
