//! Shared error response body for all API modules.

use serde::Serialize;

/// JSON error body returned by every failing endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Stable machine-readable error code.
    pub code: String,

    /// Human-readable cause.
    pub message: String,
}

impl ErrorResponse {
    /// Creates an error response from a code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
