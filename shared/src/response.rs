//! API Response types
//!
//! Envelope returned by every staff panel request. A request never fails
//! with `Err`; instead the outcome is captured here:
//!
//! ```json
//! { "data": { ... } }
//! { "error": { "message": "Not Found", "status": 404 } }
//! ```
//!
//! A `204 No Content` reply carries neither field.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Status reserved for failures where no HTTP response was obtained.
pub const TRANSPORT_FAILURE_STATUS: u16 = 0;

/// Fallback message when a transport failure has no description.
pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Error half of the envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[error("{message} (status {status})")]
pub struct ApiError {
    /// Response body text, `HTTP <status>` or the transport error text
    pub message: String,
    /// HTTP status, or `0` when the request never got a response
    pub status: u16,
}

impl ApiError {
    pub fn new(message: impl Into<String>, status: u16) -> Self {
        Self {
            message: message.into(),
            status,
        }
    }

    /// Error for a non-success HTTP reply. An empty body becomes `HTTP <status>`.
    pub fn from_status(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let message = if body.is_empty() {
            format!("HTTP {}", status)
        } else {
            body
        };
        Self::new(message, status)
    }

    /// Error for a request that produced no usable HTTP response.
    pub fn transport(message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.is_empty() {
            NETWORK_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        Self::new(message, TRANSPORT_FAILURE_STATUS)
    }

    pub fn is_transport(&self) -> bool {
        self.status == TRANSPORT_FAILURE_STATUS
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status == 401
    }
}

/// Request outcome: `data` on success, `error` on failure, neither on 204.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl<T> ApiResponse<T> {
    /// Create a successful response
    pub fn ok(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
        }
    }

    /// Successful response without a body (HTTP 204)
    pub fn no_content() -> Self {
        Self {
            data: None,
            error: None,
        }
    }

    /// Create an error response
    pub fn error(error: ApiError) -> Self {
        Self {
            data: None,
            error: Some(error),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }

    pub fn is_err(&self) -> bool {
        self.error.is_some()
    }

    /// Status of the error, if any
    pub fn status(&self) -> Option<u16> {
        self.error.as_ref().map(|e| e.status)
    }

    /// Convert into a `Result`; `Ok(None)` means the reply had no content.
    pub fn into_result(self) -> Result<Option<T>, ApiError> {
        match self.error {
            Some(error) => Err(error),
            None => Ok(self.data),
        }
    }

    /// Transform the payload, keeping the error untouched
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            data: self.data.map(f),
            error: self.error,
        }
    }
}

impl<T> From<ApiError> for ApiResponse<T> {
    fn from(error: ApiError) -> Self {
        Self::error(error)
    }
}
