//! Client error types
//!
//! Request failures never surface here: they are captured in
//! [`shared::ApiResponse`]. These errors cover building the client and
//! mirroring state into durable storage.

use thiserror::Error;

use crate::storage::StorageError;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP client could not be constructed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Persisting or removing session state failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
