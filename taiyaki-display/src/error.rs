//! Display error types

use thiserror::Error;

/// Display fetcher error type
#[derive(Debug, Error)]
pub enum DisplayError {
    /// No base URL was configured
    #[error("{0} is not defined in environment variables")]
    Configuration(String),

    /// Server answered with a non-success status
    #[error("{context}: {status_text}")]
    Fetch {
        context: String,
        status: u16,
        status_text: String,
    },

    /// Request could not be sent or the body could not be decoded
    #[error("Request error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl DisplayError {
    /// HTTP status of a [`DisplayError::Fetch`]
    pub fn status(&self) -> Option<u16> {
        match self {
            DisplayError::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_configuration(&self) -> bool {
        matches!(self, DisplayError::Configuration(_))
    }
}

/// Result type for display fetchers
pub type DisplayResult<T> = Result<T, DisplayError>;
