//! Taiyaki staff client - HTTP client for the staff order panel
//!
//! Provides the bearer-token HTTP client, the staff session and typed
//! wrappers for the order, flavor, stock and production endpoints.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod storage;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::SessionManager;
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

// Re-export shared types for convenience
pub use shared::{ApiError, ApiResponse};
