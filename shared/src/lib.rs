//! Shared types for the taiyaki order clients
//!
//! Data-transfer shapes mirroring the order backend's JSON, plus the
//! response envelope returned by every staff panel request.

pub mod models;
pub mod response;

// Re-exports
pub use response::{ApiError, ApiResponse};
pub use serde::{Deserialize, Serialize};
