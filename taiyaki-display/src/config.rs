//! Base URL resolution

use crate::error::{DisplayError, DisplayResult};

/// Environment variable naming the backend base URL
pub const BASE_URL_ENV: &str = "TAIYAKI_API_BASE_URL";

/// Validate a configured base URL and strip trailing slashes.
pub fn resolve_base_url(value: Option<&str>) -> DisplayResult<String> {
    match value {
        Some(url) if !url.is_empty() => Ok(url.trim_end_matches('/').to_string()),
        _ => Err(DisplayError::Configuration(BASE_URL_ENV.to_string())),
    }
}

/// Base URL from the runtime environment, falling back to the value baked
/// in at build time.
pub fn base_url_from_env() -> DisplayResult<String> {
    let runtime = std::env::var(BASE_URL_ENV).ok().filter(|v| !v.is_empty());
    resolve_base_url(runtime.as_deref().or(option_env!("TAIYAKI_API_BASE_URL")))
}
