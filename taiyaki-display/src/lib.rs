//! Taiyaki display client - fetchers for the public screens
//!
//! Unauthenticated fetchers used by the order-status board and the customer
//! wait-time screen. Unlike the staff client these return `Err` on failure;
//! a missing base URL is reported as a configuration error before any
//! request is made.

pub mod config;
pub mod display;
pub mod error;
mod fetch;
pub mod wait_time;

pub use config::{BASE_URL_ENV, base_url_from_env, resolve_base_url};
pub use display::DisplayBoard;
pub use error::{DisplayError, DisplayResult};
pub use wait_time::WaitTimeBoard;
