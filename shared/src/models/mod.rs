//! Data models
//!
//! Mirrors of the order backend's JSON. Field names are camelCase on the wire.

pub mod display;
pub mod flavor;
pub mod order;
pub mod production;
pub mod stock;

// Re-exports
pub use display::*;
pub use flavor::*;
pub use order::*;
pub use production::*;
pub use stock::*;
