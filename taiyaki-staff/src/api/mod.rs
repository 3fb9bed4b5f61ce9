//! Resource clients
//!
//! Thin, borrowed wrappers over [`HttpClient`](crate::HttpClient), one per
//! backend resource group. Each operation is a single request with a fixed
//! path and method; the envelope is returned as is.

pub mod flavors;
pub mod orders;
pub mod production;
pub mod stock;

pub use flavors::FlavorsApi;
pub use orders::OrdersApi;
pub use production::ProductionApi;
pub use stock::StockApi;
