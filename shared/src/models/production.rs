//! Production report Model
//!
//! Allocation of produced items to waiting orders happens server side.

use serde::{Deserialize, Serialize};

use super::order::Item;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductionReportRequest {
    pub items: Vec<Item>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductionReportResponse {
    /// Orders that moved to `ready` because of this batch
    pub newly_ready_orders: Vec<u32>,
    /// Items no waiting order could take
    pub unallocated_items: Vec<Item>,
}
