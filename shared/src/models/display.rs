//! Public display and wait-time shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::flavor::Flavor;
use super::order::{Item, OrderStatus};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayOrder {
    pub id: u32,
}

/// Response of `GET /api/orders/display`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayResponse {
    pub ready: Vec<DisplayOrder>,
    pub cooking: Vec<DisplayOrder>,
    pub waiting: Vec<DisplayOrder>,
}

/// Response of `GET /api/orders/{id}`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderDetails {
    pub id: u32,
    pub status: OrderStatus,
    /// Only known while the order is waiting
    #[serde(default)]
    pub estimated_wait_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordered_at: Option<DateTime<Utc>>,
}

/// Estimated wait per flavor in minutes; `None` when unknown
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WaitTimes {
    #[serde(default)]
    pub tsubuan: Option<i64>,
    #[serde(default)]
    pub custard: Option<i64>,
    #[serde(default)]
    pub kurikinton: Option<i64>,
}

impl WaitTimes {
    pub fn get(&self, flavor: Flavor) -> Option<i64> {
        match flavor {
            Flavor::Tsubuan => self.tsubuan,
            Flavor::Custard => self.custard,
            Flavor::Kurikinton => self.kurikinton,
        }
    }
}

/// Response of `GET /api/wait-times`
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct WaitTimesResponse {
    pub wait_times: WaitTimes,
}
