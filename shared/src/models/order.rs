//! Order Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::flavor::Flavor;

/// Order status. Transitions are decided by the backend only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum OrderStatus {
    #[default]
    Waiting,
    Cooking,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Waiting,
        OrderStatus::Cooking,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    /// Wire name, as used in the `status` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Waiting => "waiting",
            OrderStatus::Cooking => "cooking",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("invalid order status: '{}'", s))
    }
}

/// Notification channel
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum NotifyChannel {
    Discord,
    Email,
    Line,
}

impl FromStr for NotifyChannel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "discord" => Ok(NotifyChannel::Discord),
            "email" => Ok(NotifyChannel::Email),
            "line" => Ok(NotifyChannel::Line),
            other => Err(format!("invalid notify channel: '{}'", other)),
        }
    }
}

/// Where to notify the customer once the order is ready
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Notify {
    pub channel: NotifyChannel,
    pub target: String,
}

/// Ordered (or produced) quantity of one flavor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub flavor: Flavor,
    pub quantity: u32,
}

impl Item {
    pub fn new(flavor: Flavor, quantity: u32) -> Self {
        Self { flavor, quantity }
    }
}

/// `flavor:quantity`, e.g. `custard:3`
impl FromStr for Item {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (flavor, quantity) = s
            .split_once(':')
            .ok_or_else(|| format!("expected flavor:quantity, got '{}'", s))?;
        let flavor = flavor.parse()?;
        let quantity = quantity
            .trim()
            .parse()
            .map_err(|e| format!("invalid quantity '{}': {}", quantity, e))?;
        Ok(Self { flavor, quantity })
    }
}

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: u32,
    pub items: Vec<Item>,
    pub status: OrderStatus,
    pub ordered_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ready_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_priority: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notify: Option<Notify>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub items: Vec<Item>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_priority: Option<bool>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePriorityRequest {
    pub is_priority: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateNotificationRequest {
    pub channel: NotifyChannel,
    pub target: String,
}
