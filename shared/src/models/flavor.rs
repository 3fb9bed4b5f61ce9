//! Flavor Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// The three taiyaki fillings on the menu
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Flavor {
    Tsubuan,
    Custard,
    Kurikinton,
}

impl Flavor {
    pub const ALL: [Flavor; 3] = [Flavor::Tsubuan, Flavor::Custard, Flavor::Kurikinton];

    pub fn as_str(&self) -> &'static str {
        match self {
            Flavor::Tsubuan => "tsubuan",
            Flavor::Custard => "custard",
            Flavor::Kurikinton => "kurikinton",
        }
    }
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Flavor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|flavor| flavor.as_str() == s.trim())
            .ok_or_else(|| format!("invalid flavor: '{}'", s))
    }
}

/// Per-flavor cooking parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FlavorConfig {
    pub cooking_time_minutes: u32,
    pub quantity_per_batch: u32,
}

/// Response of `GET /api/staff/flavors/config`
pub type FlavorConfigs = BTreeMap<Flavor, FlavorConfig>;
