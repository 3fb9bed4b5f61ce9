//! Stock Model

use serde::{Deserialize, Serialize};

use super::flavor::Flavor;

/// Baked items not yet allocated to an order
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StockData {
    pub tsubuan: u32,
    pub custard: u32,
    pub kurikinton: u32,
}

impl StockData {
    pub fn get(&self, flavor: Flavor) -> u32 {
        match flavor {
            Flavor::Tsubuan => self.tsubuan,
            Flavor::Custard => self.custard,
            Flavor::Kurikinton => self.kurikinton,
        }
    }
}
