//! Engine Stats
//!
//! The three engine stats, baseline stat profiles and the component tier table.

mod profile;
mod tier;

pub use profile::StatProfile;
pub use tier::{tier_value, TIER_1_VALUE, TIER_2_VALUE, TIER_MAX_VALUE};

use serde::{Deserialize, Serialize};
use std::fmt;

/// An engine stat that components and presets can influence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stat {
    /// How quickly the vehicle gains speed
    #[serde(rename = "acceleration")]
    Acceleration,
    /// Maximum speed of the vehicle
    #[serde(rename = "top_speed")]
    TopSpeed,
    /// Fuel consumed per distance travelled
    #[serde(rename = "fuel_economy")]
    FuelEconomy,
}

impl Stat {
    /// Every stat, in write-back order
    pub const ALL: [Stat; 3] = [Stat::Acceleration, Stat::TopSpeed, Stat::FuelEconomy];

    /// Human readable label
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Acceleration => "acceleration",
            Stat::TopSpeed => "top speed",
            Stat::FuelEconomy => "fuel economy",
        }
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
