//! Baseline stat profiles
//!
//! A profile is the floor an engine falls back to when no installed component
//! outperforms it. Profiles come from configuration and are never mutated.

use serde::{Deserialize, Serialize};

use super::Stat;

/// A named (or unnamed default) acceleration / top speed / fuel economy triple
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatProfile {
    /// Preset identifier; `None` for the default profile
    #[serde(rename = "Name", default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Acceleration boost floor
    #[serde(rename = "Acceleration", default)]
    pub acceleration: f32,

    /// Top speed boost floor
    #[serde(rename = "TopSpeed", default)]
    pub top_speed: f32,

    /// Fuel economy boost floor
    #[serde(rename = "FuelEconomy", default)]
    pub fuel_economy: f32,
}

impl StatProfile {
    /// Create an unnamed profile
    pub fn new(acceleration: f32, top_speed: f32, fuel_economy: f32) -> Self {
        Self {
            name: None,
            acceleration,
            top_speed,
            fuel_economy,
        }
    }

    /// Create a named preset
    pub fn named(
        name: impl Into<String>,
        acceleration: f32,
        top_speed: f32,
        fuel_economy: f32,
    ) -> Self {
        Self {
            name: Some(name.into()),
            acceleration,
            top_speed,
            fuel_economy,
        }
    }

    /// Create a named preset with the same value for every stat
    pub fn uniform(name: impl Into<String>, value: f32) -> Self {
        Self::named(name, value, value, value)
    }

    /// Get the baseline value for one stat
    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Acceleration => self.acceleration,
            Stat::TopSpeed => self.top_speed,
            Stat::FuelEconomy => self.fuel_economy,
        }
    }

    /// Preset name usable for permission lookup.
    ///
    /// Returns `None` when the name is absent, empty or whitespace only.
    pub fn preset_name(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
    }
}
