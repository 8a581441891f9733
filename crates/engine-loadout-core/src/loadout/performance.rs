//! Performance fractions
//!
//! Blends engine health with loadout boosts into the fractions that drive
//! vehicle behaviour. A healthy engine gets a quarter of its performance from
//! health alone; the remaining three quarters scale with the boost.

use serde::{Deserialize, Serialize};

use super::LoadoutResult;
use crate::stats::Stat;

/// Share of performance contributed by a fully healthy engine
pub const HEALTH_WEIGHT: f32 = 0.25;

/// Share of performance contributed by the boost
pub const BOOST_WEIGHT: f32 = 0.75;

/// Linear interpolation with `t` clamped to `[0, 1]`
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Performance fraction for one stat
///
/// A dead engine (health exactly zero) yields 0 regardless of the boost.
pub fn performance_fraction(health_fraction: f32, boost_percent: f32) -> f32 {
    let boost = if health_fraction != 0.0 {
        boost_percent * BOOST_WEIGHT
    } else {
        0.0
    };
    lerp(0.0, HEALTH_WEIGHT, health_fraction) + boost
}

/// Per-stat performance fractions and their mean
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PerformanceFractions {
    /// Acceleration fraction
    pub acceleration: f32,
    /// Top speed fraction
    pub top_speed: f32,
    /// Fuel economy fraction
    pub fuel_economy: f32,
    /// Mean of the three fractions
    pub overall: f32,
}

impl PerformanceFractions {
    /// Compute fractions for every stat of a loadout using the same health
    pub fn from_loadout(health_fraction: f32, loadout: &LoadoutResult) -> Self {
        let acceleration = performance_fraction(health_fraction, loadout.acceleration_boost_percent);
        let top_speed = performance_fraction(health_fraction, loadout.top_speed_boost_percent);
        let fuel_economy = performance_fraction(health_fraction, loadout.fuel_economy_boost_percent);

        Self {
            acceleration,
            top_speed,
            fuel_economy,
            overall: (acceleration + top_speed + fuel_economy) / 3.0,
        }
    }

    /// Get the fraction for one stat
    pub fn get(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Acceleration => self.acceleration,
            Stat::TopSpeed => self.top_speed,
            Stat::FuelEconomy => self.fuel_economy,
        }
    }
}
