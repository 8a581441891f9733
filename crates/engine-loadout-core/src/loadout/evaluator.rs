use serde::{Deserialize, Serialize};

use super::ComponentSlot;
use crate::stats::{tier_value, Stat, StatProfile};

/// Aggregated boosts of one engine loadout
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LoadoutResult {
    /// Mean acceleration boost over acceleration slots
    pub acceleration_boost_percent: f32,
    /// Mean top speed boost over top speed slots
    pub top_speed_boost_percent: f32,
    /// Mean fuel economy boost over fuel economy slots
    pub fuel_economy_boost_percent: f32,
    /// True when every boost is strictly positive
    pub is_usable: bool,
}

impl LoadoutResult {
    /// Get the boost for one stat
    pub fn boost(&self, stat: Stat) -> f32 {
        match stat {
            Stat::Acceleration => self.acceleration_boost_percent,
            Stat::TopSpeed => self.top_speed_boost_percent,
            Stat::FuelEconomy => self.fuel_economy_boost_percent,
        }
    }
}

/// Running sum and slot count for one stat
#[derive(Debug, Default, Clone, Copy)]
struct StatAccumulator {
    sum: f32,
    slots: u32,
}

impl StatAccumulator {
    fn add(&mut self, value: f32) {
        self.sum += value;
        self.slots += 1;
    }

    /// Mean contribution; a stat no slot contributes to averages to zero
    fn average(&self, stat: Stat) -> f32 {
        if self.slots == 0 {
            tracing::debug!(%stat, "no slot contributes to stat, boost is zero");
            return 0.0;
        }
        self.sum / self.slots as f32
    }
}

/// Evaluate a loadout against a baseline profile
///
/// Each stat's boost is the mean, over the slots carrying that capability, of
/// `max(item value, baseline stat)`. Empty and broken slots count as the baseline.
///
/// # Arguments
/// * `baseline` - Floor profile from preset resolution
/// * `slots` - Engine bay contents in slot order
/// * `tier_value_of` - Tier to multiplier lookup
pub fn evaluate_loadout<F>(
    baseline: &StatProfile,
    slots: &[ComponentSlot],
    tier_value_of: F,
) -> LoadoutResult
where
    F: Fn(u32) -> f32,
{
    let mut totals = [StatAccumulator::default(); 3];

    for slot in slots {
        let item_value = slot.item_value(&tier_value_of);

        for (stat, total) in Stat::ALL.iter().zip(totals.iter_mut()) {
            if slot.capabilities.contains(*stat) {
                total.add(item_value.max(baseline.get(*stat)));
            }
        }
    }

    let [acceleration, top_speed, fuel_economy] = totals;
    let acceleration_boost_percent = acceleration.average(Stat::Acceleration);
    let top_speed_boost_percent = top_speed.average(Stat::TopSpeed);
    let fuel_economy_boost_percent = fuel_economy.average(Stat::FuelEconomy);

    LoadoutResult {
        acceleration_boost_percent,
        top_speed_boost_percent,
        fuel_economy_boost_percent,
        is_usable: acceleration_boost_percent > 0.0
            && top_speed_boost_percent > 0.0
            && fuel_economy_boost_percent > 0.0,
    }
}

/// Evaluate a loadout with the standard tier table
pub fn evaluate(baseline: &StatProfile, slots: &[ComponentSlot]) -> LoadoutResult {
    evaluate_loadout(baseline, slots, tier_value)
}
