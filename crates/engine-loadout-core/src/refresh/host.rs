//! Host-side interface to engines
//!
//! The host owns engine entities, their inventories and the fields results are
//! written back to. The refresh service only reads and writes through this trait.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::loadout::{evaluate, ComponentSlot, LoadoutResult, PerformanceFractions};
use crate::preset::OwnerId;
use crate::stats::StatProfile;

/// Host identifier of an engine module
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EngineId(pub u64);

impl fmt::Display for EngineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "engine#{}", self.0)
    }
}

/// Everything written back to an engine after evaluation
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EngineReport {
    /// Boosts and the storage-level usable flag
    pub loadout: LoadoutResult,
    /// Fractions fed to the vehicle's engine behaviour
    pub performance: PerformanceFractions,
    /// Usable flag for the engine module itself
    ///
    /// Always true after evaluation: an engine stays drivable even with an
    /// empty or unusable bay. `loadout.is_usable` only describes the storage.
    pub module_usable: bool,
}

impl EngineReport {
    /// Evaluate a loadout and derive its performance fractions
    pub fn compute(baseline: &StatProfile, slots: &[ComponentSlot], health_fraction: f32) -> Self {
        let loadout = evaluate(baseline, slots);
        Self {
            loadout,
            performance: PerformanceFractions::from_loadout(health_fraction, &loadout),
            module_usable: true,
        }
    }
}

/// Access to the host's engine modules
pub trait EngineHost {
    /// Every engine module currently spawned
    fn engine_ids(&self) -> Vec<EngineId>;

    /// Owner of the vehicle the engine is mounted on.
    ///
    /// `None` when the engine is not mounted or the vehicle has no owner.
    fn vehicle_owner(&self, engine: EngineId) -> Option<OwnerId>;

    /// Engine health in `[0, 1]`, `None` if the engine no longer exists
    fn health_fraction(&self, engine: EngineId) -> Option<f32>;

    /// Engine bay slots, `None` while the storage container does not exist yet
    fn engine_slots(&self, engine: EngineId) -> Option<&[ComponentSlot]>;

    /// Store the evaluated stats on the engine and propagate them
    fn apply_engine_stats(&mut self, engine: EngineId, report: &EngineReport);
}
