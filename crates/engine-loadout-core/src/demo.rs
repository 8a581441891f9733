//! Demo Mode - Simulated garage of engines for testing
//!
//! Generates engines with random parts and health so the refresh pipeline can be
//! exercised without a real host. Engines can also be spawned without their
//! storage container, which is installed later, as happens right after a
//! vehicle spawns.

use std::collections::BTreeMap;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::loadout::{Component, ComponentSlot, EngineItemType};
use crate::preset::OwnerId;
use crate::refresh::{EngineHost, EngineId, EngineReport};

/// Slot layout used for demo engines
pub const DEMO_LAYOUT: [EngineItemType; 8] = [
    EngineItemType::Crankshaft,
    EngineItemType::Carburetor,
    EngineItemType::SparkPlug,
    EngineItemType::SparkPlug,
    EngineItemType::Piston,
    EngineItemType::Piston,
    EngineItemType::Valve,
    EngineItemType::Valve,
];

/// A simulated engine module
#[derive(Debug, Clone)]
pub struct DemoEngine {
    /// Vehicle owner, `None` for unowned vehicles
    pub owner: Option<OwnerId>,
    /// Health in `[0, 1]`
    pub health_fraction: f32,
    /// `None` until the storage container is created
    pub slots: Option<Vec<ComponentSlot>>,
    /// Last stats written back by the refresh service
    pub applied: Option<EngineReport>,
    /// Number of write-backs received
    pub updates: u32,
}

/// In-memory engine host with randomly generated loadouts
pub struct DemoGarage {
    engines: BTreeMap<EngineId, DemoEngine>,
    next_id: u64,
    rng: StdRng,
}

impl Default for DemoGarage {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoGarage {
    /// Create a garage with an entropy-seeded generator
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_entropy())
    }

    /// Create a garage whose loadouts are reproducible
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    fn from_rng(rng: StdRng) -> Self {
        Self {
            engines: BTreeMap::new(),
            next_id: 1,
            rng,
        }
    }

    /// Spawn an engine with a random loadout and health
    pub fn spawn_engine(&mut self, owner: Option<OwnerId>) -> EngineId {
        let slots = self.random_loadout();
        let health = self.rng.gen_range(0.0..=1.0);
        self.insert(owner, health, Some(slots))
    }

    /// Spawn an engine with explicit contents
    pub fn spawn_with_slots(
        &mut self,
        owner: Option<OwnerId>,
        health_fraction: f32,
        slots: Vec<ComponentSlot>,
    ) -> EngineId {
        self.insert(owner, health_fraction, Some(slots))
    }

    /// Spawn an engine whose storage container does not exist yet
    pub fn spawn_without_storage(&mut self, owner: Option<OwnerId>, health_fraction: f32) -> EngineId {
        self.insert(owner, health_fraction, None)
    }

    /// Create the storage container of an engine; returns false if the engine is unknown
    pub fn install_storage(&mut self, engine: EngineId, slots: Vec<ComponentSlot>) -> bool {
        match self.engines.get_mut(&engine) {
            Some(demo) => {
                demo.slots = Some(slots);
                true
            }
            None => false,
        }
    }

    /// Remove an engine from the garage
    pub fn despawn(&mut self, engine: EngineId) -> Option<DemoEngine> {
        self.engines.remove(&engine)
    }

    /// Get an engine
    pub fn engine(&self, engine: EngineId) -> Option<&DemoEngine> {
        self.engines.get(&engine)
    }

    /// Get an engine mutably
    pub fn engine_mut(&mut self, engine: EngineId) -> Option<&mut DemoEngine> {
        self.engines.get_mut(&engine)
    }

    /// Number of engines in the garage
    pub fn len(&self) -> usize {
        self.engines.len()
    }

    /// Check if the garage is empty
    pub fn is_empty(&self) -> bool {
        self.engines.is_empty()
    }

    fn insert(
        &mut self,
        owner: Option<OwnerId>,
        health_fraction: f32,
        slots: Option<Vec<ComponentSlot>>,
    ) -> EngineId {
        let id = EngineId(self.next_id);
        self.next_id += 1;
        self.engines.insert(
            id,
            DemoEngine {
                owner,
                health_fraction,
                slots,
                applied: None,
                updates: 0,
            },
        );
        id
    }

    /// Random parts for the demo layout: mostly installed, sometimes missing or broken
    fn random_loadout(&mut self) -> Vec<ComponentSlot> {
        DEMO_LAYOUT
            .iter()
            .map(|item_type| {
                let slot = ComponentSlot::for_item_type(*item_type);
                if self.rng.gen_bool(0.2) {
                    return slot;
                }
                let tier = self.rng.gen_range(1..=3);
                let component = if self.rng.gen_bool(0.1) {
                    Component::broken(tier, 1)
                } else {
                    Component::new(tier, 1)
                };
                slot.with_occupant(component)
            })
            .collect()
    }
}

impl EngineHost for DemoGarage {
    fn engine_ids(&self) -> Vec<EngineId> {
        self.engines.keys().copied().collect()
    }

    fn vehicle_owner(&self, engine: EngineId) -> Option<OwnerId> {
        self.engines.get(&engine).and_then(|demo| demo.owner)
    }

    fn health_fraction(&self, engine: EngineId) -> Option<f32> {
        self.engines.get(&engine).map(|demo| demo.health_fraction)
    }

    fn engine_slots(&self, engine: EngineId) -> Option<&[ComponentSlot]> {
        self.engines.get(&engine).and_then(|demo| demo.slots.as_deref())
    }

    fn apply_engine_stats(&mut self, engine: EngineId, report: &EngineReport) {
        if let Some(demo) = self.engines.get_mut(&engine) {
            demo.applied = Some(*report);
            demo.updates += 1;
        }
    }
}
