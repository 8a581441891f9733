//! Engine snapshots
//!
//! A JSON description of a single engine taken outside any host: the vehicle
//! owner, engine health, the presets the owner holds and the bay contents.

use serde::{Deserialize, Serialize};

use crate::config::Configuration;
use crate::loadout::{Component, ComponentSlot, EngineItemType};
use crate::preset::{preset_permission, GrantError, OwnerId, PermissionStore};
use crate::refresh::EngineReport;
use crate::stats::StatProfile;

/// One engine as read from a snapshot file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    /// Vehicle owner, 0 or absent for unowned vehicles
    #[serde(default)]
    pub owner: u64,
    /// Engine health in `[0, 1]`
    pub health: f32,
    /// Preset names the owner has been granted
    #[serde(default)]
    pub grants: Vec<String>,
    /// Bay contents in slot order
    pub slots: Vec<SlotSnapshot>,
}

/// One bay slot, identified by the part type it accepts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SlotSnapshot {
    /// Part type the slot accepts
    pub item_type: EngineItemType,
    /// Installed component, if any
    #[serde(default)]
    pub occupant: Option<Component>,
}

impl SlotSnapshot {
    /// Build the evaluator's slot from the part type's capabilities
    pub fn to_slot(&self) -> ComponentSlot {
        let empty = ComponentSlot::for_item_type(self.item_type);
        match self.occupant {
            Some(component) => empty.with_occupant(component),
            None => empty,
        }
    }
}

/// Result of evaluating a snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotEvaluation {
    /// Name of the preset used as baseline, `None` for the default profile
    pub preset: Option<String>,
    /// The resolved baseline
    pub baseline: StatProfile,
    /// Stats that would be written back to the engine
    pub report: EngineReport,
}

impl EngineSnapshot {
    /// Parse a snapshot from JSON
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    /// Owner of the vehicle, `None` when unowned
    pub fn owner(&self) -> Option<OwnerId> {
        OwnerId::from_raw(self.owner)
    }

    /// Evaluator slots in bay order
    pub fn component_slots(&self) -> Vec<ComponentSlot> {
        self.slots.iter().map(SlotSnapshot::to_slot).collect()
    }

    /// Grant the snapshot's presets to its owner.
    ///
    /// Unowned snapshots grant nothing. Fails on a preset the store does not
    /// know about.
    pub fn grant_presets(&self, store: &mut PermissionStore) -> Result<(), GrantError> {
        let Some(owner) = self.owner() else {
            return Ok(());
        };
        for preset in &self.grants {
            store.grant(owner, &preset_permission(preset))?;
        }
        Ok(())
    }

    /// Resolve the baseline against `config` and evaluate the bay
    pub fn evaluate(&self, config: &Configuration) -> Result<SnapshotEvaluation, GrantError> {
        let mut store = PermissionStore::new();
        store.register_all(config.preset_permissions());
        self.grant_presets(&mut store)?;

        let baseline = config.resolve_baseline(self.owner(), &store)?;
        tracing::debug!(
            owner = self.owner,
            preset = baseline.preset_name().unwrap_or("default"),
            "Snapshot baseline resolved"
        );

        Ok(SnapshotEvaluation {
            preset: baseline.preset_name().map(str::to_string),
            baseline: baseline.clone(),
            report: EngineReport::compute(baseline, &self.component_slots(), self.health),
        })
    }
}
