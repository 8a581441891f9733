//! # Engine Loadout Core Library
//!
//! Performance modifiers for modular vehicle engines.

#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//!
//! This library provides:
//! - Baseline stat presets gated by owner permissions
//! - Engine loadout evaluation (acceleration, top speed and fuel economy boosts)
//! - Performance fractions blending engine health with boosts
//! - JSON configuration with migration of outdated files
//! - A refresh service with override hooks and next-tick evaluation
//! - JSON engine snapshots for evaluating a single engine offline
//!
//! ## Example
//!
//! ```rust
//! use engine_loadout_core::prelude::*;
//!
//! let config = Configuration::default();
//! let grants = PermissionStore::new();
//!
//! // Unowned vehicles always get the default profile
//! let baseline = config.resolve_baseline(None, &grants).unwrap();
//!
//! let slots = vec![
//!     ComponentSlot::for_item_type(EngineItemType::Piston).with_occupant(Component::new(2, 1)),
//!     ComponentSlot::for_item_type(EngineItemType::Valve),
//! ];
//! let report = EngineReport::compute(baseline, &slots, 1.0);
//! assert!(report.loadout.is_usable);
//! ```

pub mod config;
pub mod demo;
pub mod loadout;
pub mod preset;
pub mod refresh;
pub mod snapshot;
pub mod stats;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::{ConfigError, Configuration, LoadedConfiguration};
    pub use crate::demo::DemoGarage;
    pub use crate::loadout::{
        evaluate, evaluate_loadout, performance_fraction, Capabilities, Component, ComponentSlot,
        EngineItemType, LoadoutResult, PerformanceFractions,
    };
    pub use crate::preset::{
        preset_permission, resolve_baseline, GrantCheck, GrantError, OwnerId, PermissionStore,
    };
    pub use crate::refresh::{
        EngineHost, EngineId, EngineReport, EngineStatsService, OverrideDecision, OverrideHook,
        RefreshOutcome,
    };
    pub use crate::snapshot::{EngineSnapshot, SlotSnapshot, SnapshotEvaluation};
    pub use crate::stats::{tier_value, Stat, StatProfile};
}

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
