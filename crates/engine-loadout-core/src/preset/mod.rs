//! Preset Resolution
//!
//! Picks the baseline stat profile for a vehicle owner from permission-gated presets.

mod error;
mod permission;
mod resolver;

pub use error::GrantError;
pub use permission::{
    preset_permission, GrantCheck, OwnerId, PermissionStore, PRESET_PERMISSION_PREFIX,
};
pub use resolver::resolve_baseline;
