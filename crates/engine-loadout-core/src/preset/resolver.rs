//! Baseline preset resolution
//!
//! Presets are scanned from the last declared to the first, and the first one the
//! owner holds a grant for wins. Configurations declare presets in ascending
//! strength, so the reverse scan always picks the strongest granted preset.
//! Do not change the scan order: existing configurations rely on it.

use super::{preset_permission, GrantCheck, GrantError, OwnerId};
use crate::stats::StatProfile;

/// Select the baseline profile for an owner
///
/// # Arguments
/// * `owner` - Vehicle owner, `None` for unowned vehicles
/// * `presets` - Named presets in declaration order
/// * `grants` - Grant lookup for preset permissions
/// * `default_profile` - Profile used when nothing matches
///
/// # Errors
/// Propagates any [`GrantError`] from the grant lookup.
pub fn resolve_baseline<'a, G>(
    owner: Option<OwnerId>,
    presets: &'a [StatProfile],
    grants: &G,
    default_profile: &'a StatProfile,
) -> Result<&'a StatProfile, GrantError>
where
    G: GrantCheck + ?Sized,
{
    let Some(owner) = owner else {
        return Ok(default_profile);
    };

    for preset in presets.iter().rev() {
        let Some(name) = preset.preset_name() else {
            continue;
        };
        if grants.has_grant(owner, &preset_permission(name))? {
            return Ok(preset);
        }
    }

    Ok(default_profile)
}
