//! Owners, preset permission keys and grant checks
//!
//! Presets are gated by permissions of the form `engineloadout.preset.<name>`.
//! Hosts answer grant queries through [`GrantCheck`]; [`PermissionStore`] is an
//! in-memory implementation used by the demo garage, the CLI and tests.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::fmt;

use super::GrantError;

/// Prefix shared by every preset permission
pub const PRESET_PERMISSION_PREFIX: &str = "engineloadout.preset";

/// Build the permission key that gates a preset
pub fn preset_permission(preset_name: &str) -> String {
    format!("{}.{}", PRESET_PERMISSION_PREFIX, preset_name)
}

/// Identifier of a vehicle owner. Never zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OwnerId(u64);

impl OwnerId {
    /// Wrap a raw owner id; zero is the "no owner" sentinel and yields `None`
    pub fn from_raw(raw: u64) -> Option<Self> {
        (raw != 0).then_some(Self(raw))
    }

    /// Raw numeric id
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for OwnerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Answers whether an owner holds a permission
pub trait GrantCheck {
    /// Check a single permission. Errors mean the backing store could not answer.
    fn has_grant(&self, owner: OwnerId, permission: &str) -> Result<bool, GrantError>;
}

impl<F> GrantCheck for F
where
    F: Fn(OwnerId, &str) -> Result<bool, GrantError>,
{
    fn has_grant(&self, owner: OwnerId, permission: &str) -> Result<bool, GrantError> {
        self(owner, permission)
    }
}

/// In-memory permission registry and grant table
#[derive(Debug, Clone, Default)]
pub struct PermissionStore {
    /// Permissions known to the store
    registered: BTreeSet<String>,
    /// Grants held by each owner
    grants: HashMap<OwnerId, HashSet<String>>,
}

impl PermissionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a permission so it can be granted
    pub fn register(&mut self, permission: impl Into<String>) {
        self.registered.insert(permission.into());
    }

    /// Register several permissions at once
    pub fn register_all<I, S>(&mut self, permissions: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for permission in permissions {
            self.register(permission);
        }
    }

    /// Check whether a permission has been registered
    pub fn is_registered(&self, permission: &str) -> bool {
        self.registered.contains(permission)
    }

    /// Registered permissions in sorted order
    pub fn registered(&self) -> impl Iterator<Item = &str> {
        self.registered.iter().map(String::as_str)
    }

    /// Grant a registered permission to an owner
    pub fn grant(&mut self, owner: OwnerId, permission: &str) -> Result<(), GrantError> {
        if !self.is_registered(permission) {
            return Err(GrantError::UnknownPermission(permission.to_string()));
        }
        self.grants
            .entry(owner)
            .or_default()
            .insert(permission.to_string());
        Ok(())
    }

    /// Revoke a permission; returns whether the owner held it
    pub fn revoke(&mut self, owner: OwnerId, permission: &str) -> bool {
        self.grants
            .get_mut(&owner)
            .map(|held| held.remove(permission))
            .unwrap_or(false)
    }
}

impl GrantCheck for PermissionStore {
    fn has_grant(&self, owner: OwnerId, permission: &str) -> Result<bool, GrantError> {
        // Unregistered permissions are never held
        if !self.is_registered(permission) {
            return Ok(false);
        }
        Ok(self
            .grants
            .get(&owner)
            .is_some_and(|held| held.contains(permission)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owner(raw: u64) -> OwnerId {
        OwnerId::from_raw(raw).unwrap()
    }

    #[test]
    fn test_zero_is_not_an_owner() {
        assert_eq!(OwnerId::from_raw(0), None);
        assert_eq!(OwnerId::from_raw(42).map(|o| o.get()), Some(42));
    }

    #[test]
    fn test_preset_permission_key() {
        assert_eq!(preset_permission("tier3"), "engineloadout.preset.tier3");
    }

    #[test]
    fn test_grant_requires_registration() {
        let mut store = PermissionStore::new();
        let err = store.grant(owner(1), "engineloadout.preset.tier1").unwrap_err();
        assert_eq!(
            err,
            GrantError::UnknownPermission("engineloadout.preset.tier1".to_string())
        );

        store.register("engineloadout.preset.tier1");
        store.grant(owner(1), "engineloadout.preset.tier1").unwrap();
        assert!(store.has_grant(owner(1), "engineloadout.preset.tier1").unwrap());
        assert!(!store.has_grant(owner(2), "engineloadout.preset.tier1").unwrap());
    }

    #[test]
    fn test_revoke() {
        let mut store = PermissionStore::new();
        store.register("perm");
        store.grant(owner(5), "perm").unwrap();

        assert!(store.revoke(owner(5), "perm"));
        assert!(!store.revoke(owner(5), "perm"));
        assert!(!store.has_grant(owner(5), "perm").unwrap());
    }
}
