//! Configuration
//!
//! The default engine stats plus the permission-gated presets, stored as JSON.
//!
//! ## File Format
//!
//! ```text
//! {
//!   "DefaultEngineStats": { "Acceleration": 0.3, "TopSpeed": 0.3, "FuelEconomy": 0.3 },
//!   "EngineStatsRequiringPermission": [
//!     { "Name": "tier1", "Acceleration": 0.6, "TopSpeed": 0.6, "FuelEconomy": 0.6 },
//!     ...
//!   ]
//! }
//! ```
//!
//! Presets must be declared weakest first; see [`crate::preset::resolve_baseline`].

mod error;
mod migration;

pub use error::ConfigError;
pub use migration::{merge_missing_keys, ConfigMigrationReport};

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::preset::{preset_permission, resolve_baseline, GrantCheck, GrantError, OwnerId};
use crate::stats::StatProfile;

/// Engine stats configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Configuration {
    /// Baseline for unowned vehicles and owners without a preset grant
    #[serde(rename = "DefaultEngineStats")]
    pub default_engine_stats: StatProfile,

    /// Presets in ascending strength; `null` in the file means no presets
    #[serde(rename = "EngineStatsRequiringPermission", default)]
    pub engine_stats_requiring_permission: Option<Vec<StatProfile>>,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            default_engine_stats: StatProfile::new(0.3, 0.3, 0.3),
            engine_stats_requiring_permission: Some(vec![
                StatProfile::uniform("tier1", 0.6),
                StatProfile::uniform("tier2", 0.8),
                StatProfile::uniform("tier3", 1.0),
                StatProfile::uniform("tier4", 2.0),
                StatProfile::uniform("tier5", 3.0),
                StatProfile::uniform("tier6", 4.0),
            ]),
        }
    }
}

/// A configuration read from disk, with the migration applied to it
#[derive(Debug, Clone)]
pub struct LoadedConfiguration {
    /// The configuration after missing keys were filled in
    pub config: Configuration,
    /// Keys added while migrating the file
    pub migration: ConfigMigrationReport,
}

impl LoadedConfiguration {
    /// True when keys were merged in and the file should be rewritten
    pub fn is_outdated(&self) -> bool {
        self.migration.has_changes()
    }
}

impl Configuration {
    /// Get the default configuration file location
    pub fn default_path() -> io::Result<PathBuf> {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                io::Error::new(io::ErrorKind::NotFound, "Could not find config directory")
            })?;
        Ok(base.join("engine-loadout").join("config.json"))
    }

    /// Presets in declaration order (empty when the list is absent)
    pub fn presets(&self) -> &[StatProfile] {
        self.engine_stats_requiring_permission
            .as_deref()
            .unwrap_or(&[])
    }

    /// Permission keys of every preset with a usable name, in declaration order
    pub fn preset_permissions(&self) -> Vec<String> {
        self.presets()
            .iter()
            .filter_map(StatProfile::preset_name)
            .map(preset_permission)
            .collect()
    }

    /// Select the baseline profile for an owner
    pub fn resolve_baseline<G>(
        &self,
        owner: Option<OwnerId>,
        grants: &G,
    ) -> Result<&StatProfile, GrantError>
    where
        G: GrantCheck + ?Sized,
    {
        resolve_baseline(owner, self.presets(), grants, &self.default_engine_stats)
    }

    /// Parse configuration JSON, merging in keys missing from older files
    pub fn from_json_str(content: &str) -> Result<LoadedConfiguration, ConfigError> {
        let mut raw: Value = serde_json::from_str(content)?;
        let Value::Object(current) = &mut raw else {
            return Err(ConfigError::NotAnObject);
        };

        let Value::Object(defaults) = serde_json::to_value(Configuration::default())? else {
            return Err(ConfigError::NotAnObject);
        };
        let migration = merge_missing_keys(&defaults, current);

        let config = serde_json::from_value(raw)?;
        Ok(LoadedConfiguration { config, migration })
    }

    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<LoadedConfiguration, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Load configuration, falling back to defaults
    ///
    /// - Missing file: defaults are written to `path`
    /// - Invalid file: defaults are used and the file is left untouched
    /// - Outdated file: missing keys are merged in and the file is rewritten
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();

        if !path.exists() {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!(path = %path.display(), "Failed to write default configuration: {e}");
            }
            return config;
        }

        match Self::load(path) {
            Ok(loaded) => {
                if loaded.is_outdated() {
                    tracing::warn!(
                        path = %path.display(),
                        changes = %loaded.migration.summary(),
                        "Configuration appears to be outdated; updating and saving"
                    );
                    if let Err(e) = loaded.config.save(path) {
                        tracing::warn!(path = %path.display(), "Failed to save configuration: {e}");
                    }
                }
                loaded.config
            }
            Err(e) => {
                tracing::warn!(
                    path = %path.display(),
                    "Configuration file is invalid; using defaults: {e}"
                );
                Self::default()
            }
        }
    }

    /// Save configuration as pretty-printed JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!(path = %path.display(), "Configuration changes saved");
        Ok(())
    }
}
