//! Configuration migration
//!
//! Brings a configuration file written by an older release up to date by merging
//! in keys that exist in the current defaults but not in the file. Values already
//! present are kept, arrays are never merged into.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A report of keys added or replaced while migrating a configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ConfigMigrationReport {
    /// Dotted paths of keys missing from the file and filled from defaults
    pub added_keys: Vec<String>,

    /// Dotted paths whose value was not an object where the defaults expect one
    pub replaced_keys: Vec<String>,
}

impl ConfigMigrationReport {
    /// Check if the migration changed anything
    pub fn has_changes(&self) -> bool {
        !self.added_keys.is_empty() || !self.replaced_keys.is_empty()
    }

    /// Get a summary of the changes
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        if !self.added_keys.is_empty() {
            parts.push(format!("{} added keys", self.added_keys.len()));
        }
        if !self.replaced_keys.is_empty() {
            parts.push(format!("{} replaced keys", self.replaced_keys.len()));
        }

        if parts.is_empty() {
            "No changes detected".to_string()
        } else {
            parts.join(", ")
        }
    }
}

/// Merge keys from `defaults` that are missing in `current`
pub fn merge_missing_keys(
    defaults: &Map<String, Value>,
    current: &mut Map<String, Value>,
) -> ConfigMigrationReport {
    let mut report = ConfigMigrationReport::default();
    merge_into(defaults, current, "", &mut report);
    report
}

fn merge_into(
    defaults: &Map<String, Value>,
    current: &mut Map<String, Value>,
    prefix: &str,
    report: &mut ConfigMigrationReport,
) {
    for (key, default_value) in defaults {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };

        match current.get_mut(key) {
            Some(current_value) => {
                let Value::Object(default_map) = default_value else {
                    continue;
                };
                match current_value {
                    Value::Object(current_map) => {
                        merge_into(default_map, current_map, &path, report)
                    }
                    _ => {
                        *current_value = default_value.clone();
                        report.replaced_keys.push(path);
                    }
                }
            }
            None => {
                current.insert(key.clone(), default_value.clone());
                report.added_keys.push(path);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => panic!("Expected object"),
        }
    }

    #[test]
    fn test_up_to_date_config_unchanged() {
        let defaults = object(json!({ "a": 1, "b": { "c": 2 } }));
        let mut current = object(json!({ "a": 5, "b": { "c": 7 } }));

        let report = merge_missing_keys(&defaults, &mut current);
        assert!(!report.has_changes());
        assert_eq!(report.summary(), "No changes detected");
        assert_eq!(Value::Object(current), json!({ "a": 5, "b": { "c": 7 } }));
    }

    #[test]
    fn test_nested_missing_key_added() {
        let defaults = object(json!({ "b": { "c": 2, "d": 3 } }));
        let mut current = object(json!({ "b": { "c": 7 } }));

        let report = merge_missing_keys(&defaults, &mut current);
        assert_eq!(report.added_keys, vec!["b.d".to_string()]);
        assert_eq!(Value::Object(current), json!({ "b": { "c": 7, "d": 3 } }));
    }

    #[test]
    fn test_non_object_replaced_by_default_object() {
        let defaults = object(json!({ "b": { "c": 2 } }));
        let mut current = object(json!({ "b": 4 }));

        let report = merge_missing_keys(&defaults, &mut current);
        assert_eq!(report.replaced_keys, vec!["b".to_string()]);
        assert_eq!(report.summary(), "1 replaced keys");
        assert_eq!(Value::Object(current), json!({ "b": { "c": 2 } }));
    }

    #[test]
    fn test_arrays_and_nulls_left_alone() {
        let defaults = object(json!({ "list": [1, 2, 3], "scalar": 1 }));
        let mut current = object(json!({ "list": [], "scalar": null }));

        let report = merge_missing_keys(&defaults, &mut current);
        assert!(!report.has_changes());
        assert_eq!(Value::Object(current), json!({ "list": [], "scalar": null }));
    }
}
