use super::Config;
use crate::errors::{AppError, AppResult};
use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

/// Every key a current config file is expected to carry.
pub const KNOWN_FIELDS: [&str; 5] = [
    "database",
    "default_activity",
    "trend_days",
    "separator_char",
    "show_weekday",
];

fn read_mapping(path: &Path) -> AppResult<Mapping> {
    let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
    let yaml: Value = serde_yaml::from_str(&content)
        .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

    match yaml {
        Value::Mapping(m) => Ok(m),
        Value::Null => Ok(Mapping::new()),
        _ => Err(AppError::Config(format!(
            "{}: top level must be a mapping",
            path.display()
        ))),
    }
}

/// Keys from [`KNOWN_FIELDS`] absent in the file at `path`.
pub fn missing_fields(path: &Path) -> AppResult<Vec<&'static str>> {
    let map = read_mapping(path)?;
    Ok(KNOWN_FIELDS
        .iter()
        .copied()
        .filter(|k| !map.contains_key(*k))
        .collect())
}

/// Write the missing keys back with their default values.
///
/// Existing values are kept untouched. Returns the keys that were added.
pub fn migrate_config_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let missing = missing_fields(path)?;
    if missing.is_empty() {
        return Ok(missing);
    }

    // serde defaults fill the gaps, values already in the file stay
    let cfg = Config::load_from(path)?;
    let defaults = serde_yaml::to_value(&cfg).map_err(|_| AppError::ConfigSave)?;

    let mut map = read_mapping(path)?;
    if let Value::Mapping(full) = defaults {
        for key in &missing {
            if let Some(v) = full.get(*key) {
                map.insert(Value::String(key.to_string()), v.clone());
            }
        }
    }

    let yaml = serde_yaml::to_string(&Value::Mapping(map)).map_err(|_| AppError::ConfigSave)?;
    fs::write(path, yaml).map_err(|_| AppError::ConfigSave)?;

    Ok(missing)
}
