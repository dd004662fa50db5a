use serde_yaml::{Mapping, Value};
use std::fs;
use std::path::Path;

use crate::errors::{AppError, AppResult};

/// Keys every configuration file is expected to carry, dotted for nesting.
pub const EXPECTED_KEYS: [&str; 4] = [
    "database",
    "preferences.page_size",
    "preferences.sort.column",
    "preferences.sort.direction",
];

fn lookup<'a>(map: &'a Mapping, dotted: &str) -> Option<&'a Value> {
    let mut parts = dotted.split('.');
    let first = parts.next()?;
    let mut current = map.get(first)?;
    for part in parts {
        current = current.as_mapping()?.get(part)?;
    }
    Some(current)
}

/// Keys from [`EXPECTED_KEYS`] absent from the YAML text.
pub fn missing_keys(content: &str) -> AppResult<Vec<&'static str>> {
    let yaml: Value =
        serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
    let empty = Mapping::new();
    let map = yaml.as_mapping().unwrap_or(&empty);

    Ok(EXPECTED_KEYS
        .iter()
        .copied()
        .filter(|k| lookup(map, k).is_none())
        .collect())
}

pub fn check_file(path: &Path) -> AppResult<Vec<&'static str>> {
    let content = fs::read_to_string(path)?;
    missing_keys(&content)
}
