//! One-time migration of legacy cache files.
//!
//! Strategies are tried newest format first. The first one with any existing
//! file produces the new cache; afterwards every legacy file that existed, for
//! every strategy, is removed.

use super::{parse_config, write_replacing, ConfigData};
use crate::config::SettingsLocations;
use crate::error::{AnsysPathError, Result};
use std::path::{Path, PathBuf};

#[derive(Debug)]
enum Strategy {
    /// A JSON cache from before the vendor directory was introduced.
    LegacyJson(PathBuf),
    /// One plain-text file per product, holding only the raw path.
    PerProductText(Vec<(&'static str, PathBuf)>),
}

impl Strategy {
    fn files(&self) -> Vec<&Path> {
        match self {
            Strategy::LegacyJson(path) => vec![path.as_path()],
            Strategy::PerProductText(files) => files.iter().map(|(_, p)| p.as_path()).collect(),
        }
    }

    fn has_existing_file(&self) -> bool {
        self.files().iter().any(|p| p.exists())
    }

    fn load(&self) -> Result<ConfigData> {
        match self {
            Strategy::LegacyJson(path) => {
                let content = read_legacy(path)?;
                Ok(parse_config(&content).unwrap_or_else(|e| {
                    tracing::warn!(
                        "Ignoring unreadable legacy config {}: {}",
                        path.display(),
                        e
                    );
                    ConfigData::new()
                }))
            }
            Strategy::PerProductText(files) => {
                let mut data = ConfigData::new();
                for (key, path) in files {
                    if !path.is_file() {
                        continue;
                    }
                    let content = read_legacy(path)?;
                    let exe_path = content.trim_end_matches(['\r', '\n']);
                    data.insert(key.to_string(), exe_path.to_string());
                }
                Ok(data)
            }
        }
    }
}

fn read_legacy(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|e| {
        AnsysPathError::ConfigReadError(format!(
            "Failed to read legacy config {}: {}",
            path.display(),
            e
        ))
    })
}

fn strategies(locations: &SettingsLocations) -> Vec<Strategy> {
    vec![
        Strategy::LegacyJson(locations.legacy_json_file()),
        Strategy::PerProductText(locations.legacy_text_files()),
    ]
}

/// Migrate legacy caches into the current file.
///
/// Returns `Ok(true)` when a migration ran. Existing current-format data is
/// never consulted here; the store only calls this when that file is missing.
pub fn migrate(locations: &SettingsLocations) -> Result<bool> {
    let current = locations.config_file();
    let existing: Vec<Strategy> = strategies(locations)
        .into_iter()
        .filter(|s| s.has_existing_file())
        .collect();

    let Some(winner) = existing.first() else {
        return Ok(false);
    };

    let data = winner.load()?;
    tracing::debug!("Migrating legacy config {:?} into {}", winner, current.display());
    write_replacing(&serde_json::to_string_pretty(&data)?, &current)?;

    for strategy in &existing {
        for path in strategy.files() {
            // Outside Windows the legacy JSON file and the current file coincide.
            if path == current || !path.exists() {
                continue;
            }
            std::fs::remove_file(path)?;
            tracing::debug!("Removed legacy config {}", path.display());
        }
    }

    Ok(true)
}
