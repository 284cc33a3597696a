//! Persisted executable cache
//!
//! A flat JSON object mapping product identifiers to executable paths:
//!
//! ```json
//! { "mapdl": "/usr/ansys_inc/v251/ansys/bin/ansys251" }
//! ```
//!
//! There is no in-memory copy. [`ConfigStore::read`] goes to disk on every call
//! (running the legacy migration first when the file does not exist yet) and
//! [`ConfigStore::write`] replaces the whole file. Nothing is locked: concurrent
//! writers race and the last one wins.

mod migrate;

pub use migrate::migrate;

use crate::config::SettingsLocations;
use crate::error::{AnsysPathError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Product identifier → executable path.
pub type ConfigData = BTreeMap<String, String>;

/// File-backed executable cache.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    locations: SettingsLocations,
}

impl ConfigStore {
    pub fn new(locations: SettingsLocations) -> Self {
        Self { locations }
    }

    /// Store at the current user's default location.
    pub fn from_env() -> Result<Self> {
        Ok(Self::new(SettingsLocations::from_env()?))
    }

    pub fn locations(&self) -> &SettingsLocations {
        &self.locations
    }

    /// Path of the current-format cache file.
    pub fn path(&self) -> PathBuf {
        self.locations.config_file()
    }

    /// Read the cache, migrating legacy data first if the file is missing.
    ///
    /// A missing or blank file reads as an empty mapping.
    pub fn read(&self) -> Result<ConfigData> {
        let path = self.path();
        if !path.is_file() {
            migrate(&self.locations)?;
        }
        if !path.is_file() {
            return Ok(ConfigData::new());
        }

        let content = std::fs::read_to_string(&path).map_err(|e| {
            AnsysPathError::ConfigReadError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        parse_config(&content).map_err(|e| {
            AnsysPathError::ConfigReadError(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Replace the cache file with `data`.
    pub fn write(&self, data: &ConfigData) -> Result<()> {
        let path = self.path();
        let content = serde_json::to_string_pretty(data).map_err(|e| {
            AnsysPathError::ConfigWriteError(format!("Failed to serialize: {}", e))
        })?;
        write_replacing(&content, &path)
    }

    pub fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read()?.remove(key))
    }

    /// Set one entry, keeping every other entry as read from disk.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut data = self.read()?;
        data.insert(key.to_string(), value.to_string());
        self.write(&data)
    }

    /// Remove one entry. The file is only rewritten when the key was present.
    pub fn remove(&self, key: &str) -> Result<bool> {
        let mut data = self.read()?;
        if data.remove(key).is_none() {
            return Ok(false);
        }
        self.write(&data)?;
        Ok(true)
    }

    /// Replace the cache with an empty mapping. The file keeps existing.
    pub fn clear(&self) -> Result<()> {
        // Reading first lets a pending migration run and clean up legacy files.
        self.read()?;
        self.write(&ConfigData::new())
    }
}

/// Parse cache content. Blank content is an empty mapping.
pub(crate) fn parse_config(content: &str) -> serde_json::Result<ConfigData> {
    if content.trim().is_empty() {
        return Ok(ConfigData::new());
    }
    serde_json::from_str(content)
}

/// Write `content` to `path` through a temp file in the same directory.
///
/// The file is always rewritten in full. This does not serialize writers.
fn write_replacing(content: &str, path: &Path) -> Result<()> {
    use std::io::Write;
    use tempfile::NamedTempFile;

    let parent = path.parent().ok_or_else(|| {
        AnsysPathError::ConfigWriteError("Config path has no parent directory".to_string())
    })?;
    std::fs::create_dir_all(parent).map_err(|e| {
        AnsysPathError::ConfigWriteError(format!("Failed to create parent dir: {}", e))
    })?;

    let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| {
        AnsysPathError::ConfigWriteError(format!("Failed to create temp file: {}", e))
    })?;

    temp_file.write_all(content.as_bytes()).map_err(|e| {
        AnsysPathError::ConfigWriteError(format!("Failed to write temp file: {}", e))
    })?;

    temp_file.as_file().sync_all().map_err(|e| {
        AnsysPathError::ConfigWriteError(format!("Failed to sync temp file: {}", e))
    })?;

    temp_file.persist(path).map_err(|e| {
        AnsysPathError::ConfigWriteError(format!("Failed to persist temp file: {}", e))
    })?;

    tracing::debug!("Wrote executable cache {}", path.display());
    Ok(())
}
