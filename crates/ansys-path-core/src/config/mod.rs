//! Settings locations
//!
//! The executable cache lives in the per-user data directory:
//!
//! - Windows: `%LOCALAPPDATA%\Ansys\ansys_tools_path\config.txt`
//! - Linux: `~/.local/share/ansys_tools_path/config.txt`
//!
//! Older releases stored the same data elsewhere; those paths are exposed here
//! so the store can migrate them. Setting `ANSYS_TOOLS_PATH_DATA_DIR` replaces
//! the data directory root for every location at once.

pub mod consts;

use crate::error::{AnsysPathError, Result};
use consts::{APP_NAME, CONFIG_FILE_NAME, DATA_DIR_ENV, VENDOR_NAME};
use std::path::{Path, PathBuf};

/// Resolved on-disk locations of the current and legacy caches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsLocations {
    data_root: PathBuf,
    settings_dir: PathBuf,
    vendor_scoped: bool,
}

impl SettingsLocations {
    /// Build locations under `data_root`.
    ///
    /// `vendor_scoped` nests the current settings directory under the vendor
    /// folder, which is what the platform data-dir convention does on Windows.
    pub fn new(data_root: impl Into<PathBuf>, vendor_scoped: bool) -> Self {
        let data_root = data_root.into();
        let settings_dir = if vendor_scoped {
            data_root.join(VENDOR_NAME).join(APP_NAME)
        } else {
            data_root.join(APP_NAME)
        };

        Self {
            data_root,
            settings_dir,
            vendor_scoped,
        }
    }

    /// Locations for the current user, honouring `ANSYS_TOOLS_PATH_DATA_DIR`.
    pub fn from_env() -> Result<Self> {
        let data_root = match std::env::var_os(DATA_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => dirs::data_local_dir().ok_or(AnsysPathError::SettingsDirUnavailable)?,
        };

        Ok(Self::new(data_root, cfg!(windows)))
    }

    pub fn data_root(&self) -> &Path {
        &self.data_root
    }

    pub fn settings_dir(&self) -> &Path {
        &self.settings_dir
    }

    /// The current-format cache file.
    pub fn config_file(&self) -> PathBuf {
        self.settings_dir.join(CONFIG_FILE_NAME)
    }

    /// The JSON cache written before the vendor directory was introduced.
    ///
    /// Outside Windows this is the same file as [`Self::config_file`].
    pub fn legacy_json_file(&self) -> PathBuf {
        self.legacy_app_dir(APP_NAME).join(CONFIG_FILE_NAME)
    }

    /// Per-product plain-text caches as `(cache key, file)` pairs.
    pub fn legacy_text_files(&self) -> Vec<(&'static str, PathBuf)> {
        consts::legacy::TEXT_CONFIG_APPS
            .iter()
            .map(|(key, app)| (*key, self.legacy_app_dir(app).join(CONFIG_FILE_NAME)))
            .collect()
    }

    /// Directory an older release used for `app`.
    ///
    /// Those releases named no vendor, so on Windows the app name was used for
    /// the vendor folder as well: `<root>/<app>/<app>`.
    fn legacy_app_dir(&self, app: &str) -> PathBuf {
        let dir = self.data_root.join(app);
        if self.vendor_scoped { dir.join(app) } else { dir }
    }

    /// Create the settings directory if it is missing.
    pub fn ensure_settings_dir(&self) -> Result<()> {
        if self.settings_dir.is_dir() {
            return Ok(());
        }
        std::fs::create_dir_all(&self.settings_dir)?;
        tracing::debug!("Created settings directory: {}", self.settings_dir.display());
        Ok(())
    }
}
