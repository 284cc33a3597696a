//! Snapshot of the process environment consulted by discovery.
//!
//! Discovery never reads environment variables directly. Everything it
//! needs is captured here once, so tests can describe a Windows machine on
//! a Linux host and the other way around.

use crate::Result;
use crate::platform::{Platform, detect_platform};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

/// Standard Linux install roots, probed in order.
pub const LINUX_DEFAULT_DIRS: [&str; 3] = ["/usr/ansys_inc", "/ansys_inc", "/install/ansys_inc"];

/// Overrides [`LINUX_DEFAULT_DIRS`]. Uses the platform path-list separator.
pub const BASE_DIRS_ENV: &str = "ANSYS_TOOLS_PATH_BASE_DIRS";

/// Per-release install root variables on Windows (`AWP_ROOT251`, ...).
pub const AWP_ROOT_PREFIX: &str = "AWP_ROOT";

/// Vendor folder under Program Files.
pub const WINDOWS_VENDOR_DIR: &str = "ANSYS Inc";

#[derive(Debug, Clone)]
pub struct DiscoveryEnv {
    platform: Platform,
    linux_base_dirs: Vec<PathBuf>,
    program_files: Option<PathBuf>,
    awp_roots: HashMap<u32, String>,
}

impl DiscoveryEnv {
    /// Empty environment for `platform` with the default Linux roots.
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            linux_base_dirs: LINUX_DEFAULT_DIRS.iter().map(PathBuf::from).collect(),
            program_files: None,
            awp_roots: HashMap::new(),
        }
    }

    /// Captures the current process environment.
    pub fn from_system() -> Result<Self> {
        let mut snapshot = Self::new(detect_platform()?);

        if let Some(dirs) = env::var_os(BASE_DIRS_ENV).filter(|v| !v.is_empty()) {
            snapshot.linux_base_dirs = env::split_paths(&dirs).collect();
        }

        snapshot.program_files = env::var_os("PROGRAMFILES")
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);

        for (key, value) in env::vars_os() {
            let (Some(key), Some(value)) = (key.to_str(), value.to_str()) else {
                continue;
            };
            if let Some(code) = key
                .strip_prefix(AWP_ROOT_PREFIX)
                .and_then(|suffix| suffix.parse::<u32>().ok())
            {
                snapshot.awp_roots.insert(code, value.to_string());
            }
        }

        tracing::debug!(
            platform = %snapshot.platform,
            awp_roots = snapshot.awp_roots.len(),
            "captured discovery environment"
        );
        Ok(snapshot)
    }

    pub fn with_linux_base_dirs<I, P>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.linux_base_dirs = dirs.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_program_files(mut self, dir: impl Into<PathBuf>) -> Self {
        self.program_files = Some(dir.into());
        self
    }

    pub fn with_awp_root(mut self, code: u32, value: impl Into<String>) -> Self {
        self.awp_roots.insert(code, value.into());
        self
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn linux_base_dirs(&self) -> &[PathBuf] {
        &self.linux_base_dirs
    }

    pub fn program_files(&self) -> Option<&Path> {
        self.program_files.as_deref()
    }

    /// Value of `AWP_ROOT<code>`, if set.
    pub fn awp_root(&self, code: u32) -> Option<&str> {
        self.awp_roots.get(&code).map(String::as_str)
    }
}
