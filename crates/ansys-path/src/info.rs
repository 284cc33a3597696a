use crate::product::Product;
use crate::versions::InstalledVersion;
use std::fmt;
use std::path::{Path, PathBuf};

/// Executable located through discovery.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedInstallation {
    pub path: PathBuf,
    /// Release as a float (`25.1`).
    pub version: f64,
    pub installed: InstalledVersion,
}

impl ResolvedInstallation {
    pub fn new(path: PathBuf, installed: InstalledVersion) -> Self {
        Self {
            path,
            version: installed.as_float(),
            installed,
        }
    }

    pub fn code(&self) -> u32 {
        self.installed.code
    }
}

/// Where a resolved path came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PathSource {
    Cache,
    Discovery,
    Prompt,
}

impl fmt::Display for PathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSource::Cache => write!(f, "config file"),
            PathSource::Discovery => write!(f, "default install location"),
            PathSource::Prompt => write!(f, "user input"),
        }
    }
}

/// Outcome of resolving a product's executable.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Previously saved path.
    Cached(PathBuf),
    /// Found in a conventional install location. Not persisted.
    Discovered(ResolvedInstallation),
    /// Entered by the user and saved.
    Prompted(PathBuf),
    NotFound { product: Product },
}

impl Resolution {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Resolution::Cached(path) | Resolution::Prompted(path) => Some(path),
            Resolution::Discovered(found) => Some(&found.path),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn into_path(self) -> Option<PathBuf> {
        match self {
            Resolution::Cached(path) | Resolution::Prompted(path) => Some(path),
            Resolution::Discovered(found) => Some(found.path),
            Resolution::NotFound { .. } => None,
        }
    }

    pub fn source(&self) -> Option<PathSource> {
        match self {
            Resolution::Cached(_) => Some(PathSource::Cache),
            Resolution::Discovered(_) => Some(PathSource::Discovery),
            Resolution::Prompted(_) => Some(PathSource::Prompt),
            Resolution::NotFound { .. } => None,
        }
    }
}
