//! Listing installed releases.
//!
//! Windows asks the `AWP_ROOT<code>` variables first and falls back to
//! scanning Program Files. Linux scans the first conventional base that
//! exists. A base directory is scanned like this:
//!
//! ```text
//! <base>/v251                     -> 251 (standard)
//! <base>/ANSYS Student/v251       -> 251 (student)
//! ```

use crate::env::{DiscoveryEnv, WINDOWS_VENDOR_DIR};
use crate::platform::Platform;
use crate::versions::{InstalledVersion, InstalledVersionMap, SupportedVersions};
use std::path::{Component, Path, PathBuf};

/// Folder holding student installs inside a Windows install base.
pub const STUDENT_FOLDER: &str = "ANSYS Student";

/// Every installation discoverable through `env`. Missing bases give an empty map.
pub fn enumerate_installations(
    env: &DiscoveryEnv,
    supported: &SupportedVersions,
) -> InstalledVersionMap {
    match env.platform() {
        Platform::Windows => {
            let installed = installed_windows_versions(env, supported);
            if !installed.is_empty() {
                return installed;
            }
            tracing::debug!("no AWP_ROOT installs, scanning Program Files");
            default_windows_base_path(env)
                .map(|base| expand_base_path(&base))
                .unwrap_or_default()
        }
        Platform::Linux => default_linux_base_path(env)
            .map(|base| expand_base_path(&base))
            .unwrap_or_default(),
    }
}

/// First conventional Linux base directory that exists.
pub fn default_linux_base_path(env: &DiscoveryEnv) -> Option<PathBuf> {
    let found = env.linux_base_dirs().iter().find(|dir| dir.is_dir()).cloned();
    if found.is_none() {
        tracing::debug!(dirs = ?env.linux_base_dirs(), "no Linux install base found");
    }
    found
}

/// `<Program Files>/ANSYS Inc`, if it exists.
pub fn default_windows_base_path(env: &DiscoveryEnv) -> Option<PathBuf> {
    let Some(program_files) = env.program_files() else {
        tracing::debug!("PROGRAMFILES is not set");
        return None;
    };
    let base = program_files.join(WINDOWS_VENDOR_DIR);
    if base.is_dir() {
        Some(base)
    } else {
        tracing::debug!(path = %base.display(), "Windows install base does not exist");
        None
    }
}

fn installed_windows_versions(
    env: &DiscoveryEnv,
    supported: &SupportedVersions,
) -> InstalledVersionMap {
    let mut standard = Vec::new();
    let mut student = Vec::new();

    for code in supported.codes() {
        let Some(root) = env.awp_root(code).filter(|root| !root.is_empty()) else {
            continue;
        };
        let root_path = PathBuf::from(root);

        if root.to_lowercase().contains("student") {
            let without_student = strip_student_folder(&root_path);
            if without_student.exists() {
                standard.push((InstalledVersion::standard(code), without_student));
            }
            student.push((InstalledVersion::student(code), root_path));
        } else {
            standard.push((InstalledVersion::standard(code), root_path));
        }
    }

    standard
        .into_iter()
        .chain(student)
        .filter(|(_, path)| path.is_dir())
        .collect()
}

/// Drops the `ANSYS Student` component, leaving the matching standard root.
fn strip_student_folder(path: &Path) -> PathBuf {
    path.components()
        .filter(|component| {
            !matches!(component, Component::Normal(name)
                if name.to_str().is_some_and(|n| n.eq_ignore_ascii_case(STUDENT_FOLDER)))
        })
        .collect()
}

/// Version folders under `base`, including those under `ANSYS*` subfolders.
pub fn expand_base_path(base: &Path) -> InstalledVersionMap {
    let mut installed = InstalledVersionMap::new();

    for (name, path) in sorted_subdirs(base) {
        if let Some(code) = version_folder_code(&name) {
            installed.insert(InstalledVersion::standard(code), path);
        }
    }

    for (name, dir) in sorted_subdirs(base) {
        if !name.starts_with("ANSYS") {
            continue;
        }
        for (name, path) in sorted_subdirs(&dir) {
            if let Some(code) = version_folder_code(&name) {
                installed.insert(InstalledVersion::student(code), path);
            }
        }
    }

    tracing::debug!(base = %base.display(), found = ?installed.signed_codes(), "scanned install base");
    installed
}

/// `v251` -> 251. The folder must start with `v` and end in three digits.
fn version_folder_code(name: &str) -> Option<u32> {
    if !name.starts_with('v') || name.len() < 4 {
        return None;
    }
    let tail = name.get(name.len() - 3..)?;
    if tail.bytes().all(|b| b.is_ascii_digit()) {
        tail.parse().ok()
    } else {
        None
    }
}

fn sorted_subdirs(dir: &Path) -> Vec<(String, PathBuf)> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut dirs: Vec<(String, PathBuf)> = entries
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .filter_map(|path| {
            let name = path.file_name()?.to_str()?.to_string();
            Some((name, path))
        })
        .collect();
    dirs.sort();
    dirs
}
