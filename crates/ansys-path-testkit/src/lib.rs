//! Test utilities for ansys-path
//!
//! This crate provides shared testing utilities used across the ansys-path workspace.

pub mod env;
pub mod fixtures;

pub use env::{ENV_LOCK, IsolatedEnv, with_isolated_settings_env};
pub use fixtures::{InstallLayout, InstallTree, touch};

use tempfile::TempDir;

/// Creates a temporary directory within `.tmp/` at the current directory
///
/// This keeps test files in a single, gitignored location that is easy to
/// clean up by hand. The directory is removed when the returned `TempDir`
/// is dropped.
///
/// # Panics
///
/// Panics if the current directory cannot be determined or `.tmp/` cannot be
/// created.
///
/// # Examples
///
/// ```rust
/// use ansys_path_testkit::temp_dir_in_workspace;
///
/// let temp = temp_dir_in_workspace();
/// let file_path = temp.path().join("test.txt");
/// std::fs::write(&file_path, "test data").unwrap();
/// ```
pub fn temp_dir_in_workspace() -> TempDir {
    try_temp_dir_in_workspace().expect("Failed to create temporary directory in .tmp/")
}

/// Alternative with Result for non-test code
pub fn try_temp_dir_in_workspace() -> std::io::Result<TempDir> {
    let workspace_root = std::env::current_dir()?;
    let tmp_base = workspace_root.join(".tmp");
    std::fs::create_dir_all(&tmp_base)?;
    TempDir::new_in(&tmp_base)
}
