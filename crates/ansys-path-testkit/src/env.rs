//! Environment isolation utilities for testing
//!
//! Library entry points that take no explicit settings read the process
//! environment. These helpers point that environment at throwaway directories
//! and serialize the tests that do so.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tempfile::TempDir;

/// Static mutex to serialize tests that modify environment variables
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

const DATA_DIR_ENV: &str = "ANSYS_TOOLS_PATH_DATA_DIR";
const BASE_DIRS_ENV: &str = "ANSYS_TOOLS_PATH_BASE_DIRS";
const AWP_ROOT_PREFIX: &str = "AWP_ROOT";

/// Directories handed to an isolated test.
#[derive(Debug)]
pub struct IsolatedEnv {
    data_dir: PathBuf,
    base_dir: PathBuf,
}

impl IsolatedEnv {
    /// Root that settings and the executable cache are resolved under.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// The only conventional install base searched on Linux. Exists and is empty.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }
}

/// Restores the saved variables even if the test closure panics.
struct Restore {
    saved: Vec<(OsString, Option<OsString>)>,
}

impl Drop for Restore {
    fn drop(&mut self) {
        // SAFETY: the caller still holds ENV_LOCK while this guard drops.
        unsafe {
            for (key, value) in self.saved.drain(..) {
                match value {
                    Some(value) => std::env::set_var(&key, value),
                    None => std::env::remove_var(&key),
                }
            }
        }
    }
}

/// Run a test with isolated settings and discovery environment
///
/// 1. Points `ANSYS_TOOLS_PATH_DATA_DIR` at a fresh data directory
/// 2. Points `ANSYS_TOOLS_PATH_BASE_DIRS` at a fresh, empty install base
/// 3. Removes every `AWP_ROOT*` variable
/// 4. Holds [`ENV_LOCK`] for the duration of the closure
///
/// # Examples
///
/// ```no_run
/// use ansys_path_testkit::{with_isolated_settings_env, InstallTree};
///
/// with_isolated_settings_env(|env| {
///     let tree = InstallTree::new(env.base_dir());
///     tree.add_mapdl(251);
///     // discovery now sees exactly one MAPDL 25.1 install
/// });
/// ```
pub fn with_isolated_settings_env<F, R>(f: F) -> R
where
    F: FnOnce(&IsolatedEnv) -> R,
{
    let _guard = ENV_LOCK.lock().unwrap_or_else(|poisoned| {
        // Only serializes access; the environment is restored by `Restore`.
        poisoned.into_inner()
    });

    let root = TempDir::new().expect("Failed to create isolated root");
    let data_dir = root.path().join("data");
    let base_dir = root.path().join("ansys_inc");
    std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");
    std::fs::create_dir_all(&base_dir).expect("Failed to create install base");

    let mut keys: Vec<OsString> = vec![DATA_DIR_ENV.into(), BASE_DIRS_ENV.into()];
    keys.extend(
        std::env::vars_os()
            .map(|(key, _)| key)
            .filter(|key| key.to_string_lossy().starts_with(AWP_ROOT_PREFIX)),
    );
    let restore = Restore {
        saved: keys
            .into_iter()
            .map(|key| {
                let value = std::env::var_os(&key);
                (key, value)
            })
            .collect(),
    };

    // SAFETY: We hold ENV_LOCK, ensuring no other test is modifying env vars concurrently.
    unsafe {
        for (key, _) in &restore.saved {
            std::env::remove_var(key);
        }
        std::env::set_var(DATA_DIR_ENV, &data_dir);
        std::env::set_var(BASE_DIRS_ENV, &base_dir);
    }

    let env = IsolatedEnv { data_dir, base_dir };
    f(&env)
}
