//! Non-fatal conditions reported while resolving paths.
//!
//! Advisories never abort an operation. By default they are logged as
//! warnings; embedders and tests can collect them instead.

use crate::product::Product;
use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// A valid executable outside the standard install layout.
    UncommonPath {
        product: Product,
        path: PathBuf,
        pattern_path: &'static str,
    },
    /// Nothing was cached, discovered or entered.
    NotFound { product: Product },
    /// The settings directory could not be created. Saving will fail.
    SettingsDirUnwritable { dir: PathBuf, reason: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::UncommonPath {
                product,
                path,
                pattern_path,
            } => write!(
                f,
                "The supplied path ('{}') does not match the usual {} executable path style \
                 ('directory/{}'). You might have problems at later use.",
                path.display(),
                product.display_name(),
                pattern_path
            ),
            Advisory::NotFound { product } => {
                write!(f, "No path found for {} in default locations.", product)
            }
            Advisory::SettingsDirUnwritable { dir, reason } => write!(
                f,
                "Unable to create settings directory {} ({}). Will be unable to cache product \
                 executable locations.",
                dir.display(),
                reason
            ),
        }
    }
}

pub trait AdvisorySink {
    fn emit(&self, advisory: Advisory);
}

/// Logs every advisory at warn level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl AdvisorySink for TracingSink {
    fn emit(&self, advisory: Advisory) {
        tracing::warn!("{}", advisory);
    }
}

/// Keeps advisories in memory. Clones share the same buffer.
#[derive(Debug, Default, Clone)]
pub struct CollectingSink {
    advisories: Arc<Mutex<Vec<Advisory>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advisories(&self) -> Vec<Advisory> {
        self.lock().clone()
    }

    pub fn take(&self) -> Vec<Advisory> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Advisory>> {
        self.advisories
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl AdvisorySink for CollectingSink {
    fn emit(&self, advisory: Advisory) {
        tracing::debug!(%advisory, "advisory collected");
        self.lock().push(advisory);
    }
}
