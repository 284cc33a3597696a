//! Shared building blocks for locating Ansys executables.
//!
//! - [`error`]: the error taxonomy used across the workspace
//! - [`config`]: where settings and the executable cache live on disk
//! - [`store`]: the persisted product → executable cache and its legacy migration
//!
//! The cache file is **not** safe for concurrent writers. Every read goes back
//! to disk and every write replaces the whole file, so two processes saving at
//! the same time race and the last one wins.

// Core modules
pub mod config;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use config::SettingsLocations;
pub use error::{AnsysPathError, Result};
pub use store::{ConfigData, ConfigStore};
