//! Locating Ansys product executables.
//!
//! Finds MAPDL, Mechanical, LS-DYNA and the Mechanical Kernel in standard
//! install locations, validates user-supplied locations, and remembers the
//! chosen executable per product in a small cache file.
//!
//! # Architecture
//!
//! - [`enumerate`]: installed releases from `AWP_ROOT*` variables or install bases
//! - [`find`]: picking a release and building the executable path
//! - [`validate`]: file name and layout checks
//! - [`extract`]: reading the release out of an executable path
//! - [`resolve`]: cache, discovery and prompting combined
//! - [`api`]: free functions over the current user's environment
//!
//! # Resolution Flow
//!
//! ```text
//! get_mapdl_path()
//!     ↓
//! 1. Cached path (version must match when one is requested)
//!     ↓ (miss)
//! 2. Conventional install location
//!     → Linux: /usr/ansys_inc, /ansys_inc, /install/ansys_inc
//!     → Windows: AWP_ROOT<code>, then Program Files/ANSYS Inc
//!     ↓ (not found)
//! 3. Prompt until a valid executable is entered, then save it
//!     ↓ (no prompt)
//! 4. None, with a warning
//! ```
//!
//! # Examples
//!
//! ```no_run
//! use ansys_path::{PathResolver, Product, ResolveOptions, VersionRequest};
//!
//! # fn main() -> ansys_path::Result<()> {
//! let mut resolver = PathResolver::from_system()?.without_prompt();
//! let options = ResolveOptions {
//!     allow_input: false,
//!     version: Some(VersionRequest::Float(25.1)),
//!     find: true,
//! };
//!
//! if let Some(path) = resolver.get_path(Product::Mapdl, &options)? {
//!     println!("MAPDL 25.1: {}", path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod advisory;
pub mod api;
pub mod enumerate;
pub mod env;
pub mod extract;
pub mod find;
pub mod info;
pub mod platform;
pub mod product;
pub mod prompt;
pub mod resolve;
pub mod validate;
pub mod versions;

pub use ansys_path_core::{AnsysPathError, Result};

pub use advisory::{Advisory, AdvisorySink, CollectingSink, TracingSink};
#[allow(deprecated)]
pub use api::{
    change_default_amk_path, change_default_ansys_path, change_default_dyna_path,
    change_default_mapdl_path, change_default_mechanical_path, clear_configuration, find_amk,
    find_ansys, find_dyna, find_mapdl, find_mechanical, get_amk_path, get_ansys_path,
    get_available_installations, get_dyna_path, get_latest_installation, get_mapdl_path,
    get_mechanical_path, get_saved_application_path, save_amk_path, save_ansys_path,
    save_dyna_path, save_mapdl_path, save_mechanical_path, settings_dir, version_from_path,
};
pub use env::DiscoveryEnv;
pub use info::{PathSource, Resolution, ResolvedInstallation};
pub use platform::{Platform, detect_platform};
pub use product::{Product, ProductDescriptor, ProductRegistry};
pub use prompt::{PathPrompt, PromptRequest, StdinPrompt};
pub use resolve::{ClearTarget, PathResolver, ResolveOptions};
pub use versions::{
    InstallVariant, InstalledVersion, InstalledVersionMap, SupportedVersions, VersionRequest,
};
