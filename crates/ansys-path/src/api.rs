//! Free functions over the current user's cache and this machine.
//!
//! Each call captures the environment afresh and reads the cache from disk.
//! Prompts, where allowed, go to stdin.

use crate::Result;
use crate::env::DiscoveryEnv;
use crate::extract;
use crate::find;
use crate::info::ResolvedInstallation;
use crate::product::Product;
use crate::resolve::{ClearTarget, PathResolver, ResolveOptions};
use crate::versions::{InstalledVersion, InstalledVersionMap, SupportedVersions, VersionRequest};
use ansys_path_core::SettingsLocations;
use std::path::{Path, PathBuf};

pub fn find_installation(
    product: Product,
    version: Option<VersionRequest>,
    supported: Option<&SupportedVersions>,
) -> Result<Option<ResolvedInstallation>> {
    let supported = supported.cloned().unwrap_or_default();
    find::find_installation(product, &DiscoveryEnv::from_system()?, version, &supported)
}

pub fn get_path(
    product: Product,
    allow_input: bool,
    version: Option<VersionRequest>,
    find: bool,
) -> Result<Option<PathBuf>> {
    let options = ResolveOptions {
        allow_input,
        version,
        find,
    };
    PathResolver::from_system()?.get_path(product, &options)
}

pub fn save_path(product: Product, path: Option<&Path>, allow_prompt: bool) -> Result<PathBuf> {
    PathResolver::from_system()?.save_path(product, path, allow_prompt)
}

pub fn change_default_path(product: Product, path: &Path) -> Result<()> {
    PathResolver::from_system()?.change_default_path(product, path)
}

macro_rules! product_functions {
    ($product:expr, $label:literal, $find:ident, $get:ident, $save:ident, $change:ident) => {
        #[doc = concat!("Conventional ", $label, " executable of the requested or newest install.")]
        pub fn $find(
            version: Option<VersionRequest>,
            supported: Option<&SupportedVersions>,
        ) -> Result<Option<ResolvedInstallation>> {
            find_installation($product, version, supported)
        }

        #[doc = concat!("Cached, discovered or entered ", $label, " executable.")]
        pub fn $get(
            allow_input: bool,
            version: Option<VersionRequest>,
            find: bool,
        ) -> Result<Option<PathBuf>> {
            get_path($product, allow_input, version, find)
        }

        #[doc = concat!("Saves a ", $label, " executable, discovering or asking when `path` is absent.")]
        pub fn $save(path: Option<&Path>, allow_prompt: bool) -> Result<PathBuf> {
            save_path($product, path, allow_prompt)
        }

        pub fn $change(path: &Path) -> Result<()> {
            change_default_path($product, path)
        }
    };
}

product_functions!(
    Product::Mapdl,
    "MAPDL",
    find_mapdl,
    get_mapdl_path,
    save_mapdl_path,
    change_default_mapdl_path
);
product_functions!(
    Product::Mechanical,
    "Mechanical",
    find_mechanical,
    get_mechanical_path,
    save_mechanical_path,
    change_default_mechanical_path
);
product_functions!(
    Product::Dyna,
    "LS-DYNA",
    find_dyna,
    get_dyna_path,
    save_dyna_path,
    change_default_dyna_path
);
product_functions!(
    Product::Amk,
    "Mechanical Kernel",
    find_amk,
    get_amk_path,
    save_amk_path,
    change_default_amk_path
);

#[deprecated(note = "use `find_mapdl`")]
pub fn find_ansys(
    version: Option<VersionRequest>,
    supported: Option<&SupportedVersions>,
) -> Result<Option<ResolvedInstallation>> {
    find_mapdl(version, supported)
}

#[deprecated(note = "use `get_mapdl_path`")]
pub fn get_ansys_path(
    allow_input: bool,
    version: Option<VersionRequest>,
    find: bool,
) -> Result<Option<PathBuf>> {
    get_mapdl_path(allow_input, version, find)
}

#[deprecated(note = "use `save_mapdl_path`")]
pub fn save_ansys_path(path: Option<&Path>, allow_prompt: bool) -> Result<PathBuf> {
    save_mapdl_path(path, allow_prompt)
}

#[deprecated(note = "use `change_default_mapdl_path`")]
pub fn change_default_ansys_path(path: &Path) -> Result<()> {
    change_default_mapdl_path(path)
}

pub fn clear_configuration(target: ClearTarget) -> Result<()> {
    PathResolver::from_system()?.clear_configuration(target)
}

/// Version code of an executable path. `product` is a product identifier
/// such as `"mapdl"`.
pub fn version_from_path(product: &str, path: impl AsRef<Path>) -> Result<u32> {
    extract::version_from_path(product.parse()?, path.as_ref())
}

pub fn get_available_installations(
    supported: Option<&SupportedVersions>,
) -> Result<InstalledVersionMap> {
    let supported = supported.cloned().unwrap_or_default();
    Ok(find::get_available_installations(
        &DiscoveryEnv::from_system()?,
        &supported,
    ))
}

pub fn get_latest_installation() -> Result<(InstalledVersion, PathBuf)> {
    find::get_latest_installation(&DiscoveryEnv::from_system()?, &SupportedVersions::default())
}

/// Raw cache entry for `product`, without discovery or validation.
pub fn get_saved_application_path(product: &str) -> Result<Option<PathBuf>> {
    PathResolver::from_system()?.saved_path(product.parse()?)
}

/// Directory holding the executable cache.
pub fn settings_dir() -> Result<PathBuf> {
    Ok(SettingsLocations::from_env()?.settings_dir().to_path_buf())
}
