//! Picking an installation and locating a product's executable in it.

use crate::Result;
use crate::env::DiscoveryEnv;
use crate::enumerate::enumerate_installations;
use crate::info::ResolvedInstallation;
use crate::product::{Product, ProductRegistry};
use crate::versions::{InstalledVersion, InstalledVersionMap, SupportedVersions, VersionRequest};
use ansys_path_core::AnsysPathError;
use std::path::PathBuf;

/// Install base for `requested`, or for the newest install when `None`.
///
/// Returns `Ok(None)` when nothing is installed.
///
/// # Errors
///
/// [`AnsysPathError::VersionNotFound`] when installs exist but none matches
/// the request.
pub fn resolve_base(
    env: &DiscoveryEnv,
    requested: Option<VersionRequest>,
    supported: &SupportedVersions,
) -> Result<Option<(InstalledVersion, PathBuf)>> {
    let installed = enumerate_installations(env, supported);
    if installed.is_empty() {
        tracing::debug!("no Ansys installations found");
        return Ok(None);
    }

    match requested {
        None => Ok(installed
            .latest()
            .map(|(version, path)| (version, path.clone()))),
        Some(request) => {
            let wanted = request.to_installed();
            match installed.get(&wanted) {
                Some(path) => Ok(Some((wanted, path.clone()))),
                None => Err(AnsysPathError::VersionNotFound {
                    requested: wanted.signed(),
                    available: installed.signed_codes(),
                }),
            }
        }
    }
}

/// Conventional executable location of `product` in the selected install.
///
/// The returned path is not checked for existence.
pub fn find_installation(
    product: Product,
    env: &DiscoveryEnv,
    requested: Option<VersionRequest>,
    supported: &SupportedVersions,
) -> Result<Option<ResolvedInstallation>> {
    let Some((installed, base)) = resolve_base(env, requested, supported)? else {
        return Ok(None);
    };

    let registry = ProductRegistry::new(env.platform());
    let path = registry
        .descriptor(product)
        .executable_in(&base, installed.code);
    tracing::debug!(%product, version = %installed, path = %path.display(), "located executable");
    Ok(Some(ResolvedInstallation::new(path, installed)))
}

pub fn get_available_installations(
    env: &DiscoveryEnv,
    supported: &SupportedVersions,
) -> InstalledVersionMap {
    enumerate_installations(env, supported)
}

/// Newest install, standard edition preferred on ties.
///
/// # Errors
///
/// [`AnsysPathError::NoInstallation`] when nothing is installed.
pub fn get_latest_installation(
    env: &DiscoveryEnv,
    supported: &SupportedVersions,
) -> Result<(InstalledVersion, PathBuf)> {
    enumerate_installations(env, supported)
        .latest()
        .map(|(version, path)| (version, path.clone()))
        .ok_or(AnsysPathError::NoInstallation)
}
