//! Resolving a product's executable from cache, discovery and user input.
//!
//! ```text
//! resolve(product)
//!   1. cached path (skipped when a version is requested and does not match)
//!   2. conventional install location (when `find` is set and the file exists)
//!   3. prompt until a valid executable is entered, then save it
//!   4. NotFound + advisory
//! ```

use crate::Result;
use crate::advisory::{Advisory, AdvisorySink, TracingSink};
use crate::env::DiscoveryEnv;
use crate::extract;
use crate::find;
use crate::info::{Resolution, ResolvedInstallation};
use crate::product::{Product, ProductRegistry};
use crate::prompt::{PathPrompt, PromptRequest, StdinPrompt};
use crate::versions::{InstalledVersion, InstalledVersionMap, SupportedVersions, VersionRequest};
use ansys_path_core::{AnsysPathError, ConfigStore, SettingsLocations};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Options for [`PathResolver::resolve`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolveOptions {
    /// Ask for a path when neither cache nor discovery produced one.
    /// Has no effect on a resolver without a prompt.
    pub allow_input: bool,
    pub version: Option<VersionRequest>,
    /// Search conventional install locations.
    pub find: bool,
}

impl Default for ResolveOptions {
    fn default() -> Self {
        Self {
            allow_input: true,
            version: None,
            find: true,
        }
    }
}

/// What [`PathResolver::clear_configuration`] removes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearTarget {
    All,
    Product(Product),
}

impl From<Product> for ClearTarget {
    fn from(product: Product) -> Self {
        ClearTarget::Product(product)
    }
}

impl FromStr for ClearTarget {
    type Err = AnsysPathError;

    fn from_str(s: &str) -> Result<Self> {
        if s == "all" {
            Ok(ClearTarget::All)
        } else {
            s.parse().map(ClearTarget::Product)
        }
    }
}

pub struct PathResolver {
    store: ConfigStore,
    env: DiscoveryEnv,
    registry: ProductRegistry,
    supported: SupportedVersions,
    prompt: Option<Box<dyn PathPrompt>>,
    sink: Box<dyn AdvisorySink>,
}

impl fmt::Debug for PathResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathResolver")
            .field("store", &self.store)
            .field("env", &self.env)
            .field("supported", &self.supported)
            .field("prompt", &self.prompt.is_some())
            .finish_non_exhaustive()
    }
}

impl PathResolver {
    /// Resolver without a prompt that logs advisories.
    pub fn new(store: ConfigStore, env: DiscoveryEnv) -> Self {
        let registry = ProductRegistry::new(env.platform());
        Self {
            store,
            env,
            registry,
            supported: SupportedVersions::default(),
            prompt: None,
            sink: Box::new(TracingSink),
        }
    }

    /// Resolver for the current user and machine, prompting on stdin.
    ///
    /// Creates the settings directory. Failure to do so is only an advisory.
    pub fn from_system() -> Result<Self> {
        let store = ConfigStore::new(SettingsLocations::from_env()?);
        let resolver = Self::new(store, DiscoveryEnv::from_system()?).with_prompt(StdinPrompt);
        resolver.ensure_settings_dir();
        Ok(resolver)
    }

    pub fn with_supported_versions(mut self, supported: SupportedVersions) -> Self {
        self.supported = supported;
        self
    }

    pub fn with_prompt(mut self, prompt: impl PathPrompt + 'static) -> Self {
        self.prompt = Some(Box::new(prompt));
        self
    }

    pub fn with_prompt_fn<F>(self, prompt: F) -> Self
    where
        F: FnMut(&PromptRequest<'_>) -> io::Result<String> + 'static,
    {
        self.with_prompt(prompt)
    }

    pub fn without_prompt(mut self) -> Self {
        self.prompt = None;
        self
    }

    pub fn with_sink(mut self, sink: impl AdvisorySink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    pub fn env(&self) -> &DiscoveryEnv {
        &self.env
    }

    pub fn registry(&self) -> &ProductRegistry {
        &self.registry
    }

    pub fn supported_versions(&self) -> &SupportedVersions {
        &self.supported
    }

    pub fn settings_dir(&self) -> &Path {
        self.store.locations().settings_dir()
    }

    /// Creates the settings directory, reporting an advisory on failure.
    pub fn ensure_settings_dir(&self) -> bool {
        match self.store.locations().ensure_settings_dir() {
            Ok(()) => true,
            Err(e) => {
                self.sink.emit(Advisory::SettingsDirUnwritable {
                    dir: self.settings_dir().to_path_buf(),
                    reason: e.to_string(),
                });
                false
            }
        }
    }

    // ========================================================================
    // Discovery
    // ========================================================================

    pub fn find(
        &self,
        product: Product,
        version: Option<VersionRequest>,
    ) -> Result<Option<ResolvedInstallation>> {
        find::find_installation(product, &self.env, version, &self.supported)
    }

    pub fn available_installations(&self) -> InstalledVersionMap {
        find::get_available_installations(&self.env, &self.supported)
    }

    pub fn latest_installation(&self) -> Result<(InstalledVersion, PathBuf)> {
        find::get_latest_installation(&self.env, &self.supported)
    }

    pub fn version_from_path(&self, product: Product, path: &Path) -> Result<u32> {
        extract::version_from_path(product, path)
    }

    // ========================================================================
    // Cache
    // ========================================================================

    /// Saved executable for `product`. The file is not checked for existence.
    pub fn saved_path(&self, product: Product) -> Result<Option<PathBuf>> {
        Ok(self
            .store
            .get(product.as_str())?
            .filter(|path| !path.is_empty())
            .map(PathBuf::from))
    }

    /// Saves `path` as the executable for `product`.
    ///
    /// # Errors
    ///
    /// [`AnsysPathError::ExecutableNotFound`] when `path` is not an existing
    /// file. Nothing is written in that case.
    pub fn change_default_path(&self, product: Product, path: &Path) -> Result<()> {
        if !path.is_file() {
            return Err(AnsysPathError::ExecutableNotFound {
                path: path.to_path_buf(),
            });
        }
        let Some(value) = path.to_str() else {
            return Err(AnsysPathError::ConfigWriteError(format!(
                "path '{}' is not valid UTF-8",
                path.display()
            )));
        };

        self.store.set(product.as_str(), value)?;
        tracing::info!(%product, path = value, "saved executable path");
        Ok(())
    }

    pub fn clear_configuration(&self, target: ClearTarget) -> Result<()> {
        match target {
            ClearTarget::All => {
                self.store.clear()?;
                tracing::info!("cleared all saved executable paths");
            }
            ClearTarget::Product(product) => {
                if self.store.remove(product.as_str())? {
                    tracing::info!(%product, "cleared saved executable path");
                } else {
                    tracing::debug!(%product, "no saved executable path to clear");
                }
            }
        }
        Ok(())
    }

    // ========================================================================
    // Resolution
    // ========================================================================

    pub fn resolve(&mut self, product: Product, options: &ResolveOptions) -> Result<Resolution> {
        if let Some(cached) = self.cached_match(product, options.version)? {
            tracing::debug!(%product, path = %cached.display(), "using cached path");
            return Ok(Resolution::Cached(cached));
        }

        if options.find {
            match self.find(product, options.version) {
                Ok(Some(found)) if found.path.is_file() => {
                    tracing::debug!(%product, path = %found.path.display(), "found installed executable");
                    return Ok(Resolution::Discovered(found));
                }
                Ok(Some(found)) => {
                    tracing::debug!(%product, path = %found.path.display(), "expected executable is missing");
                }
                Ok(None) => {}
                Err(e @ AnsysPathError::VersionNotFound { .. }) => {
                    tracing::debug!(%product, "{}", e);
                }
                Err(e) => return Err(e),
            }
        }

        if options.allow_input {
            if let Some(path) = self.prompt_path(product)? {
                self.change_default_path(product, &path)?;
                return Ok(Resolution::Prompted(path));
            }
        }

        self.sink.emit(Advisory::NotFound { product });
        Ok(Resolution::NotFound { product })
    }

    pub fn get_path(&mut self, product: Product, options: &ResolveOptions) -> Result<Option<PathBuf>> {
        self.resolve(product, options).map(Resolution::into_path)
    }

    /// Saves an executable location for `product`.
    ///
    /// Without `path` the newest conventional install is used. With
    /// `allow_prompt`, a missing or invalid candidate is replaced by asking.
    /// A valid but uncommon location is saved with an advisory.
    pub fn save_path(
        &mut self,
        product: Product,
        path: Option<&Path>,
        allow_prompt: bool,
    ) -> Result<PathBuf> {
        let mut candidate = match path {
            Some(path) => Some(path.to_path_buf()),
            None => self.find(product, None)?.map(|found| found.path),
        };

        let acceptable = candidate
            .as_deref()
            .is_some_and(|path| self.registry.is_valid_executable_path(product, path));
        let mut prompted = false;
        if !acceptable && allow_prompt {
            if let Some(entered) = self.prompt_path(product)? {
                candidate = Some(entered);
                prompted = true;
            }
        }

        let Some(candidate) = candidate else {
            return Err(AnsysPathError::ExecutableNotResolved {
                product_name: product.display_name().to_string(),
            });
        };

        // Prompted answers were already checked by `prompt_path`.
        if !prompted && self.registry.is_valid_executable_path(product, &candidate) {
            self.warn_if_uncommon(product, &candidate);
        }
        self.change_default_path(product, &candidate)?;
        Ok(candidate)
    }

    /// Cached path usable for `version`, if any.
    fn cached_match(
        &self,
        product: Product,
        version: Option<VersionRequest>,
    ) -> Result<Option<PathBuf>> {
        let Some(cached) = self.saved_path(product)? else {
            tracing::debug!(%product, "no path in config file");
            return Ok(None);
        };
        let Some(request) = version else {
            return Ok(Some(cached));
        };

        let wanted = request.code();
        match extract::version_from_path(product, &cached) {
            Ok(found) if found == wanted => Ok(Some(cached)),
            Ok(found) => {
                tracing::debug!(%product, requested = wanted, cached = found, "cached version does not match");
                Ok(None)
            }
            Err(e) => {
                tracing::debug!(%product, "cached path has no readable version: {}", e);
                Ok(None)
            }
        }
    }

    /// Asks until a valid executable is entered. `None` without a prompt.
    fn prompt_path(&mut self, product: Product) -> Result<Option<PathBuf>> {
        let Some(prompt) = self.prompt.as_mut() else {
            return Ok(None);
        };
        let registry = &self.registry;
        let descriptor = registry.descriptor(product);

        let mut previous: Option<String> = None;
        let mut attempt = 0;
        let entered = loop {
            let request = PromptRequest {
                product,
                descriptor,
                attempt,
                previous: previous.as_deref(),
            };
            let answer = prompt.request_path(&request)?;
            let path = PathBuf::from(answer.trim());
            if registry.is_valid_executable_path(product, &path) {
                break path;
            }
            tracing::debug!(%product, answer = %answer, "rejected entered path");
            previous = Some(answer);
            attempt += 1;
        };

        self.warn_if_uncommon(product, &entered);
        Ok(Some(entered))
    }

    fn warn_if_uncommon(&self, product: Product, path: &Path) {
        if !self.registry.is_common_executable_path(product, path) {
            self.sink.emit(Advisory::UncommonPath {
                product,
                path: path.to_path_buf(),
                pattern_path: self.registry.descriptor(product).pattern_path,
            });
        }
    }
}
