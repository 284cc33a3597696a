//! Supported products and their per-platform conventions.

use crate::platform::Platform;
use crate::{Result, extract, validate};
use ansys_path_core::AnsysPathError;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Placeholder for the version code in path templates.
const VERSION_PLACEHOLDER: &str = "XXX";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Product {
    Mapdl,
    Mechanical,
    Dyna,
    Amk,
}

impl Product {
    pub const ALL: [Product; 4] = [
        Product::Mapdl,
        Product::Mechanical,
        Product::Dyna,
        Product::Amk,
    ];

    /// Identifier used as the cache key and on the command line.
    pub fn as_str(self) -> &'static str {
        match self {
            Product::Mapdl => "mapdl",
            Product::Mechanical => "mechanical",
            Product::Dyna => "dyna",
            Product::Amk => "amk",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Product::Mapdl => "Ansys MAPDL",
            Product::Mechanical => "Ansys Mechanical",
            Product::Dyna => "Ansys LS-DYNA",
            Product::Amk => "Ansys Mechanical Kernel",
        }
    }

    fn pattern_path(self, platform: Platform) -> &'static str {
        match (self, platform) {
            (Product::Mapdl, Platform::Linux) => "vXXX/ansys/bin/ansysXXX",
            (Product::Mapdl, Platform::Windows) => "vXXX/ansys/bin/winx64/ansysXXX.exe",
            (Product::Mechanical, Platform::Linux) => "vXXX/aisol/.workbench",
            (Product::Mechanical, Platform::Windows) => "vXXX/aisol/bin/winx64/AnsysWBU.exe",
            (Product::Dyna, Platform::Linux) => "vXXX/ansys/bin/lsdynaXXX",
            (Product::Dyna, Platform::Windows) => "vXXX/ansys/bin/winx64/LSDYNAXXX.exe",
            (Product::Amk, Platform::Linux) => "vXXX/aisol/bin/linx64/DSSolverProxy2.exe",
            (Product::Amk, Platform::Windows) => "vXXX/aisol/bin/winx64/DSSolverProxy2.exe",
        }
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Product {
    type Err = AnsysPathError;

    fn from_str(s: &str) -> Result<Self> {
        Product::ALL
            .into_iter()
            .find(|product| product.as_str() == s)
            .ok_or_else(|| AnsysPathError::UnknownProduct(s.to_string()))
    }
}

/// Naming conventions of one product on one platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDescriptor {
    pub product: Product,
    pub name: &'static str,
    /// Executable file name template, e.g. `ansysXXX`.
    pub pattern: &'static str,
    /// Executable location relative to the install base, e.g. `vXXX/ansys/bin/ansysXXX`.
    pub pattern_path: &'static str,
}

impl ProductDescriptor {
    fn new(product: Product, platform: Platform) -> Self {
        let pattern_path = product.pattern_path(platform);
        let pattern = pattern_path.rsplit('/').next().unwrap_or(pattern_path);
        Self {
            product,
            name: product.display_name(),
            pattern,
            pattern_path,
        }
    }

    /// Executable location relative to a version directory such as `v251`.
    pub fn relative_executable(&self, code: u32) -> PathBuf {
        let code = code.to_string();
        self.pattern_path
            .split('/')
            .skip(1)
            .map(|segment| segment.replace(VERSION_PLACEHOLDER, &code))
            .collect()
    }

    pub fn executable_in(&self, version_dir: &Path, code: u32) -> PathBuf {
        version_dir.join(self.relative_executable(code))
    }
}

/// Descriptors of every product for the running platform.
#[derive(Debug, Clone)]
pub struct ProductRegistry {
    platform: Platform,
    descriptors: Vec<ProductDescriptor>,
}

impl ProductRegistry {
    pub fn new(platform: Platform) -> Self {
        Self {
            platform,
            descriptors: Product::ALL
                .into_iter()
                .map(|product| ProductDescriptor::new(product, platform))
                .collect(),
        }
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn descriptor(&self, product: Product) -> &ProductDescriptor {
        // ALL and `descriptors` share the same order.
        &self.descriptors[product as usize]
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &ProductDescriptor> {
        self.descriptors.iter()
    }

    /// Existing file whose name follows the product's convention.
    pub fn is_valid_executable_path(&self, product: Product, path: &Path) -> bool {
        validate::is_valid_executable_path(product, self.platform, path)
    }

    /// Valid executable that also sits in the standard install layout.
    pub fn is_common_executable_path(&self, product: Product, path: &Path) -> bool {
        validate::is_common_executable_path(product, self.platform, path)
    }

    pub fn version_from_path(&self, product: Product, path: &Path) -> Result<u32> {
        extract::version_from_path(product, path)
    }
}
