//! Executable path checks.
//!
//! Two levels: a *valid* path is an existing file with the right name, a
//! *common* path is a valid path that also sits in the standard install
//! layout. Only validity gates saving; an uncommon path merely warns.

use crate::platform::Platform;
use crate::product::Product;
use regex::Regex;
use std::path::{Component, Path};
use std::sync::LazyLock;

static MAPDL_LINUX: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^ansys\d{3}$"));
static MAPDL_WINDOWS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^ansys\d{3}\.exe$"));
static MECHANICAL_LINUX: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^\.workbench$"));
static MECHANICAL_WINDOWS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^ansyswbu\.exe$"));
static DYNA_LINUX: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^lsdyna"));
static DYNA_WINDOWS: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^lsdyna.*\.exe$"));
static AMK: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)^dssolverproxy2\.exe$"));

static VERSION_DIR: LazyLock<Regex> = LazyLock::new(|| compile(r"v(\d\d\d)"));
static MAPDL_BINARY_VERSION: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)ansys(\d\d\d)"));

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => unreachable!("invalid built-in pattern {pattern}: {e}"),
    }
}

fn file_name_pattern(product: Product, platform: Platform) -> &'static Regex {
    match (product, platform) {
        (Product::Mapdl, Platform::Linux) => &*MAPDL_LINUX,
        (Product::Mapdl, Platform::Windows) => &*MAPDL_WINDOWS,
        (Product::Mechanical, Platform::Linux) => &*MECHANICAL_LINUX,
        (Product::Mechanical, Platform::Windows) => &*MECHANICAL_WINDOWS,
        (Product::Dyna, Platform::Linux) => &*DYNA_LINUX,
        (Product::Dyna, Platform::Windows) => &*DYNA_WINDOWS,
        (Product::Amk, _) => &*AMK,
    }
}

pub fn is_valid_executable_path(product: Product, platform: Platform, path: &Path) -> bool {
    if !path.is_file() {
        return false;
    }
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| file_name_pattern(product, platform).is_match(name))
}

pub fn is_common_executable_path(product: Product, platform: Platform, path: &Path) -> bool {
    if !is_valid_executable_path(product, platform, path) {
        return false;
    }

    let text = path.to_string_lossy();
    let has = |segment: &str| has_segment(path, segment);

    match product {
        Product::Mapdl => {
            let dir_version = last_capture(&VERSION_DIR, &text);
            let binary_version = last_capture(&MAPDL_BINARY_VERSION, &text);
            dir_version.is_some() && dir_version == binary_version && has("ansys") && has("bin")
        }
        Product::Mechanical => {
            let layout = match platform {
                Platform::Windows => {
                    has("aisol") && has("bin") && has("winx64") && has("ansyswbu.exe")
                }
                Platform::Linux => has("aisol") && has(".workbench"),
            };
            VERSION_DIR.is_match(&text) && layout
        }
        Product::Dyna => text.to_lowercase().contains("dyna") && has("bin"),
        Product::Amk => {
            let arch = match platform {
                Platform::Windows => "winx64",
                Platform::Linux => "linx64",
            };
            VERSION_DIR.is_match(&text) && has("aisol") && has("bin") && has(arch)
        }
    }
}

fn has_segment(path: &Path, segment: &str) -> bool {
    path.components().any(|component| match component {
        Component::Normal(name) => name
            .to_str()
            .is_some_and(|name| name.eq_ignore_ascii_case(segment)),
        _ => false,
    })
}

fn last_capture<'t>(re: &Regex, text: &'t str) -> Option<&'t str> {
    re.captures_iter(text)
        .last()
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use ansys_path_testkit::{InstallTree, touch};
    use tempfile::TempDir;

    #[test]
    fn test_mapdl_standard_layout_is_common() {
        let temp = TempDir::new().unwrap();
        let tree = InstallTree::new(temp.path());
        let exe = tree.add_mapdl(251);

        assert!(is_valid_executable_path(Product::Mapdl, Platform::Linux, &exe));
        assert!(is_common_executable_path(Product::Mapdl, Platform::Linux, &exe));
    }

    #[test]
    fn test_mapdl_custom_location_is_valid_but_uncommon() {
        let temp = TempDir::new().unwrap();
        let exe = touch(temp.path().join("custom/ansys222"));

        assert!(is_valid_executable_path(Product::Mapdl, Platform::Linux, &exe));
        assert!(!is_common_executable_path(Product::Mapdl, Platform::Linux, &exe));
    }

    #[test]
    fn test_mapdl_version_mismatch_is_uncommon() {
        let temp = TempDir::new().unwrap();
        let exe = touch(temp.path().join("v251/ansys/bin/ansys242"));

        assert!(is_valid_executable_path(Product::Mapdl, Platform::Linux, &exe));
        assert!(!is_common_executable_path(Product::Mapdl, Platform::Linux, &exe));
    }

    #[test]
    fn test_missing_file_is_invalid() {
        let temp = TempDir::new().unwrap();
        let exe = temp.path().join("v251/ansys/bin/ansys251");

        assert!(!is_valid_executable_path(Product::Mapdl, Platform::Linux, &exe));
        assert!(!is_common_executable_path(Product::Mapdl, Platform::Linux, &exe));
    }

    #[test]
    fn test_directory_is_invalid() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("ansys251");
        std::fs::create_dir_all(&dir).unwrap();

        assert!(!is_valid_executable_path(Product::Mapdl, Platform::Linux, &dir));
    }

    #[test]
    fn test_wrong_file_name_is_invalid() {
        let temp = TempDir::new().unwrap();
        let exe = touch(temp.path().join("v251/ansys/bin/mapdl"));

        assert!(!is_valid_executable_path(Product::Mapdl, Platform::Linux, &exe));
    }

    #[test]
    fn test_windows_names_need_exe_suffix() {
        let temp = TempDir::new().unwrap();
        let linux_name = touch(temp.path().join("ansys251"));
        let windows_name = touch(temp.path().join("ANSYS251.EXE"));

        assert!(!is_valid_executable_path(Product::Mapdl, Platform::Windows, &linux_name));
        assert!(is_valid_executable_path(Product::Mapdl, Platform::Windows, &windows_name));
    }

    #[test]
    fn test_windows_tree_is_common() {
        let temp = TempDir::new().unwrap();
        let tree = InstallTree::windows(temp.path());

        for product in Product::ALL {
            let exe = match product {
                Product::Mapdl => tree.add_mapdl(242),
                Product::Mechanical => tree.add_mechanical(242),
                Product::Dyna => tree.add_dyna(242),
                Product::Amk => tree.add_amk(242),
            };
            assert!(
                is_common_executable_path(product, Platform::Windows, &exe),
                "{product} at {exe:?} should be common"
            );
        }
    }

    #[test]
    fn test_linux_tree_is_common() {
        let temp = TempDir::new().unwrap();
        let tree = InstallTree::new(temp.path());

        for product in Product::ALL {
            let exe = match product {
                Product::Mapdl => tree.add_mapdl(231),
                Product::Mechanical => tree.add_mechanical(231),
                Product::Dyna => tree.add_dyna(231),
                Product::Amk => tree.add_amk(231),
            };
            assert!(
                is_common_executable_path(product, Platform::Linux, &exe),
                "{product} at {exe:?} should be common"
            );
        }
    }

    #[test]
    fn test_mechanical_outside_aisol_is_uncommon() {
        let temp = TempDir::new().unwrap();
        let exe = touch(temp.path().join("v251/somewhere/.workbench"));

        assert!(is_valid_executable_path(Product::Mechanical, Platform::Linux, &exe));
        assert!(!is_common_executable_path(Product::Mechanical, Platform::Linux, &exe));
    }

    #[test]
    fn test_dyna_prefix_match() {
        let temp = TempDir::new().unwrap();
        let exe = touch(temp.path().join("bin/lsdyna_mpp_dp"));

        assert!(is_valid_executable_path(Product::Dyna, Platform::Linux, &exe));
        assert!(is_common_executable_path(Product::Dyna, Platform::Linux, &exe));
    }

    #[test]
    fn test_amk_arch_folder_follows_platform() {
        let temp = TempDir::new().unwrap();
        let linux = InstallTree::new(temp.path()).add_amk(251);

        assert!(is_common_executable_path(Product::Amk, Platform::Linux, &linux));
        assert!(!is_common_executable_path(Product::Amk, Platform::Windows, &linux));
    }
}
