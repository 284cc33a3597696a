//! Reading the release out of an executable path.

use crate::Result;
use crate::product::Product;
use ansys_path_core::AnsysPathError;
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

static UNIFIED_VERSION: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)v(\d\d\d).ansys"));
static DIR_VERSION: LazyLock<Regex> = LazyLock::new(|| compile(r"(?i)v(\d\d\d)"));

fn compile(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => unreachable!("invalid built-in pattern {pattern}: {e}"),
    }
}

/// Three digit version code from an executable path.
///
/// Backslashes are treated as separators. The last match wins, so a
/// version-like folder higher up the tree does not shadow the install one.
///
/// # Errors
///
/// [`AnsysPathError::MalformedVersion`] when the path is empty, not UTF-8,
/// or carries no version. The error includes the command that saves a path
/// by hand.
pub fn version_from_path(product: Product, path: &Path) -> Result<u32> {
    let Some(text) = path.to_str().filter(|text| !text.is_empty()) else {
        return Err(malformed(
            product,
            format!(
                "The provided path, \"{}\", is not a valid string.",
                path.display()
            ),
        ));
    };

    let normalized = text.replace('\\', "/");
    let pattern = match product {
        Product::Mapdl | Product::Dyna => &UNIFIED_VERSION,
        Product::Mechanical | Product::Amk => &DIR_VERSION,
    };

    pattern
        .captures_iter(&normalized)
        .last()
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .ok_or_else(|| {
            malformed(
                product,
                format!(
                    "Unable to extract {} version from {}.",
                    product.display_name(),
                    text
                ),
            )
        })
}

/// Instructions for saving an executable location manually.
pub fn remediation_hint(product: Product) -> String {
    format!(
        "Run the following command to save the path to the {name} executable:\n\n    \
         save-ansys-path --name {id} /path/to/{id}-executable\n",
        name = product.display_name(),
        id = product.as_str(),
    )
}

fn malformed(product: Product, message: String) -> AnsysPathError {
    AnsysPathError::MalformedVersion {
        message,
        hint: remediation_hint(product),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapdl_linux_path() {
        let path = Path::new("/usr/ansys_inc/v251/ansys/bin/ansys251");
        assert_eq!(version_from_path(Product::Mapdl, path).unwrap(), 251);
    }

    #[test]
    fn test_mapdl_windows_path_with_backslashes() {
        let path = Path::new(r"C:\Program Files\ANSYS Inc\v222\ansys\bin\winx64\ansys222.exe");
        assert_eq!(version_from_path(Product::Mapdl, path).unwrap(), 222);
    }

    #[test]
    fn test_mechanical_paths() {
        let linux = Path::new("/usr/ansys_inc/v231/aisol/.workbench");
        let windows = Path::new(r"C:\Program Files\ANSYS Inc\v232\aisol\bin\winx64\AnsysWBU.exe");

        assert_eq!(version_from_path(Product::Mechanical, linux).unwrap(), 231);
        assert_eq!(version_from_path(Product::Mechanical, windows).unwrap(), 232);
    }

    #[test]
    fn test_dyna_and_amk_paths() {
        let dyna = Path::new("/ansys_inc/v242/ansys/bin/lsdyna242");
        let amk = Path::new("/ansys_inc/v242/aisol/bin/linx64/DSSolverProxy2.exe");

        assert_eq!(version_from_path(Product::Dyna, dyna).unwrap(), 242);
        assert_eq!(version_from_path(Product::Amk, amk).unwrap(), 242);
    }

    #[test]
    fn test_last_match_wins() {
        let path = Path::new("/data/v100/ansys/x/v212/ansys/bin/ansys212");
        assert_eq!(version_from_path(Product::Mapdl, path).unwrap(), 212);
    }

    #[test]
    fn test_no_version_reports_hint() {
        let err = version_from_path(Product::Mapdl, Path::new("/opt/custom/ansys")).unwrap_err();
        let msg = err.to_string();

        assert!(msg.contains("Unable to extract Ansys MAPDL version"));
        assert!(msg.contains("save-ansys-path --name mapdl /path/to/mapdl-executable"));
    }

    #[test]
    fn test_empty_path_is_malformed() {
        let err = version_from_path(Product::Mechanical, Path::new("")).unwrap_err();

        match err {
            AnsysPathError::MalformedVersion { message, hint } => {
                assert!(message.contains("is not a valid string"));
                assert!(hint.contains("--name mechanical"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
