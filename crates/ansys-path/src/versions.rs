//! Version codes and the map of discovered installations.
//!
//! A version code is the three digit release number used in install paths
//! (`v251` is 2025 R1). Student installs share the code of the matching
//! standard release and are kept apart with [`InstallVariant`].

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// Releases probed by default, newest first.
pub const SUPPORTED_ANSYS_VERSIONS: &[(u32, &str)] = &[
    (261, "2026R1"),
    (252, "2025R2"),
    (251, "2025R1"),
    (242, "2024R2"),
    (241, "2024R1"),
    (232, "2023R2"),
    (231, "2023R1"),
    (222, "2022R2"),
    (221, "2022R1"),
    (212, "2021R2"),
    (211, "2021R1"),
    (202, "2020R2"),
    (201, "2020R1"),
    (195, "19.5"),
    (194, "19.4"),
    (193, "19.3"),
    (192, "19.2"),
    (191, "19.1"),
];

/// Version codes to probe during discovery, mapped to their release labels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupportedVersions {
    versions: BTreeMap<u32, String>,
}

impl SupportedVersions {
    /// Codes in probe order (newest first).
    pub fn codes(&self) -> impl Iterator<Item = u32> + '_ {
        self.versions.keys().rev().copied()
    }

    pub fn label(&self, code: u32) -> Option<&str> {
        self.versions.get(&code).map(String::as_str)
    }

    pub fn contains(&self, code: u32) -> bool {
        self.versions.contains_key(&code)
    }

    pub fn len(&self) -> usize {
        self.versions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }
}

impl Default for SupportedVersions {
    fn default() -> Self {
        SUPPORTED_ANSYS_VERSIONS
            .iter()
            .map(|(code, label)| (*code, *label))
            .collect()
    }
}

impl<S: Into<String>> FromIterator<(u32, S)> for SupportedVersions {
    fn from_iter<I: IntoIterator<Item = (u32, S)>>(iter: I) -> Self {
        Self {
            versions: iter
                .into_iter()
                .map(|(code, label)| (code, label.into()))
                .collect(),
        }
    }
}

/// Whether an installation is a regular or a student edition.
///
/// Declaration order matters: a student install sorts before the standard
/// install of the same release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InstallVariant {
    Student,
    Standard,
}

/// A discovered release: version code plus edition.
///
/// Ordering compares the code first, so the newest release is the greatest
/// value. For equal codes the standard edition wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct InstalledVersion {
    pub code: u32,
    pub variant: InstallVariant,
}

impl InstalledVersion {
    pub fn standard(code: u32) -> Self {
        Self {
            code,
            variant: InstallVariant::Standard,
        }
    }

    pub fn student(code: u32) -> Self {
        Self {
            code,
            variant: InstallVariant::Student,
        }
    }

    pub fn is_student(&self) -> bool {
        self.variant == InstallVariant::Student
    }

    /// Signed form used in listings: student installs are negative.
    pub fn signed(&self) -> i32 {
        let code = self.code as i32;
        if self.is_student() { -code } else { code }
    }

    pub fn from_signed(value: i32) -> Self {
        if value < 0 {
            Self::student(value.unsigned_abs())
        } else {
            Self::standard(value as u32)
        }
    }

    /// Release as a float, `251` becomes `25.1`.
    pub fn as_float(&self) -> f64 {
        f64::from(self.code) / 10.0
    }
}

impl fmt::Display for InstalledVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.signed())
    }
}

/// Installations found on disk, keyed by version.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstalledVersionMap {
    entries: BTreeMap<InstalledVersion, PathBuf>,
}

impl InstalledVersionMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an installation. An existing entry for the same version is kept.
    pub fn insert(&mut self, version: InstalledVersion, path: PathBuf) {
        self.entries.entry(version).or_insert(path);
    }

    pub fn get(&self, version: &InstalledVersion) -> Option<&PathBuf> {
        self.entries.get(version)
    }

    pub fn contains(&self, version: &InstalledVersion) -> bool {
        self.entries.contains_key(version)
    }

    /// Newest installation, standard edition preferred on ties.
    pub fn latest(&self) -> Option<(InstalledVersion, &PathBuf)> {
        self.entries
            .iter()
            .next_back()
            .map(|(version, path)| (*version, path))
    }

    pub fn signed_codes(&self) -> Vec<i32> {
        self.entries.keys().map(InstalledVersion::signed).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&InstalledVersion, &PathBuf)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(InstalledVersion, PathBuf)> for InstalledVersionMap {
    fn from_iter<I: IntoIterator<Item = (InstalledVersion, PathBuf)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (version, path) in iter {
            map.insert(version, path);
        }
        map
    }
}

impl<'a> IntoIterator for &'a InstalledVersionMap {
    type Item = (&'a InstalledVersion, &'a PathBuf);
    type IntoIter = std::collections::btree_map::Iter<'a, InstalledVersion, PathBuf>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// A caller's version request.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VersionRequest {
    /// Three digit code, e.g. `251`.
    Code(u32),
    /// Release number, e.g. `25.1`.
    Float(f64),
    /// Student edition of the given code.
    Student(u32),
}

impl VersionRequest {
    /// Normalized three digit code.
    pub fn code(&self) -> u32 {
        match *self {
            VersionRequest::Code(code) | VersionRequest::Student(code) => code,
            VersionRequest::Float(value) => code_from_float(value),
        }
    }

    pub fn to_installed(&self) -> InstalledVersion {
        match self {
            VersionRequest::Student(code) => InstalledVersion::student(*code),
            _ => InstalledVersion::standard(self.code()),
        }
    }
}

impl From<u32> for VersionRequest {
    fn from(code: u32) -> Self {
        VersionRequest::Code(code)
    }
}

impl From<f64> for VersionRequest {
    fn from(value: f64) -> Self {
        VersionRequest::Float(value)
    }
}

impl From<InstalledVersion> for VersionRequest {
    fn from(version: InstalledVersion) -> Self {
        match version.variant {
            InstallVariant::Standard => VersionRequest::Code(version.code),
            InstallVariant::Student => VersionRequest::Student(version.code),
        }
    }
}

/// `25.1` becomes `251`. The epsilon absorbs binary representation error
/// (`23.2 * 10.0` is slightly below `232`).
fn code_from_float(value: f64) -> u32 {
    let scaled = (value * 10.0 + 1e-6).trunc();
    if scaled <= 0.0 { 0 } else { scaled as u32 }
}
