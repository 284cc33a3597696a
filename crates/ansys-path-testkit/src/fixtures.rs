//! Synthetic unified installations
//!
//! Builds empty placeholder files in the directory shapes an Ansys unified
//! install uses, so discovery and validation can run against a temp dir.

use std::path::{Path, PathBuf};

/// Directory conventions to lay files out in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallLayout {
    Linux,
    Windows,
}

/// Student installs live in this folder next to the standard `vXXX` folders.
pub const STUDENT_FOLDER: &str = "ANSYS Student";

/// A fake install base such as `/usr/ansys_inc` or `C:\Program Files\ANSYS Inc`.
#[derive(Debug, Clone)]
pub struct InstallTree {
    base: PathBuf,
    layout: InstallLayout,
}

impl InstallTree {
    /// Linux layout rooted at `base`.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self::with_layout(base, InstallLayout::Linux)
    }

    /// Windows layout rooted at `base`.
    pub fn windows(base: impl Into<PathBuf>) -> Self {
        Self::with_layout(base, InstallLayout::Windows)
    }

    pub fn with_layout(base: impl Into<PathBuf>, layout: InstallLayout) -> Self {
        let base = base.into();
        std::fs::create_dir_all(&base).expect("Failed to create install base");
        Self { base, layout }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    /// `<base>/vXXX`, or `<base>/ANSYS Student/vXXX` for a student install.
    pub fn version_dir(&self, code: u32, student: bool) -> PathBuf {
        let parent = if student {
            self.base.join(STUDENT_FOLDER)
        } else {
            self.base.clone()
        };
        parent.join(format!("v{}", code))
    }

    /// Create an empty version directory without any executables.
    pub fn add_version_dir(&self, code: u32, student: bool) -> PathBuf {
        let dir = self.version_dir(code, student);
        std::fs::create_dir_all(&dir).expect("Failed to create version dir");
        dir
    }

    pub fn add_mapdl(&self, code: u32) -> PathBuf {
        self.add_executable(code, false, &self.mapdl_relative(code))
    }

    pub fn add_student_mapdl(&self, code: u32) -> PathBuf {
        self.add_executable(code, true, &self.mapdl_relative(code))
    }

    pub fn add_mechanical(&self, code: u32) -> PathBuf {
        self.add_executable(code, false, &self.mechanical_relative())
    }

    pub fn add_student_mechanical(&self, code: u32) -> PathBuf {
        self.add_executable(code, true, &self.mechanical_relative())
    }

    pub fn add_dyna(&self, code: u32) -> PathBuf {
        self.add_executable(code, false, &self.dyna_relative(code))
    }

    pub fn add_student_dyna(&self, code: u32) -> PathBuf {
        self.add_executable(code, true, &self.dyna_relative(code))
    }

    pub fn add_amk(&self, code: u32) -> PathBuf {
        self.add_executable(code, false, &self.amk_relative())
    }

    pub fn add_student_amk(&self, code: u32) -> PathBuf {
        self.add_executable(code, true, &self.amk_relative())
    }

    /// Every product for one version.
    pub fn add_all(&self, code: u32, student: bool) -> PathBuf {
        for relative in [
            self.mapdl_relative(code),
            self.mechanical_relative(),
            self.dyna_relative(code),
            self.amk_relative(),
        ] {
            self.add_executable(code, student, &relative);
        }
        self.version_dir(code, student)
    }

    /// Create an empty file at `<version dir>/<relative...>`.
    pub fn add_executable(&self, code: u32, student: bool, relative: &[String]) -> PathBuf {
        let mut path = self.version_dir(code, student);
        path.extend(relative);
        touch(&path)
    }

    fn mapdl_relative(&self, code: u32) -> Vec<String> {
        match self.layout {
            InstallLayout::Linux => strings(&["ansys", "bin", &format!("ansys{}", code)]),
            InstallLayout::Windows => {
                strings(&["ansys", "bin", "winx64", &format!("ansys{}.exe", code)])
            }
        }
    }

    fn mechanical_relative(&self) -> Vec<String> {
        match self.layout {
            InstallLayout::Linux => strings(&["aisol", ".workbench"]),
            InstallLayout::Windows => strings(&["aisol", "bin", "winx64", "AnsysWBU.exe"]),
        }
    }

    fn dyna_relative(&self, code: u32) -> Vec<String> {
        match self.layout {
            InstallLayout::Linux => strings(&["ansys", "bin", &format!("lsdyna{}", code)]),
            InstallLayout::Windows => {
                strings(&["ansys", "bin", "winx64", &format!("LSDYNA{}.exe", code)])
            }
        }
    }

    fn amk_relative(&self) -> Vec<String> {
        let arch_dir = match self.layout {
            InstallLayout::Linux => "linx64",
            InstallLayout::Windows => "winx64",
        };
        strings(&["aisol", "bin", arch_dir, "DSSolverProxy2.exe"])
    }
}

/// Create an empty file and its parent directories.
pub fn touch(path: impl AsRef<Path>) -> PathBuf {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create parent dir");
    }
    std::fs::write(path, b"").expect("Failed to create file");
    path.to_path_buf()
}

fn strings(parts: &[&str]) -> Vec<String> {
    parts.iter().map(|s| s.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_linux_mapdl_layout() {
        let temp = TempDir::new().unwrap();
        let tree = InstallTree::new(temp.path().join("ansys_inc"));
        let exe = tree.add_mapdl(251);

        assert!(exe.is_file());
        assert!(exe.ends_with("v251/ansys/bin/ansys251"));
    }

    #[test]
    fn test_student_layout() {
        let temp = TempDir::new().unwrap();
        let tree = InstallTree::new(temp.path());
        let exe = tree.add_student_mechanical(242);

        assert!(exe.ends_with("ANSYS Student/v242/aisol/.workbench"));
    }

    #[test]
    fn test_windows_dyna_layout() {
        let temp = TempDir::new().unwrap();
        let tree = InstallTree::windows(temp.path());
        let exe = tree.add_dyna(231);

        assert!(exe.ends_with("v231/ansys/bin/winx64/LSDYNA231.exe"));
    }

    #[test]
    fn test_add_all_creates_every_product() {
        let temp = TempDir::new().unwrap();
        let tree = InstallTree::new(temp.path());
        let dir = tree.add_all(241, false);

        assert!(dir.join("ansys/bin/ansys241").is_file());
        assert!(dir.join("aisol/.workbench").is_file());
        assert!(dir.join("ansys/bin/lsdyna241").is_file());
        assert!(dir.join("aisol/bin/linx64/DSSolverProxy2.exe").is_file());
    }
}
