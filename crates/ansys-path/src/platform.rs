use crate::Result;
#[cfg(not(any(unix, windows)))]
use ansys_path_core::AnsysPathError;
use std::fmt;

/// Operating system family. Discovery and naming conventions branch on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Platform {
    Windows,
    /// Every Unix-like system follows the Linux install conventions.
    Linux,
}

impl Platform {
    pub fn is_windows(self) -> bool {
        matches!(self, Platform::Windows)
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::Windows => write!(f, "windows"),
            Platform::Linux => write!(f, "linux"),
        }
    }
}

pub fn detect_platform() -> Result<Platform> {
    #[cfg(windows)]
    return Ok(Platform::Windows);

    #[cfg(unix)]
    return Ok(Platform::Linux);

    #[cfg(not(any(unix, windows)))]
    Err(AnsysPathError::UnsupportedPlatform(
        std::env::consts::OS.to_string(),
    ))
}
