use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnsysPathError {
    // Input errors
    #[error("EXECUTABLE_NOT_FOUND: file '{}' is invalid or does not exist", path.display())]
    ExecutableNotFound { path: PathBuf },

    #[error("EXECUTABLE_NOT_RESOLVED: no {product_name} executable was found or supplied")]
    ExecutableNotResolved { product_name: String },

    #[error("UNKNOWN_PRODUCT: unexpected product '{0}'")]
    UnknownProduct(String),

    // Discovery errors
    #[error("VERSION_NOT_FOUND: version {requested} not found. Available versions are {available:?}")]
    VersionNotFound { requested: i32, available: Vec<i32> },

    #[error("NO_INSTALLATION: no Ansys installation found")]
    NoInstallation,

    #[error("UNSUPPORTED_PLATFORM: unsupported operating system '{0}'")]
    UnsupportedPlatform(String),

    #[error("VERSION_PARSE_FAILED: {message}\n\n{hint}")]
    MalformedVersion { message: String, hint: String },

    // Config errors
    #[error("CONFIG_READ_ERROR: {0}")]
    ConfigReadError(String),

    #[error("CONFIG_WRITE_ERROR: {0}")]
    ConfigWriteError(String),

    #[error("SETTINGS_DIR_UNAVAILABLE: could not determine the user data directory")]
    SettingsDirUnavailable,

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for AnsysPathError {
    fn from(err: serde_json::Error) -> Self {
        AnsysPathError::Generic(format!("JSON error: {}", err))
    }
}

pub type Result<T> = std::result::Result<T, AnsysPathError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_not_found_lists_available_codes() {
        let err = AnsysPathError::VersionNotFound {
            requested: 999,
            available: vec![202, 211, 231],
        };
        let message = err.to_string();
        assert!(message.starts_with("VERSION_NOT_FOUND"));
        assert!(message.contains("[202, 211, 231]"));
    }

    #[test]
    fn test_executable_not_found_names_path() {
        let err = AnsysPathError::ExecutableNotFound {
            path: PathBuf::from("/does/not/exist"),
        };
        assert!(err.to_string().contains("/does/not/exist"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err: AnsysPathError = io.into();
        assert!(matches!(err, AnsysPathError::IoError(_)));
    }
}
