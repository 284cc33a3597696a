//! Fixed names used to locate settings on disk.

/// Overrides the per-user data directory that all settings live under.
pub const DATA_DIR_ENV: &str = "ANSYS_TOOLS_PATH_DATA_DIR";

/// File name of the executable cache, current and legacy alike.
pub const CONFIG_FILE_NAME: &str = "config.txt";

/// Application directory name of the cache.
pub const APP_NAME: &str = "ansys_tools_path";

/// Vendor directory the cache is nested under on Windows.
pub const VENDOR_NAME: &str = "Ansys";

/// Per-product plain-text caches written by the older client libraries.
///
/// Each file holds nothing but the raw executable path.
pub mod legacy {
    /// (cache key, application directory name)
    pub const TEXT_CONFIG_APPS: [(&str, &str); 2] = [
        ("mapdl", "ansys_mapdl_core"),
        ("mechanical", "ansys_mechanical_core"),
    ];
}
