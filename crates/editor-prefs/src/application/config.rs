//! Store configuration types.
//!
//! [`StoreConfig`] decides where the preferences file lives.  It is a plain
//! struct with no environment reads of its own: the binary populates it
//! from CLI flags, the editor uses the defaults, and tests point
//! `directory_override` at a temporary directory.

use std::path::PathBuf;

/// Location settings for the preferences file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// Application name, the first path component under the platform
    /// application data directory.
    pub app_name: String,

    /// Category, the second path component.
    pub category: String,

    /// Name of the JSON file inside the preferences directory.
    pub file_name: String,

    /// When set, the file lives directly in this directory and the platform
    /// directory lookup is skipped.
    pub directory_override: Option<PathBuf>,
}

impl Default for StoreConfig {
    /// | Field                | Default        |
    /// |----------------------|----------------|
    /// | app_name             | `AtomicEditor` |
    /// | category             | `Preferences`  |
    /// | file_name            | `prefs.json`   |
    /// | directory_override   | `None`         |
    fn default() -> Self {
        Self {
            app_name: "AtomicEditor".to_string(),
            category: "Preferences".to_string(),
            file_name: "prefs.json".to_string(),
            directory_override: None,
        }
    }
}

impl StoreConfig {
    /// Returns a config that keeps the file in `dir`, with default names.
    pub fn in_directory(dir: impl Into<PathBuf>) -> Self {
        Self {
            directory_override: Some(dir.into()),
            ..Self::default()
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
