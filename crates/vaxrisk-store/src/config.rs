//! Store configuration.

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Result, StoreError};

/// Configuration for the dataset store, loaded once at startup.
///
/// ```json
/// { "data_dir": "/var/cache/vaxrisk" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Root directory for cached snapshots.
    pub data_dir: PathBuf,
}

impl StoreConfig {
    /// Creates a configuration for the given cache directory.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Returns the platform data directory for vaxrisk.
    ///
    /// - Linux: `~/.local/share/vaxrisk/`
    /// - macOS: `~/Library/Application Support/vaxrisk/`
    /// - Windows: `C:\Users\<User>\AppData\Roaming\vaxrisk\`
    ///
    /// Falls back to `~/.vaxrisk/` if the platform location cannot be determined.
    #[must_use]
    pub fn default_data_dir() -> PathBuf {
        ProjectDirs::from("", "", "vaxrisk").map_or_else(dirs_fallback, |proj_dirs| {
            proj_dirs.data_dir().to_path_buf()
        })
    }

    /// Parses a configuration from JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid.
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| StoreError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_json(&content).map_err(|e| StoreError::ParseConfig {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Replaces the cache directory.
    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self::new(Self::default_data_dir())
    }
}

/// Fallback for determining home directory.
fn dirs_fallback() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
        .join(".vaxrisk")
}
