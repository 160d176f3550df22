//! Path management for means-test
//!
//! ## Path Resolution Order
//!
//! 1. `MEANS_TEST_DIR` environment variable (if set)
//! 2. The platform configuration directory from `directories`
//!    (`~/.config/means-test` on Linux, `~/Library/Application Support/means-test`
//!    on macOS, `%APPDATA%\means-test\config` on Windows)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::MeansTestError;

/// Environment variable that overrides the configuration directory
pub const DIR_ENV_VAR: &str = "MEANS_TEST_DIR";

/// Manages all paths used by means-test
#[derive(Debug, Clone)]
pub struct MeansTestPaths {
    base_dir: PathBuf,
}

impl MeansTestPaths {
    /// Resolve the configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override is not set.
    pub fn new() -> Result<Self, MeansTestError> {
        let base_dir = match std::env::var(DIR_ENV_VAR) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create MeansTestPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Resolve a path from the settings file relative to the base directory
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), MeansTestError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            MeansTestError::Io(format!("Failed to create config directory: {}", e))
        })
    }
}

fn resolve_default_path() -> Result<PathBuf, MeansTestError> {
    ProjectDirs::from("", "", "means-test")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| MeansTestError::Config("Could not determine a home directory".into()))
}
