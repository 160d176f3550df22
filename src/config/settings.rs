//! User settings for means-test
//!
//! Holds the Stage B policy, an optional replacement table set and display
//! preferences. A missing settings file means defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::paths::MeansTestPaths;
use crate::error::MeansTestError;
use crate::services::DisposableIncomePolicy;
use crate::standards::StandardsTables;

/// User settings for means-test
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// How above-median households are evaluated
    #[serde(default)]
    pub disposable_income_policy: DisposableIncomePolicy,

    /// JSON table set replacing the builtin one; relative paths resolve
    /// against the config directory
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub standards_file: Option<PathBuf>,

    /// Currency symbol used in text output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default log filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            disposable_income_policy: DisposableIncomePolicy::default(),
            standards_file: None,
            currency_symbol: default_currency(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &MeansTestPaths) -> Result<Self, MeansTestError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                MeansTestError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                MeansTestError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &MeansTestPaths) -> Result<(), MeansTestError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            MeansTestError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            MeansTestError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }

    /// Table set file in effect, `None` for the builtin set
    ///
    /// A command-line override is taken as given, so a relative override is
    /// relative to the working directory. Only the configured
    /// `standards_file` resolves against the config directory.
    pub fn standards_source(
        &self,
        paths: &MeansTestPaths,
        override_path: Option<&Path>,
    ) -> Option<PathBuf> {
        match override_path {
            Some(path) => Some(path.to_path_buf()),
            None => self.standards_file.as_deref().map(|file| paths.resolve(file)),
        }
    }

    /// Load the table set in effect, or the builtin one
    pub fn load_tables(
        &self,
        paths: &MeansTestPaths,
        override_path: Option<&Path>,
    ) -> Result<StandardsTables, MeansTestError> {
        match self.standards_source(paths, override_path) {
            Some(path) => {
                debug!(path = %path.display(), "loading standards tables");
                StandardsTables::from_json_file(&path)
            }
            None => Ok(StandardsTables::builtin()),
        }
    }
}
