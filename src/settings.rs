//! Filter settings.
//!
//! Settings are immutable once a filter is constructed. They can be built in
//! code or loaded from a TOML file with the following resolution order:
//! 1. explicit path (e.g. `--config <path>`)
//! 2. `~/.claude-cache/config.toml` (user)
//! 3. `/etc/claude-cache/config.toml` (system)
//!
//! When no file is found the defaults are used.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::{ClaudeCacheError, Result};

/// Options recognized by the filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterSettings {
    /// Ordering among multiple installed filters (default: 0). Not
    /// interpreted by the filter itself.
    pub priority: i64,
    /// Log the annotated request body after each transform (default: false).
    pub debug: bool,
}

impl FilterSettings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the filter priority.
    pub fn priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    /// Enable or disable logging of annotated bodies.
    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Parse settings from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| ClaudeCacheError::Configuration(format!("Failed to parse settings: {e}")))
    }

    /// Load settings from the standard locations.
    ///
    /// An explicit path must exist; otherwise the user and system files are
    /// tried in turn, falling back to defaults.
    pub fn load(explicit_path: Option<&Path>) -> Result<Self> {
        match Self::resolve_path(explicit_path)? {
            Some(path) => Self::load_from_file(&path),
            None => Ok(Self::default()),
        }
    }

    fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            ClaudeCacheError::Configuration(format!("Failed to read settings file {path:?}: {e}"))
        })?;
        toml::from_str(&content).map_err(|e| {
            ClaudeCacheError::Configuration(format!("Failed to parse settings file {path:?}: {e}"))
        })
    }

    fn resolve_path(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if path.exists() {
                return Ok(Some(path.to_path_buf()));
            }
            return Err(ClaudeCacheError::Configuration(format!(
                "Settings file not found: {path:?}"
            )));
        }

        // User settings
        if let Some(home) = dirs::home_dir() {
            let user_settings = home.join(".claude-cache").join("config.toml");
            if user_settings.exists() {
                return Ok(Some(user_settings));
            }
        }

        // System settings
        let system_settings = PathBuf::from("/etc/claude-cache/config.toml");
        if system_settings.exists() {
            return Ok(Some(system_settings));
        }

        Ok(None)
    }
}
