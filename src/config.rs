//! Application configuration loaded from TOML.
//!
//! ```toml
//! [lookup]
//! timeout_seconds = 10
//! user_agent = "Mozilla/5.0 (X11; Linux x86_64) Gecko/20100101 Firefox/133.0"
//!
//! [lookup.cambridge_selectors]
//! example = "span.eg.deg"
//! ```
//!
//! Every field is optional; missing ones take the built-in defaults.

use std::path::{Path, PathBuf};

use lexmerge_sources::LookupConfig;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Top-level configuration file contents.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Endpoints, timeout, User-Agent and selectors for the sources.
    pub lookup: LookupConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file, falling back to defaults for missing fields.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))
    }

    /// Load the file at `path` if it exists, otherwise the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or the config cannot be serialized.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| AppError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that the lookup section is usable.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Source`] describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        self.lookup.validate()?;
        Ok(())
    }
}

/// Application config directory.
///
/// Resolves to `dirs::config_dir()/lexmerge/` by default. Override with
/// the `LEXMERGE_CONFIG_DIR` environment variable.
#[must_use]
pub fn config_dir() -> PathBuf {
    if let Some(override_dir) = std::env::var_os("LEXMERGE_CONFIG_DIR") {
        return PathBuf::from(override_dir);
    }
    dirs::config_dir()
        .map(|d| d.join("lexmerge"))
        .unwrap_or_else(|| PathBuf::from("/tmp/lexmerge-config"))
}

/// Default config file path (`config_dir()/config.toml`).
#[must_use]
pub fn default_config_path() -> PathBuf {
    config_dir().join("config.toml")
}
