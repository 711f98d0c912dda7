//! Shell configuration.
//!
//! JSON-persisted settings for the workbench window and shell behavior.
//! Loaded once at startup; the shell receives the parsed struct, never the
//! file path.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use nodebench_core::error::ConfigError;

/// Persisted shell settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ShellConfig {
    /// Window title.
    pub window_title: String,
    /// Initial window width in pixels.
    pub window_width: u32,
    /// Initial window height in pixels.
    pub window_height: u32,
    /// Override for the samples directory; `None` uses
    /// `<app-dir>/samples`.
    pub samples_dir: Option<PathBuf>,
    /// Whether closing the window asks to save open workspaces first.
    pub confirm_exit: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            window_title: "NodeBench".to_string(),
            window_width: 1280,
            window_height: 960,
            samples_dir: None,
            confirm_exit: true,
        }
    }
}

impl ShellConfig {
    /// Load config from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to a JSON file.
    pub fn save_to_file(&self, path: &Path) -> Result<(), ConfigError> {
        self.validate()?;
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Validate settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window_width == 0 {
            return Err(ConfigError::Invalid {
                field: "window_width".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        if self.window_height == 0 {
            return Err(ConfigError::Invalid {
                field: "window_height".to_string(),
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }

    /// Default config file location under the platform config directory.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("nodebench").join("config.json"))
    }
}
