//! Global configuration management
//!
//! Reads user preferences from `config.toml` in the config directory:
//! prompt width and output defaults. Every setting is optional; a missing
//! file means built-in defaults.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::defaults::MAX_PROMPT_CHARS;
use crate::error::ConfigError;
use crate::infra::dirs::MkpathDirs;

/// Global configuration for mkpath
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// Interactive prompt settings
    #[serde(default)]
    pub prompt: PromptConfig,

    /// Output preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Interactive prompt settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PromptConfig {
    /// Maximum width of the prompt label
    pub max_chars: Option<usize>,
}

/// Output preferences
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Enable quiet mode
    pub quiet: Option<bool>,

    /// Enable JSON output
    pub json: Option<bool>,
}

impl GlobalConfig {
    /// Load global configuration from the config directory
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ParseError` if the config file exists but
    /// contains invalid TOML.
    pub fn load(dirs: &MkpathDirs) -> Result<Self, ConfigError> {
        Self::load_from_path(&dirs.global_config_path())
    }

    /// Load global configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Get the effective prompt width
    #[must_use]
    pub fn prompt_max_chars(&self) -> usize {
        self.prompt.max_chars.unwrap_or(MAX_PROMPT_CHARS)
    }

    /// Whether quiet mode is on by default
    #[must_use]
    pub fn quiet(&self) -> bool {
        self.output.quiet.unwrap_or(false)
    }

    /// Whether JSON output is on by default
    #[must_use]
    pub fn json(&self) -> bool {
        self.output.json.unwrap_or(false)
    }
}
