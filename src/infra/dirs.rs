//! Platform-specific directory management
//!
//! Locates the directory holding the user's `config.toml`. Follows the XDG
//! Base Directory Specification on Linux and standard locations on macOS.
//!
//! `MKPATH_CONFIG_DIR` overrides the default location.

use std::env;
use std::path::PathBuf;

/// Environment variable name for the config directory override
pub const ENV_CONFIG_DIR: &str = "MKPATH_CONFIG_DIR";

/// Application name used in directory paths
const APP_NAME: &str = "mkpath";

/// Config file name inside the config directory
const CONFIG_FILE: &str = "config.toml";

/// Platform-specific directory provider for mkpath
#[derive(Debug, Clone)]
pub struct MkpathDirs {
    config_dir: PathBuf,
}

impl MkpathDirs {
    /// Create a new `MkpathDirs` instance
    ///
    /// Checks the environment first, then falls back to platform defaults.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config_dir: Self::resolve_config_dir(),
        }
    }

    /// Use an explicit config directory
    #[must_use]
    pub fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Get the config directory path
    ///
    /// - Linux: `$XDG_CONFIG_HOME/mkpath` or `~/.config/mkpath`
    /// - macOS: `~/Library/Application Support/mkpath`
    #[must_use]
    pub fn config_dir(&self) -> PathBuf {
        self.config_dir.clone()
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    fn resolve_config_dir() -> PathBuf {
        if let Ok(path) = env::var(ENV_CONFIG_DIR) {
            return PathBuf::from(path);
        }

        Self::platform_config_dir()
    }

    fn platform_config_dir() -> PathBuf {
        dirs::config_dir()
            .map(|p| p.join(APP_NAME))
            .unwrap_or_else(|| {
                // Fallback to home directory
                dirs::home_dir()
                    .map(|h| h.join(".config").join(APP_NAME))
                    .unwrap_or_else(|| PathBuf::from(".").join(".config").join(APP_NAME))
            })
    }
}

impl Default for MkpathDirs {
    fn default() -> Self {
        Self::new()
    }
}
