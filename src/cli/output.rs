//! Output formatting
//!
//! Status prefixes, the global quiet/JSON/verbosity switches, and the single
//! place where failures are turned into user-facing messages.

use std::sync::OnceLock;

use serde::Serialize;

use crate::config::defaults::GENERIC_ERROR;
use crate::error::{MkpathError, Rejection};

/// Status message prefixes
pub mod status {
    /// Success prefix (green checkmark)
    pub const SUCCESS: &str = "✓";

    /// Error prefix (red X)
    pub const ERROR: &str = "✗";

    /// Warning prefix (yellow triangle)
    pub const WARNING: &str = "⚠";

    /// Info prefix (blue circle)
    pub const INFO: &str = "ℹ";
}

static GLOBAL_OUTPUT: OnceLock<OutputConfig> = OnceLock::new();

/// Output switches shared by every command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Suppress everything except errors
    pub quiet: bool,
    /// Print machine-readable JSON instead of text
    pub json: bool,
    /// Verbosity level (0 = warn, 1 = info, 2+ = debug)
    pub verbose: u8,
}

impl OutputConfig {
    /// Create a new output configuration
    pub fn new(quiet: bool, json: bool, verbose: u8) -> Self {
        Self {
            quiet,
            json,
            verbose,
        }
    }

    /// Make this configuration visible to every command
    ///
    /// Only the first call has an effect.
    pub fn apply_global(self) {
        if GLOBAL_OUTPUT.set(self).is_err() {
            tracing::debug!("Output configuration already applied");
        }
    }

    /// The configuration applied by `apply_global`, or the default
    pub fn current() -> Self {
        GLOBAL_OUTPUT.get().copied().unwrap_or_default()
    }

    /// Log level directive matching the verbosity
    pub fn log_level(self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            _ => tracing::Level::DEBUG,
        }
    }
}

/// Print a status line unless quiet or JSON output is active
pub fn print_status(prefix: &str, message: &str) {
    let config = OutputConfig::current();
    if !config.quiet && !config.json {
        println!("{prefix} {message}");
    }
}

/// Print `value` as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Rejection carried by an error, if the error is one
pub fn as_rejection(error: &anyhow::Error) -> Option<&Rejection> {
    error.downcast_ref::<Rejection>().or_else(|| {
        error.downcast_ref::<MkpathError>().and_then(|e| match e {
            MkpathError::Rejected(rejection) => Some(rejection),
            _ => None,
        })
    })
}

/// Report a failed command to the user
///
/// Validation rejections are expected and shown as-is. Anything else is
/// logged in full and the user only sees a generic message.
pub fn display_error(error: &anyhow::Error) {
    if let Some(rejection) = as_rejection(error) {
        eprintln!("{} {rejection}", status::ERROR);
        return;
    }

    tracing::error!("{error:#}");
    eprintln!("{} {GENERIC_ERROR}", status::ERROR);
}
