//! mkpath - create a directory hierarchy from one relative path
//!
//! Type `a/b/c/` to get three nested directories, or `a/b/file.txt` to get
//! two directories and an empty file, all beneath a base directory.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`cli`] - Command-line interface parsing and output formatting
//! - [`core`] - Parsing, validation and creation logic
//! - [`infra`] - Infrastructure layer (filesystem, platform directories)
//! - [`config`] - Configuration and constants
//! - [`error`] - Error types and handling

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod infra;

pub use crate::core::creator::create_path;
pub use crate::core::parser::{parse_path, ParsedPath};
pub use crate::core::validator::{validate, Validation};

#[cfg(test)]
pub mod test_utils;
