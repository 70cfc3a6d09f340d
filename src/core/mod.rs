//! Core business logic module
//!
//! Parsing and validation are pure or read-only; creation goes through
//! [`crate::infra::filesystem`] for every side effect.
//!
//! # Submodules
//!
//! - [`parser`] - Raw input to directory segments and trailing file
//! - [`creator`] - Hierarchy and trailing file creation
//! - [`validator`] - Pre-creation input checks
//! - [`base_dir`] - Base directory resolution from a starting path
//! - [`prompt`] - Prompt labels for the interactive adapter
//! - [`global_config`] - User configuration file

pub mod base_dir;
pub mod creator;
pub mod global_config;
pub mod parser;
pub mod prompt;
pub mod validator;
