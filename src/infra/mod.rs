//! Infrastructure layer
//!
//! Handles all I/O operations against the filesystem and platform
//! directories. This module is the only place where side effects occur.

pub mod dirs;
pub mod filesystem;
