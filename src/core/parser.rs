//! Path parsing
//!
//! Turns a raw user-entered path into the ordered list of directories to
//! create and an optional trailing file name. Pure: no filesystem access.
//!
//! Both `/` and `\` are treated as separators on every platform, so
//! `a\b/c` and `a/b/c` describe the same hierarchy.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::ParseError;

/// Result of parsing one user-entered path against a base directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedPath {
    segments: Vec<String>,
    has_trailing_file: bool,
    filename: Option<String>,
    target: PathBuf,
}

impl ParsedPath {
    /// Directory names, root-most first (the trailing file is excluded)
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Whether the input ends in a file name rather than a separator
    pub fn has_trailing_file(&self) -> bool {
        self.has_trailing_file
    }

    /// Trailing file name, if any
    pub fn filename(&self) -> Option<&str> {
        self.filename.as_deref()
    }

    /// Absolute path of the final entity: the file if present, else the
    /// deepest directory
    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Deepest directory of the hierarchy
    pub fn directory(&self) -> &Path {
        if self.has_trailing_file {
            self.target.parent().unwrap_or(&self.target)
        } else {
            &self.target
        }
    }

    /// True when there is neither a directory nor a file to create
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty() && !self.has_trailing_file
    }
}

/// Whether `c` separates path components
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Parse `raw_input` relative to `base_dir`
///
/// The input is trimmed first. If it ends with a separator the whole path is
/// a directory hierarchy; otherwise its last component is a file name.
/// Redundant separators and `.` components are dropped, `..` removes the
/// previous component.
///
/// # Errors
///
/// * `ParseError::InvalidInput` - input is empty or whitespace only
/// * `ParseError::EscapesBase` - a `..` would climb above `base_dir`
pub fn parse_path(base_dir: &Path, raw_input: &str) -> Result<ParsedPath, ParseError> {
    let input = raw_input.trim();
    if input.is_empty() {
        return Err(ParseError::InvalidInput);
    }

    let mut components: Vec<String> = Vec::new();
    for part in input.split(is_separator).filter(|part| !part.is_empty()) {
        match part {
            "." => {}
            ".." => {
                if components.pop().is_none() {
                    return Err(ParseError::EscapesBase {
                        input: input.to_string(),
                    });
                }
            }
            name => components.push(name.to_string()),
        }
    }

    let last = input.rsplit(is_separator).next().unwrap_or_default();
    let names_file = !input.ends_with(is_separator) && !matches!(last, "." | "..");
    let filename = if names_file { components.pop() } else { None };

    let mut target = base_dir.to_path_buf();
    target.extend(&components);
    if let Some(name) = &filename {
        target.push(name);
    }

    Ok(ParsedPath {
        segments: components,
        has_trailing_file: filename.is_some(),
        filename,
        target,
    })
}
