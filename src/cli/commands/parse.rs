//! CLI implementation for `mkpath parse` command

use std::path::Path;

use anyhow::Result;

use crate::cli::output::{print_json, print_status, status, OutputConfig};
use crate::core::parser::parse_path;
use crate::error::{CreateError, MkpathError};

/// Execute the parse command
pub fn execute(base_dir: &Path, input: &str) -> Result<()> {
    let parsed = parse_path(base_dir, input).map_err(|e| MkpathError::Create(CreateError::Parse(e)))?;

    if OutputConfig::current().json {
        return print_json(&parsed);
    }

    if parsed.is_empty() {
        print_status(status::INFO, "Nothing to create");
        return Ok(());
    }

    print_status(status::INFO, &format!("Target: {}", parsed.target().display()));
    for (depth, segment) in parsed.segments().iter().enumerate() {
        print_status(" ", &format!("{}{segment}/", "  ".repeat(depth)));
    }
    if let Some(filename) = parsed.filename() {
        print_status(
            " ",
            &format!("{}{filename}", "  ".repeat(parsed.segments().len())),
        );
    }
    Ok(())
}
