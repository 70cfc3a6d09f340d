//! CLI implementation for `mkpath create` command

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::cli::output::{print_json, print_status, status, OutputConfig};
use crate::core::creator::create_parsed;
use crate::core::parser::parse_path;
use crate::core::validator::{validate, Validation};
use crate::error::MkpathError;

/// JSON report of a create run
#[derive(Debug, Serialize)]
pub struct CreateReport {
    /// Whether anything was created
    pub created: bool,
    /// Deepest directory of the hierarchy
    pub directory: Option<PathBuf>,
    /// Created file, if the path named one
    pub file: Option<PathBuf>,
}

/// Execute the create command
pub async fn execute(base_dir: &Path, input: &str) -> Result<()> {
    let json = OutputConfig::current().json;

    match validate(base_dir, input).await {
        Validation::NoOp => return report_nothing(json),
        Validation::Rejected(rejection) => return Err(MkpathError::Rejected(rejection).into()),
        Validation::Pass => {}
    }

    let parsed = parse_path(base_dir, input).map_err(|e| MkpathError::Create(e.into()))?;
    let directory = parsed.directory().to_path_buf();

    let file = create_parsed(base_dir, &parsed)
        .await
        .map_err(MkpathError::Create)
        .with_context(|| format!("Failed to create '{}' in {}", input.trim(), base_dir.display()))?;

    if json {
        return print_json(&CreateReport {
            created: true,
            directory: Some(directory),
            file,
        });
    }

    match file {
        Some(file) => print_status(status::SUCCESS, &format!("Created {}", file.display())),
        None => print_status(
            status::SUCCESS,
            &format!("Created {}{}", directory.display(), std::path::MAIN_SEPARATOR),
        ),
    }
    Ok(())
}

fn report_nothing(json: bool) -> Result<()> {
    if json {
        return print_json(&CreateReport {
            created: false,
            directory: None,
            file: None,
        });
    }
    print_status(status::INFO, "Nothing to create");
    Ok(())
}
