//! CLI implementation for `mkpath check` command
//!
//! Runs validation only. A rejected path makes the command fail so scripts
//! can branch on the exit code.

use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use crate::cli::output::{print_json, print_status, status, OutputConfig};
use crate::core::validator::{validate, Validation};
use crate::error::MkpathError;

/// JSON report of a check run
#[derive(Debug, Serialize)]
pub struct CheckReport {
    /// `pass`, `noop` or `rejected`
    pub status: &'static str,
    /// Rejection message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Execute the check command
pub async fn execute(base_dir: &Path, input: &str) -> Result<()> {
    let validation = validate(base_dir, input).await;

    if OutputConfig::current().json {
        let report = CheckReport {
            status: match validation {
                Validation::NoOp => "noop",
                Validation::Pass => "pass",
                Validation::Rejected(_) => "rejected",
            },
            message: validation.message(),
        };
        print_json(&report)?;
    }

    match validation {
        Validation::NoOp => {
            print_status(status::INFO, "Nothing to check");
            Ok(())
        }
        Validation::Pass => {
            print_status(status::SUCCESS, &format!("'{}' can be created", input.trim()));
            Ok(())
        }
        Validation::Rejected(rejection) => Err(MkpathError::Rejected(rejection).into()),
    }
}
