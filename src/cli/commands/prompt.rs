//! CLI implementation for `mkpath prompt` command
//!
//! Line-based stand-in for an editor input box: every entered line is
//! validated, rejections are shown inline and the user is asked again. An
//! empty line or end of input cancels without touching the filesystem.

use std::path::Path;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::cli::commands::create;
use crate::cli::output::{print_status, status};
use crate::config::defaults::PROMPT_FOLDER;
use crate::core::base_dir::relative_label;
use crate::core::prompt::{placeholder, prompt_label, prompt_start};
use crate::core::validator::{validate, Validation};

/// Execute the prompt command
pub async fn execute(base_dir: &Path, workspace: &Path, max_chars: usize) -> Result<()> {
    let location = relative_label(base_dir, workspace);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut start = PROMPT_FOLDER;

    eprintln!("{}", placeholder());
    loop {
        eprint!("{} > ", prompt_label(start, &location, max_chars));

        let Some(line) = lines
            .next_line()
            .await
            .context("Failed to read from stdin")?
        else {
            eprintln!();
            print_status(status::WARNING, "Cancelled");
            return Ok(());
        };

        match validate(base_dir, &line).await {
            Validation::NoOp => {
                print_status(status::WARNING, "Cancelled");
                return Ok(());
            }
            Validation::Rejected(rejection) => {
                tracing::debug!(input = %line, "Prompt input rejected");
                eprintln!("{} {rejection}", status::ERROR);
                start = prompt_start(&line);
            }
            Validation::Pass => return create::execute(base_dir, &line).await,
        }
    }
}
