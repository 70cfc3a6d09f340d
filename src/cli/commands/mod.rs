//! CLI command implementations
//!
//! Each command is implemented in its own submodule.

pub mod check;
pub mod create;
pub mod parse;
pub mod prompt;

use std::path::{Path, PathBuf};

use anyhow::Result;
use clap::Subcommand;

use crate::core::base_dir::resolve_base_dir;
use crate::core::global_config::GlobalConfig;
use crate::error::MkpathError;

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the folders (and trailing file) described by a relative path
    Create {
        /// Relative path, e.g. `src/core/` or `src/core/mod.rs`
        path: String,

        /// Directory (or a file inside it) to create the path in
        #[arg(short, long, env = "MKPATH_BASE")]
        base: Option<PathBuf>,
    },

    /// Validate a relative path without creating anything
    Check {
        /// Relative path to validate
        path: String,

        /// Directory (or a file inside it) the path is resolved against
        #[arg(short, long, env = "MKPATH_BASE")]
        base: Option<PathBuf>,
    },

    /// Show how a relative path is split into folders and a file
    Parse {
        /// Relative path to parse
        path: String,

        /// Directory the path is resolved against
        #[arg(short, long, env = "MKPATH_BASE")]
        base: Option<PathBuf>,
    },

    /// Ask for paths interactively, validating each entry
    Prompt {
        /// Directory (or a file inside it) to create paths in
        #[arg(short, long, env = "MKPATH_BASE")]
        base: Option<PathBuf>,

        /// Workspace root used to shorten the prompt label
        #[arg(short, long)]
        workspace: Option<PathBuf>,
    },
}

impl Commands {
    /// Execute the command
    pub async fn run(self, config: &GlobalConfig) -> Result<()> {
        let current_dir = std::env::current_dir().map_err(MkpathError::from)?;
        match self {
            Self::Create { path, base } => {
                let base_dir = resolve_base(&current_dir, base).await?;
                create::execute(&base_dir, &path).await
            }
            Self::Check { path, base } => {
                let base_dir = resolve_base(&current_dir, base).await?;
                check::execute(&base_dir, &path).await
            }
            Self::Parse { path, base } => {
                // Parsing never touches the filesystem, so the base need not exist
                let base_dir = absolutize(&current_dir, base.unwrap_or_else(|| current_dir.clone()));
                parse::execute(&base_dir, &path)
            }
            Self::Prompt { base, workspace } => {
                let base_dir = resolve_base(&current_dir, base).await?;
                let workspace = absolutize(&current_dir, workspace.unwrap_or_else(|| current_dir.clone()));
                prompt::execute(&base_dir, &workspace, config.prompt_max_chars()).await
            }
        }
    }
}

fn absolutize(current_dir: &Path, path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        path
    } else {
        current_dir.join(path)
    }
}

/// Turn the `--base` argument into an existing absolute directory
async fn resolve_base(current_dir: &Path, base: Option<PathBuf>) -> Result<PathBuf> {
    let start = absolutize(current_dir, base.unwrap_or_else(|| current_dir.to_path_buf()));
    let base_dir = resolve_base_dir(&start).await.map_err(MkpathError::from)?;
    tracing::debug!(base = %base_dir.display(), "Resolved base directory");
    Ok(base_dir)
}
