//! Command-line interface module
//!
//! Argument parsing and terminal output for mkpath. Parsing, validation and
//! creation live in [`crate::core`].

pub mod commands;
pub mod output;

use anyhow::Result;
use clap::Parser;

use crate::core::global_config::GlobalConfig;
use commands::Commands;

/// mkpath - create a directory hierarchy from one relative path
///
/// A path ending in a separator creates folders only; otherwise its last
/// component becomes an empty file.
#[derive(Parser, Debug)]
#[command(name = "mkpath")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log to stderr while working (-v for created entries, -vv for every step)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Print nothing on success; rejections and failures are still reported
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print create/check/parse results as JSON on stdout
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Dispatch to the chosen subcommand
    pub async fn run(self, config: &GlobalConfig) -> Result<()> {
        if let Some(cmd) = self.command {
            cmd.run(config).await
        } else {
            use clap::CommandFactory;
            Self::command().print_help()?;
            Ok(())
        }
    }
}
