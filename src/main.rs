//! mkpath CLI
//!
//! Entry point for the mkpath command-line application.

use anyhow::Result;
use clap::Parser;

use mkpath::cli::output::{display_error, OutputConfig};
use mkpath::cli::Cli;
use mkpath::core::global_config::GlobalConfig;
use mkpath::error::MkpathError;
use mkpath::infra::dirs::MkpathDirs;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing subscriber; RUST_LOG directives are added on top
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(OutputConfig::new(false, false, cli.verbose).log_level().into()),
        )
        .init();

    let global_config = match GlobalConfig::load(&MkpathDirs::new()) {
        Ok(config) => config,
        Err(e) => {
            display_error(&anyhow::Error::from(MkpathError::from(e)));
            std::process::exit(1);
        }
    };

    // Apply output configuration globally
    let output_config = OutputConfig::new(
        cli.quiet || global_config.quiet(),
        cli.json || global_config.json(),
        cli.verbose,
    );
    output_config.apply_global();

    // Run the command and handle errors
    match cli.run(&global_config).await {
        Ok(()) => Ok(()),
        Err(e) => {
            display_error(&e);
            std::process::exit(1);
        }
    }
}
