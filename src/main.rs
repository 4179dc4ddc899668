//! Clipsmith CLI
//!
//! AI-assisted shorts clipping: suggest clip ranges for a source video,
//! trim them, rehearse their timing, and synthesize export commands for an
//! external transcoder.
//!
//! # Usage
//!
//! ```bash
//! clipsmith suggest --input talk.mp4 --save session.json
//! clipsmith trim --session session.json --clip clip-0-17356 --start 12.5
//! clipsmith export --session session.json --clip clip-0-17356 --target 9:16
//! clipsmith preview --session session.json --clip clip-0-17356 --loop
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clipsmith::cli::{commands, Cli, Commands};
use clipsmith::config::Config;

/// Main entry point for the clipsmith CLI
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&cli.log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::load()?;

    match cli.command {
        Commands::Inspect(args) => commands::inspect(args).await,
        Commands::Suggest(args) => commands::suggest(args, &config).await,
        Commands::Trim(args) => commands::trim(args),
        Commands::Export(args) => commands::export(args, &config),
        Commands::Preview(args) => commands::preview(args, &config).await,
        Commands::Caption(args) => commands::caption(args),
    }
}
