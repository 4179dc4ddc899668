//! CLI module for clipsmith
//!
//! This module handles command-line argument parsing and command execution.

use clap::{Parser, Subcommand};

pub mod args;
pub mod commands;

/// Clipsmith - AI-assisted shorts clipping
///
/// Suggests short-form clip ranges for a source video via a generative-AI
/// service, and lets you trim, preview, caption, and export them through a
/// synthesized command for an external transcoder.
#[derive(Parser)]
#[command(name = "clipsmith")]
#[command(about = "Clipsmith - AI-assisted shorts clipping")]
#[command(version)]
#[command(long_about = None)]
pub struct Cli {
    /// Logging level when RUST_LOG is unset
    #[arg(long, default_value = "info", global = true)]
    pub log_level: String,

    /// The command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Probe a source video's duration and dimensions
    Inspect(args::InspectArgs),
    /// Request AI clip suggestions for a source video
    Suggest(args::SuggestArgs),
    /// Edit a clip's time range inside a saved session
    Trim(args::TrimArgs),
    /// Synthesize the export command for a clip
    Export(args::ExportArgs),
    /// Rehearse a clip's playback timing
    Preview(args::PreviewArgs),
    /// Print a clip's caption
    Caption(args::CaptionArgs),
}
