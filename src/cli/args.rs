//! Command-line argument definitions

use std::path::PathBuf;

use clap::Args;

/// Arguments for the inspect command
#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Source video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the suggest command
#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Source video file path
    #[arg(short, long)]
    pub input: PathBuf,

    /// API key for the suggestion service
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model to use (default from config)
    #[arg(long)]
    pub model: Option<String>,

    /// Output the clips in JSON format
    #[arg(long)]
    pub json: bool,

    /// Save the source info and clips to a session file
    #[arg(long)]
    pub save: Option<PathBuf>,
}

/// Arguments for the trim command
#[derive(Args, Debug)]
pub struct TrimArgs {
    /// Session file written by `suggest --save`
    #[arg(short, long)]
    pub session: PathBuf,

    /// Clip id to edit
    #[arg(short, long)]
    pub clip: String,

    /// New start time: seconds, MM:SS(.ms), or HH:MM:SS(.ms)
    #[arg(long)]
    pub start: Option<String>,

    /// New end time: seconds, MM:SS(.ms), or HH:MM:SS(.ms)
    #[arg(long)]
    pub end: Option<String>,
}

/// Arguments for the export command
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Session file written by `suggest --save`
    #[arg(short, long)]
    pub session: PathBuf,

    /// Clip id to export
    #[arg(short, long)]
    pub clip: String,

    /// Target aspect ratio as W:H (default from config)
    #[arg(short, long)]
    pub target: Option<String>,

    /// Input path override (default: the session's source path)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Output file name (default: derived from the input and clip id)
    #[arg(short, long)]
    pub output: Option<String>,

    /// Source width override, for sources probed elsewhere
    #[arg(long, requires = "source_height")]
    pub source_width: Option<u32>,

    /// Source height override
    #[arg(long, requires = "source_width")]
    pub source_height: Option<u32>,
}

/// Arguments for the preview command
#[derive(Args, Debug)]
pub struct PreviewArgs {
    /// Session file written by `suggest --save`
    #[arg(short, long)]
    pub session: PathBuf,

    /// Clip id to preview
    #[arg(short, long)]
    pub clip: String,

    /// Loop back to the clip start instead of pausing at the end
    #[arg(long = "loop")]
    pub loop_playback: bool,

    /// Boundary-check interval in milliseconds (default from config)
    #[arg(long)]
    pub tick_ms: Option<u64>,
}

/// Arguments for the caption command
#[derive(Args, Debug)]
pub struct CaptionArgs {
    /// Session file written by `suggest --save`
    #[arg(short, long)]
    pub session: PathBuf,

    /// Clip id
    #[arg(short, long)]
    pub clip: String,

    /// Caption language (en or hi)
    #[arg(short, long, default_value = "en")]
    pub lang: String,
}
