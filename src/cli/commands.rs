//! Command implementations

use std::io::Write;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::Result;
use tracing::{debug, info};

use crate::adapters::{FfprobeAdapter, GeminiClient};
use crate::cli::args::{
    CaptionArgs, ExportArgs, InspectArgs, PreviewArgs, SuggestArgs, TrimArgs,
};
use crate::config::Config;
use crate::domain::model::{AspectRatio, CaptionLanguage, Clip, SourceVideo, TimeSpec};
use crate::error::ClipsmithError;
use crate::export;
use crate::ports::ProbePort;
use crate::preview::{ClockTransport, MediaTransport, PlayMode, PreviewController};
use crate::session::{Action, Session, SessionFile};
use crate::suggest;

/// File extensions accepted as video input
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "mkv", "webm", "avi", "m4v", "mpg", "mpeg"];

/// Execute the inspect command
pub async fn inspect(args: InspectArgs) -> Result<()> {
    info!("Starting inspect operation");
    let source = load_source(&args.input).await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&source)?);
    } else {
        println!("Source Video");
        println!("============");
        println!("File: {}", source.path);
        println!("Duration: {:.3}s", source.duration_seconds);
        println!("Dimensions: {}x{}", source.width, source.height);
        println!(
            "Aspect ratio: {:.4} (closest standard: {})",
            source.aspect_ratio(),
            source.classify_ratio()
        );
    }
    Ok(())
}

/// Execute the suggest command: probe the source, run one analysis
/// round-trip through the session store, and render the surviving clips
pub async fn suggest(args: SuggestArgs, config: &Config) -> Result<()> {
    info!("Starting suggest operation");
    let source = load_source(&args.input).await?;
    info!(
        duration = source.duration_seconds,
        width = source.width,
        height = source.height,
        "source loaded"
    );

    let api_key = match args.api_key {
        Some(key) => key,
        None => config.api_key()?,
    };
    let model = args.model.unwrap_or_else(|| config.model.clone());
    let mut client = GeminiClient::new(api_key, model);
    if let Some(endpoint) = &config.endpoint {
        client = client.with_endpoint(endpoint.clone());
    }

    let mut session = Session::default();
    session.apply(Action::SourceLoaded(source.clone()));
    session.apply(Action::AnalysisStarted);
    let generation = session.generation();

    let outcome = suggest::generate_clips(&client, source.duration_seconds)
        .await
        .map_err(|e| e.banner());
    session.apply(Action::AnalysisFinished { generation, outcome });

    if let Some(banner) = session.banner.clone() {
        return Err(anyhow::anyhow!("{}", banner));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&session.clips)?);
    } else {
        display_clips(&session.clips, source.classify_ratio());
    }

    if let Some(path) = &args.save {
        SessionFile::new(source, session.clips.clone()).save(path)?;
        info!(path = %path.display(), "session saved");
    }
    Ok(())
}

/// Execute the trim command. An edit violating the range invariant is a
/// silent no-op: the clip keeps its prior values and the command still
/// succeeds.
pub fn trim(args: TrimArgs) -> Result<()> {
    info!("Starting trim operation");
    let mut file = SessionFile::load(&args.session)?;
    let source_duration = file.source.duration_seconds;

    let clip = file.clip_mut(&args.clip)?;
    let start = match &args.start {
        Some(s) => TimeSpec::parse(s)?.seconds,
        None => clip.start_time,
    };
    let end = match &args.end {
        Some(e) => TimeSpec::parse(e)?.seconds,
        None => clip.end_time,
    };
    if clip.try_set_range(start, end, source_duration) {
        info!(clip = %args.clip, start, end, "trim edit applied");
    } else {
        debug!(clip = %args.clip, start, end, "trim edit rejected, keeping prior range");
    }
    let (current_start, current_end) = (clip.start_time, clip.end_time);

    file.save(&args.session)?;
    println!(
        "{}  {} - {}",
        args.clip,
        TimeSpec::from_seconds(current_start).format_timestamp(),
        TimeSpec::from_seconds(current_end).format_timestamp()
    );
    Ok(())
}

/// Execute the export command: print the transcoder command line for the
/// clip. The command is never run here.
pub fn export(args: ExportArgs, config: &Config) -> Result<()> {
    info!("Starting export operation");
    let file = SessionFile::load(&args.session)?;
    let clip = file.clip(&args.clip)?;

    let source = match (args.source_width, args.source_height) {
        (Some(width), Some(height)) => SourceVideo::new(
            file.source.path.clone(),
            file.source.duration_seconds,
            width,
            height,
        )?,
        _ => file.source.clone(),
    };

    let target: AspectRatio = args
        .target
        .as_deref()
        .unwrap_or(&config.default_target)
        .parse()?;
    let input = args
        .input
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| source.path.clone());
    let output = args
        .output
        .unwrap_or_else(|| export::default_output_name(&input, clip));

    let plan = export::plan_export(clip, &source, target, &input, &output);
    if plan.reencode {
        eprintln!(
            "note: cropping to {} requires re-encoding the video stream",
            target
        );
    }
    println!("{}", plan.command);
    Ok(())
}

/// Execute the preview command: rehearse the clip's timing against a
/// clock-backed transport, enforcing the end boundary by polling
pub async fn preview(args: PreviewArgs, config: &Config) -> Result<()> {
    info!("Starting preview operation");
    let file = SessionFile::load(&args.session)?;
    let clip = file.clip(&args.clip)?.clone();
    let mode = if args.loop_playback {
        PlayMode::Loop
    } else {
        PlayMode::Once
    };
    let tick = Duration::from_millis(args.tick_ms.unwrap_or(config.poll_interval_ms));

    println!(
        "Previewing clip: {} ({} - {})",
        clip.title,
        TimeSpec::from_seconds(clip.start_time).format_compact(),
        TimeSpec::from_seconds(clip.end_time).format_compact()
    );

    let transport: Arc<Mutex<dyn MediaTransport>> = Arc::new(Mutex::new(ClockTransport::new()));
    let render_task = tokio::spawn(render_position(transport.clone()));

    let mut controller =
        PreviewController::start_with_tick(transport, clip.start_time, clip.end_time, mode, tick);
    match mode {
        PlayMode::Once => {
            controller.finished().await;
            render_task.abort();
            eprintln!();
            println!("Preview reached the end of the clip");
        }
        PlayMode::Loop => {
            info!("looping preview; press Ctrl-C to stop");
            tokio::signal::ctrl_c().await?;
            render_task.abort();
            eprintln!();
        }
    }
    controller.stop();
    Ok(())
}

/// Execute the caption command: print one caption for piping into a
/// clipboard tool
pub fn caption(args: CaptionArgs) -> Result<()> {
    let file = SessionFile::load(&args.session)?;
    let clip = file.clip(&args.clip)?;
    let language: CaptionLanguage = args.lang.parse()?;
    println!("{}", clip.captions.get(language));
    Ok(())
}

/// Validate and probe an input path, mapping failures to user-facing banners
async fn load_source(input: &Path) -> Result<SourceVideo> {
    validate_input(input).map_err(banner_error)?;
    let probe = FfprobeAdapter::new();
    probe
        .probe(input)
        .await
        .map_err(ClipsmithError::from)
        .map_err(banner_error)
}

/// Reject unsupported input before any state changes: URLs and non-video
/// files immediately, missing files as a load failure
fn validate_input(input: &Path) -> Result<(), ClipsmithError> {
    let display = input.display().to_string();
    if display.starts_with("http://") || display.starts_with("https://") {
        return Err(ClipsmithError::UnsupportedInput {
            message: "Pasting video links is not supported. Provide a local file path."
                .to_string(),
        });
    }
    let is_video = input
        .extension()
        .and_then(|e| e.to_str())
        .map(|ext| VIDEO_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false);
    if !is_video {
        return Err(ClipsmithError::UnsupportedInput {
            message: format!("{} does not look like a video file.", display),
        });
    }
    if !input.exists() {
        return Err(ClipsmithError::InputFileNotFound { path: display });
    }
    Ok(())
}

fn banner_error(err: ClipsmithError) -> anyhow::Error {
    anyhow::anyhow!("{}", err.banner())
}

/// Render clip cards in human-readable format
fn display_clips(clips: &[Clip], ratio: AspectRatio) {
    println!("AI Generated Shorts");
    println!("===================");
    if clips.is_empty() {
        println!("No usable clip suggestions survived validation.");
        return;
    }
    for clip in clips {
        println!();
        println!("[{}] {}", clip.id, clip.title);
        println!("  {}", clip.description);
        println!(
            "  {} - {}  (~{}s, {})",
            TimeSpec::from_seconds(clip.start_time).format_compact(),
            TimeSpec::from_seconds(clip.end_time).format_compact(),
            clip.duration().round() as i64,
            ratio
        );
        println!("  EN: {}", clip.captions.en);
        println!("  HI: {}", clip.captions.hi);
    }
}

/// Print the transport position on a half-second cadence until aborted
async fn render_position(transport: Arc<Mutex<dyn MediaTransport>>) {
    let mut ticker = tokio::time::interval(Duration::from_millis(500));
    loop {
        ticker.tick().await;
        let position = transport
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .position();
        eprint!("\r  position: {:7.2}s", position);
        let _ = std::io::stderr().flush();
    }
}
