//! Export-command synthesis
//!
//! Derives the transcoding command string for an external tool from a clip's
//! time range, the source's native aspect ratio, and a target aspect ratio.
//! Pure string derivation: the command is surfaced for the user to run
//! themselves, never executed in-process.

use crate::domain::model::{AspectRatio, Clip, SourceVideo, TimeSpec};
use crate::domain::rules::{self, CropDecision};

/// Derived export directive: recomputed per call, never persisted
#[derive(Debug, Clone, PartialEq)]
pub struct ExportPlan {
    /// Center-crop filter expression, present when the ratios differ
    pub crop_filter: Option<String>,
    /// Cropping requires re-encoding the video stream
    pub reencode: bool,
    /// The full command line to hand to the external transcoder
    pub command: String,
}

/// Build the export plan for one clip.
///
/// If the source ratio matches the target within tolerance the command is a
/// direct time-range extraction with stream copy. Otherwise a center-crop
/// filter is applied: a source wider than the target loses its sides
/// (`crop=ih*R:ih`), a narrower one loses top and bottom (`crop=iw:iw/R`).
pub fn plan_export(
    clip: &Clip,
    source: &SourceVideo,
    target: AspectRatio,
    input: &str,
    output: &str,
) -> ExportPlan {
    let ratio = format_ratio(target.ratio());
    let crop_filter = match rules::crop_decision(source.aspect_ratio(), target.ratio()) {
        CropDecision::None => None,
        CropDecision::Sides => Some(format!("crop=ih*{}:ih", ratio)),
        CropDecision::TopBottom => Some(format!("crop=iw:iw/{}", ratio)),
    };

    let start = TimeSpec::from_seconds(clip.start_time).format_timestamp();
    let end = TimeSpec::from_seconds(clip.end_time).format_timestamp();

    let command = match &crop_filter {
        None => format!(
            "ffmpeg -i \"{}\" -ss {} -to {} -c copy \"{}\"",
            input, start, end, output
        ),
        Some(filter) => format!(
            "ffmpeg -i \"{}\" -ss {} -to {} -vf \"{}\" -c:a copy \"{}\"",
            input, start, end, filter, output
        ),
    };

    ExportPlan {
        reencode: crop_filter.is_some(),
        crop_filter,
        command,
    }
}

/// Default output filename for a clip: `<stem>_<clip id>.mp4`
pub fn default_output_name(input: &str, clip: &Clip) -> String {
    let stem = std::path::Path::new(input)
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "clip".to_string());
    format!("{}_{}.mp4", stem, clip.id)
}

/// Format a ratio for the crop expression: four decimal places, trailing
/// zeros trimmed (9:16 -> "0.5625", 16:9 -> "1.7778", 1:1 -> "1")
fn format_ratio(ratio: f64) -> String {
    let formatted = format!("{:.4}", ratio);
    formatted
        .trim_end_matches('0')
        .trim_end_matches('.')
        .to_string()
}
