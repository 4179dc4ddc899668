//! AI clip suggestion: prompt construction and the validating parse of the
//! model's output into well-formed clips.
//!
//! The service declares a JSON response schema, but the output is still
//! treated as untrusted: missing text fields get fallbacks, and any candidate
//! violating the range invariant or the minimum clip length is dropped.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::domain::model::{Captions, Clip};
use crate::domain::rules;
use crate::error::Banner;
use crate::ports::SuggestPort;

pub const FALLBACK_TITLE: &str = "Untitled Clip";
pub const FALLBACK_DESCRIPTION: &str = "No description provided.";
pub const FALLBACK_CAPTION_EN: &str = "No English caption generated.";
pub const FALLBACK_CAPTION_HI: &str = "कोई हिंदी कैप्शन नहीं बनाया गया।";

/// Failure modes of an analysis round-trip. All of them normalize into a
/// single "Analysis Failed" banner; no retry is attempted.
#[derive(Error, Debug)]
pub enum SuggestError {
    #[error("the suggestion service call failed: {0}")]
    Service(String),

    #[error("the AI returned an empty response")]
    EmptyResponse,

    #[error("the AI response is not in the expected format (array)")]
    NotAnArray,

    #[error("the AI returned an invalid response: {0}")]
    Malformed(String),
}

impl SuggestError {
    /// The single user-facing banner every analysis failure collapses into
    pub fn banner(&self) -> Banner {
        Banner::analysis_failed(format!(
            "{}. Please try analyzing the video again.",
            self
        ))
    }
}

/// Natural-language instruction sent to the model, carrying the rounded
/// source duration.
pub fn build_prompt(duration_seconds: f64) -> String {
    format!(
        "Analyze a video with a total duration of {} seconds. Identify 3-5 distinct, \
         high-impact moments suitable for viral short-form videos. For each clip, provide: \
         a precise start and end time in seconds (each clip must be between 15 to 60 seconds \
         long), a catchy title, a short description, and viral captions in both English and \
         Hindi with hashtags. Ensure clips do not exceed the video duration. Output as a \
         valid JSON array.",
        duration_seconds.round() as i64
    )
}

/// Raw candidate shape as the model emits it. Every field is optional so a
/// partially-formed object degrades to fallbacks instead of a parse failure.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawClip {
    start_time: Option<f64>,
    end_time: Option<f64>,
    title: Option<String>,
    description: Option<String>,
    captions: Option<RawCaptions>,
}

#[derive(Debug, Deserialize)]
struct RawCaptions {
    en: Option<String>,
    hi: Option<String>,
}

/// Validating parse of the raw model output. Coerces each candidate to the
/// Clip shape with fallbacks, then filters out anything violating the range
/// invariant or the minimum duration against the given source duration.
pub fn parse_suggestions(body: &str, source_duration: f64) -> Result<Vec<Clip>, SuggestError> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return Err(SuggestError::EmptyResponse);
    }

    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(|e| SuggestError::Malformed(e.to_string()))?;
    if !value.is_array() {
        return Err(SuggestError::NotAnArray);
    }
    let candidates: Vec<RawClip> =
        serde_json::from_value(value).map_err(|e| SuggestError::Malformed(e.to_string()))?;

    let stamp = chrono::Utc::now().timestamp_millis();
    let total = candidates.len();

    let clips: Vec<Clip> = candidates
        .into_iter()
        .enumerate()
        .filter_map(|(index, raw)| {
            let start = raw.start_time.unwrap_or(f64::NAN);
            let end = raw.end_time.unwrap_or(f64::NAN);
            if !rules::candidate_is_acceptable(start, end, source_duration) {
                debug!(index, start, end, "dropping candidate outside the range invariant");
                return None;
            }
            let captions = raw.captions.unwrap_or(RawCaptions { en: None, hi: None });
            Some(Clip {
                id: format!("clip-{}-{}", index, stamp),
                start_time: start,
                end_time: end,
                title: non_empty_or(raw.title, FALLBACK_TITLE),
                description: non_empty_or(raw.description, FALLBACK_DESCRIPTION),
                captions: Captions {
                    en: non_empty_or(captions.en, FALLBACK_CAPTION_EN),
                    hi: non_empty_or(captions.hi, FALLBACK_CAPTION_HI),
                },
            })
        })
        .collect();

    debug!(total, kept = clips.len(), "validated AI candidates");
    Ok(clips)
}

fn non_empty_or(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(s) if !s.trim().is_empty() => s,
        _ => fallback.to_string(),
    }
}

/// Full analysis round-trip: ask the port for suggestions and run the
/// validating parse over whatever comes back.
pub async fn generate_clips(
    port: &dyn SuggestPort,
    source_duration: f64,
) -> Result<Vec<Clip>, SuggestError> {
    let body = port.request_suggestions(source_duration).await?;
    parse_suggestions(&body, source_duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_carries_rounded_duration() {
        let prompt = build_prompt(119.6);
        assert!(prompt.contains("total duration of 120 seconds"));
        assert!(prompt.contains("JSON array"));
    }

    #[test]
    fn test_empty_body_is_normalized() {
        assert!(matches!(
            parse_suggestions("   ", 120.0),
            Err(SuggestError::EmptyResponse)
        ));
    }

    #[test]
    fn test_non_array_body_is_normalized() {
        assert!(matches!(
            parse_suggestions(r#"{"startTime": 1}"#, 120.0),
            Err(SuggestError::NotAnArray)
        ));
        assert!(matches!(
            parse_suggestions("not json", 120.0),
            Err(SuggestError::Malformed(_))
        ));
    }

    #[test]
    fn test_fallbacks_for_missing_fields() {
        let body = r#"[{"startTime": 10, "endTime": 40}]"#;
        let clips = parse_suggestions(body, 120.0).unwrap();
        assert_eq!(clips.len(), 1);
        assert_eq!(clips[0].title, FALLBACK_TITLE);
        assert_eq!(clips[0].description, FALLBACK_DESCRIPTION);
        assert_eq!(clips[0].captions.en, FALLBACK_CAPTION_EN);
        assert_eq!(clips[0].captions.hi, FALLBACK_CAPTION_HI);
        assert!(clips[0].id.starts_with("clip-0-"));
    }

    #[test]
    fn test_banner_is_always_analysis_failed() {
        for err in [
            SuggestError::Service("boom".into()),
            SuggestError::EmptyResponse,
            SuggestError::NotAnArray,
        ] {
            assert_eq!(err.banner().title, "Analysis Failed");
        }
    }
}
