//! FFprobe adapter for source-video probing
//!
//! Shells out to ffprobe with JSON output; no in-process media decoding.

use std::path::Path;

use async_trait::async_trait;
use tokio::process::Command;
use tracing::debug;

use crate::domain::errors::DomainError;
use crate::domain::model::SourceVideo;
use crate::ports::ProbePort;

/// FFprobe-based probe adapter
pub struct FfprobeAdapter {
    binary: String,
}

impl FfprobeAdapter {
    pub fn new() -> Self {
        Self {
            binary: "ffprobe".to_string(),
        }
    }

    /// Use an explicit ffprobe binary path
    pub fn with_binary(binary: impl Into<String>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for FfprobeAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProbePort for FfprobeAdapter {
    async fn probe(&self, path: &Path) -> Result<SourceVideo, DomainError> {
        debug!(path = %path.display(), "probing source video");
        let output = Command::new(&self.binary)
            .args([
                "-v",
                "quiet",
                "-print_format",
                "json",
                "-show_format",
                "-show_streams",
                "-select_streams",
                "v:0",
            ])
            .arg(path)
            .output()
            .await
            .map_err(|e| DomainError::ProbeFail(format!("failed to run ffprobe: {}", e)))?;

        if !output.status.success() {
            return Err(DomainError::ProbeFail(format!(
                "ffprobe failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        parse_probe_output(&output.stdout, path)
    }
}

fn parse_probe_output(stdout: &[u8], path: &Path) -> Result<SourceVideo, DomainError> {
    let json: serde_json::Value = serde_json::from_slice(stdout)
        .map_err(|e| DomainError::ProbeFail(format!("unparsable ffprobe output: {}", e)))?;

    let stream = json["streams"]
        .as_array()
        .and_then(|s| s.first())
        .ok_or_else(|| DomainError::ProbeFail("no video stream found".to_string()))?;

    let width = stream["width"].as_u64().unwrap_or(0) as u32;
    let height = stream["height"].as_u64().unwrap_or(0) as u32;

    // ffprobe reports durations as strings; prefer the container's value
    let duration = json["format"]["duration"]
        .as_str()
        .and_then(|d| d.parse::<f64>().ok())
        .or_else(|| {
            stream["duration"]
                .as_str()
                .and_then(|d| d.parse::<f64>().ok())
        })
        .unwrap_or(0.0);

    SourceVideo::new(path.display().to_string(), duration, width, height)
}
