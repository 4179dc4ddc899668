// Domain models - Core types and data structures

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::errors::DomainError;
use crate::domain::rules;

/// Time specification with precision - represents time in seconds with fractional precision
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TimeSpec {
    pub seconds: f64,
}

impl TimeSpec {
    /// Create a new TimeSpec from seconds
    pub fn from_seconds(seconds: f64) -> Self {
        Self { seconds }
    }

    /// Parse a time string as plain seconds, MM:SS(.ms), or HH:MM:SS(.ms)
    pub fn parse(time_str: &str) -> Result<Self, DomainError> {
        let trimmed = time_str.trim();

        if let Ok(seconds) = trimmed.parse::<f64>() {
            if seconds < 0.0 {
                return Err(DomainError::BadArgs("Time cannot be negative".to_string()));
            }
            return Ok(Self::from_seconds(seconds));
        }

        let parts: Vec<&str> = trimmed.split(':').collect();
        match parts.len() {
            2 => {
                let minutes = parts[0]
                    .parse::<u32>()
                    .map_err(|_| DomainError::BadArgs("Invalid minutes format".to_string()))?;
                let seconds = parts[1]
                    .parse::<f64>()
                    .map_err(|_| DomainError::BadArgs("Invalid seconds format".to_string()))?;
                if seconds >= 60.0 {
                    return Err(DomainError::BadArgs("Seconds must be less than 60".to_string()));
                }
                Ok(Self::from_seconds(minutes as f64 * 60.0 + seconds))
            }
            3 => {
                let hours = parts[0]
                    .parse::<u32>()
                    .map_err(|_| DomainError::BadArgs("Invalid hours format".to_string()))?;
                let minutes = parts[1]
                    .parse::<u32>()
                    .map_err(|_| DomainError::BadArgs("Invalid minutes format".to_string()))?;
                let seconds = parts[2]
                    .parse::<f64>()
                    .map_err(|_| DomainError::BadArgs("Invalid seconds format".to_string()))?;
                if minutes >= 60 {
                    return Err(DomainError::BadArgs("Minutes must be less than 60".to_string()));
                }
                if seconds >= 60.0 {
                    return Err(DomainError::BadArgs("Seconds must be less than 60".to_string()));
                }
                Ok(Self::from_seconds(
                    hours as f64 * 3600.0 + minutes as f64 * 60.0 + seconds,
                ))
            }
            _ => Err(DomainError::BadArgs(
                "Invalid time format. Supported formats: seconds (e.g. 123.45), MM:SS.ms, HH:MM:SS.ms"
                    .to_string(),
            )),
        }
    }

    /// Format as full HH:MM:SS.mmm, the form the transcoder command expects.
    /// Rounding happens on total milliseconds so a carry propagates up
    /// through seconds, minutes, and hours.
    pub fn format_timestamp(&self) -> String {
        let total_millis = (self.seconds * 1000.0).round() as u64;
        let milliseconds = total_millis % 1000;
        let total_seconds = total_millis / 1000;
        let hours = total_seconds / 3600;
        let minutes = (total_seconds / 60) % 60;
        let seconds = total_seconds % 60;
        format!(
            "{:02}:{:02}:{:02}.{:03}",
            hours, minutes, seconds, milliseconds
        )
    }

    /// Format as MM:SS for compact display on clip cards
    pub fn format_compact(&self) -> String {
        let minutes = (self.seconds / 60.0) as u32;
        let seconds = (self.seconds % 60.0) as u32;
        format!("{:02}:{:02}", minutes, seconds)
    }
}

impl fmt::Display for TimeSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_timestamp())
    }
}

/// Caption pair keyed by language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Captions {
    pub en: String,
    pub hi: String,
}

impl Captions {
    pub fn get(&self, language: CaptionLanguage) -> &str {
        match language {
            CaptionLanguage::En => &self.en,
            CaptionLanguage::Hi => &self.hi,
        }
    }
}

/// Supported caption languages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptionLanguage {
    En,
    Hi,
}

impl FromStr for CaptionLanguage {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(CaptionLanguage::En),
            "hi" | "hindi" => Ok(CaptionLanguage::Hi),
            _ => Err(DomainError::BadArgs(format!(
                "Unknown caption language: {}. Valid languages: en, hi",
                s
            ))),
        }
    }
}

/// An identified time range over the source video with AI-authored metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Clip {
    pub id: String,
    pub start_time: f64,
    pub end_time: f64,
    pub title: String,
    pub description: String,
    pub captions: Captions,
}

impl Clip {
    /// Clip length in seconds
    pub fn duration(&self) -> f64 {
        self.end_time - self.start_time
    }

    /// Apply a proposed time-range edit. The edit is accepted only if
    /// `0 <= start < end <= source_duration` still holds; otherwise the clip
    /// is left unchanged and `false` is returned. No clamping or snapping.
    pub fn try_set_range(&mut self, start: f64, end: f64, source_duration: f64) -> bool {
        if !rules::range_is_valid(start, end, source_duration) {
            return false;
        }
        self.start_time = start;
        self.end_time = end;
        true
    }
}

/// Source video reference: duration and native dimensions, captured once at
/// probe time and read-only afterward
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceVideo {
    pub path: String,
    pub duration_seconds: f64,
    pub width: u32,
    pub height: u32,
}

impl SourceVideo {
    /// Create a new source reference with validation
    pub fn new(
        path: String,
        duration_seconds: f64,
        width: u32,
        height: u32,
    ) -> Result<Self, DomainError> {
        if width == 0 || height == 0 {
            return Err(DomainError::BadArgs(
                "Video dimensions cannot be zero".to_string(),
            ));
        }
        if duration_seconds <= 0.0 {
            return Err(DomainError::BadArgs(
                "Video duration must be positive".to_string(),
            ));
        }
        Ok(Self {
            path,
            duration_seconds,
            width,
            height,
        })
    }

    /// Native aspect ratio (width / height)
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Classify the source into the closest standard frame shape
    pub fn classify_ratio(&self) -> AspectRatio {
        AspectRatio::classify(self.width, self.height)
    }
}

/// Target frame shape as a width:height pair
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub w: u32,
    pub h: u32,
}

impl AspectRatio {
    pub const WIDE: AspectRatio = AspectRatio { w: 16, h: 9 };
    pub const TALL: AspectRatio = AspectRatio { w: 9, h: 16 };
    pub const SQUARE: AspectRatio = AspectRatio { w: 1, h: 1 };

    pub fn new(w: u32, h: u32) -> Result<Self, DomainError> {
        if w == 0 || h == 0 {
            return Err(DomainError::BadArgs(
                "Aspect ratio components cannot be zero".to_string(),
            ));
        }
        Ok(Self { w, h })
    }

    /// Numeric ratio (width / height)
    pub fn ratio(&self) -> f64 {
        self.w as f64 / self.h as f64
    }

    /// Pick the standard shape closest to the given native dimensions:
    /// clearly landscape -> 16:9, clearly portrait -> 9:16, otherwise 1:1
    pub fn classify(width: u32, height: u32) -> AspectRatio {
        let ratio = width as f64 / height as f64;
        if ratio > 1.2 {
            AspectRatio::WIDE
        } else if ratio < 0.8 {
            AspectRatio::TALL
        } else {
            AspectRatio::SQUARE
        }
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.w, self.h)
    }
}

impl FromStr for AspectRatio {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (w, h) = s.split_once(':').ok_or_else(|| {
            DomainError::BadArgs(format!("Invalid aspect ratio: {}. Expected W:H, e.g. 9:16", s))
        })?;
        let w = w
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::BadArgs(format!("Invalid aspect ratio width: {}", s)))?;
        let h = h
            .trim()
            .parse::<u32>()
            .map_err(|_| DomainError::BadArgs(format!("Invalid aspect ratio height: {}", s)))?;
        AspectRatio::new(w, h)
    }
}
