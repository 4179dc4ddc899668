//! Session state store
//!
//! All mutable interaction state lives in one explicitly-owned `Session`
//! value, updated through pure action application instead of ambient
//! globals. Analysis results carry a generation token so a stale response
//! arriving after a reset cannot overwrite fresher state.

use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::model::{Clip, SourceVideo};
use crate::error::{Banner, ClipsmithError, ClipsmithResult};

/// One user action against the session
#[derive(Debug, Clone)]
pub enum Action {
    /// A source video finished loading; prior clips and flags are discarded
    SourceLoaded(SourceVideo),
    /// An analysis round-trip began; bumps the generation token
    AnalysisStarted,
    /// An analysis round-trip ended. Ignored unless its generation matches
    /// the session's current one.
    AnalysisFinished {
        generation: u64,
        outcome: Result<Vec<Clip>, Banner>,
    },
    /// Trim edit against one clip; rejected edits are no-ops
    ClipRangeEdited { id: String, start: f64, end: f64 },
    /// A clip was selected for preview
    PreviewSelected(String),
    /// Preview deselected
    PreviewCleared,
    /// The error banner was dismissed
    BannerDismissed,
    /// Everything discarded, source released
    Reset,
}

/// Explicit interaction state
#[derive(Debug, Default)]
pub struct Session {
    pub source: Option<SourceVideo>,
    pub clips: Vec<Clip>,
    pub loading: bool,
    pub banner: Option<Banner>,
    pub active_clip: Option<String>,
    generation: u64,
}

impl Session {
    /// Current analysis generation token
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Apply one action to the session
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::SourceLoaded(source) => {
                self.clips.clear();
                self.loading = false;
                self.banner = None;
                self.active_clip = None;
                self.source = Some(source);
            }
            Action::AnalysisStarted => {
                self.generation += 1;
                self.loading = true;
                self.banner = None;
            }
            Action::AnalysisFinished { generation, outcome } => {
                if generation != self.generation {
                    debug!(
                        generation,
                        current = self.generation,
                        "discarding stale analysis result"
                    );
                    return;
                }
                self.loading = false;
                match outcome {
                    Ok(clips) => self.clips = clips,
                    Err(banner) => self.banner = Some(banner),
                }
            }
            Action::ClipRangeEdited { id, start, end } => {
                let Some(duration) = self.source.as_ref().map(|s| s.duration_seconds) else {
                    return;
                };
                if let Some(clip) = self.clips.iter_mut().find(|c| c.id == id) {
                    if !clip.try_set_range(start, end, duration) {
                        debug!(%id, start, end, "rejected trim edit, keeping prior range");
                    }
                }
            }
            Action::PreviewSelected(id) => {
                if self.clips.iter().any(|c| c.id == id) {
                    self.active_clip = Some(id);
                }
            }
            Action::PreviewCleared => self.active_clip = None,
            Action::BannerDismissed => self.banner = None,
            Action::Reset => *self = Session::default(),
        }
    }
}

/// Persisted session: what `suggest --save` writes and the other commands
/// read back across invocations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionFile {
    pub created_at: DateTime<Utc>,
    pub source: SourceVideo,
    pub clips: Vec<Clip>,
}

impl SessionFile {
    pub fn new(source: SourceVideo, clips: Vec<Clip>) -> Self {
        Self {
            created_at: Utc::now(),
            source,
            clips,
        }
    }

    pub fn load(path: &Path) -> ClipsmithResult<Self> {
        let data = std::fs::read_to_string(path).map_err(|e| ClipsmithError::SessionError {
            message: format!("could not read {}: {}", path.display(), e),
        })?;
        serde_json::from_str(&data).map_err(|e| ClipsmithError::SessionError {
            message: format!("could not parse {}: {}", path.display(), e),
        })
    }

    pub fn save(&self, path: &Path) -> ClipsmithResult<()> {
        let data = serde_json::to_string_pretty(self).map_err(|e| ClipsmithError::SessionError {
            message: format!("could not serialize session: {}", e),
        })?;
        std::fs::write(path, data).map_err(|e| ClipsmithError::SessionError {
            message: format!("could not write {}: {}", path.display(), e),
        })
    }

    pub fn clip(&self, id: &str) -> ClipsmithResult<&Clip> {
        self.clips
            .iter()
            .find(|c| c.id == id)
            .ok_or_else(|| ClipsmithError::ClipNotFound { id: id.to_string() })
    }

    pub fn clip_mut(&mut self, id: &str) -> ClipsmithResult<&mut Clip> {
        self.clips
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ClipsmithError::ClipNotFound { id: id.to_string() })
    }
}
