// Ports - Interface definitions (contracts)

use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::DomainError;
use crate::domain::model::SourceVideo;
use crate::suggest::SuggestError;

/// Port for the generative-AI suggestion service
#[async_trait]
pub trait SuggestPort: Send + Sync {
    /// Request clip suggestions for a source of the given duration.
    /// Returns the raw model output, expected to be a JSON array; the
    /// suggest layer owns validation of that text.
    async fn request_suggestions(&self, duration_seconds: f64) -> Result<String, SuggestError>;
}

/// Port for probing source-video metadata
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Probe duration and native dimensions of a media file
    async fn probe(&self, path: &Path) -> Result<SourceVideo, DomainError>;
}
