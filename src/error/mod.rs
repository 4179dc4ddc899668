//! Error handling module for clipsmith

use serde::Serialize;
use thiserror::Error;

use crate::domain::errors::DomainError;

/// Main error type for clipsmith operations
#[derive(Error, Debug)]
pub enum ClipsmithError {
    /// Input file not found or inaccessible
    #[error("Input file not found: {path}")]
    InputFileNotFound { path: String },

    /// Input is not something we can load (URL, non-video file)
    #[error("Unsupported input: {message}")]
    UnsupportedInput { message: String },

    /// Clip id not present in the session
    #[error("Clip not found in session: {id}")]
    ClipNotFound { id: String },

    /// Session file could not be read or written
    #[error("Session file error: {message}")]
    SessionError { message: String },

    /// Configuration error
    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Domain error
    #[error(transparent)]
    DomainError(#[from] DomainError),
}

impl ClipsmithError {
    /// Collapse into the user-facing banner shape. Rejected input keeps its
    /// own title; everything else surfaces as a load failure.
    pub fn banner(&self) -> Banner {
        match self {
            ClipsmithError::UnsupportedInput { message } => {
                Banner::unsupported_input(message.clone())
            }
            other => Banner::load_failed(other.to_string()),
        }
    }
}

/// Result type alias for clipsmith operations
pub type ClipsmithResult<T> = std::result::Result<T, ClipsmithError>;

/// User-facing error banner: a dismissible title/message pair. All error
/// paths surface through this shape; no structured codes beyond it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Banner {
    pub title: String,
    pub message: String,
}

impl Banner {
    /// Unsupported-input error: rejected immediately, no state change
    pub fn unsupported_input(message: impl Into<String>) -> Self {
        Self {
            title: "Feature Not Supported".to_string(),
            message: message.into(),
        }
    }

    /// Source load error: surfaced, source not loaded
    pub fn load_failed(message: impl Into<String>) -> Self {
        Self {
            title: "Load Failed".to_string(),
            message: message.into(),
        }
    }

    /// Analysis error: surfaced after a failed AI round-trip, source stays loaded
    pub fn analysis_failed(message: impl Into<String>) -> Self {
        Self {
            title: "Analysis Failed".to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Banner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.title, self.message)
    }
}
