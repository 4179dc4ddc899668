//! Clipsmith library
//!
//! AI-assisted shorts clipping: ask a generative-AI service for short-form
//! clip suggestions over a source video, trim them under a strict range
//! invariant, rehearse their playback timing, and synthesize export commands
//! for an external transcoder. The heavy lifting (AI inference, actual
//! transcoding) stays with external collaborators.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod export;
pub mod ports;
pub mod preview;
pub mod session;
pub mod suggest;

// Re-export commonly used types
pub use domain::errors::DomainError;
pub use domain::model::{AspectRatio, CaptionLanguage, Captions, Clip, SourceVideo, TimeSpec};
pub use error::{Banner, ClipsmithError, ClipsmithResult};
