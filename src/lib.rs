//! vidnorm Library
//!
//! Normalizes a directory tree of video files to a single compatible
//! profile (MP4 container, H.264 video, AAC audio, mov_text subtitles).
//! Compliant streams are copied untouched; only what is incompatible is
//! re-encoded. Originals are kept beside the result with a `.bak` suffix.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config_initialization;
pub mod domain;
pub mod engine;
pub mod error;
pub mod output;
pub mod planner;
pub mod ports;
pub mod utils;

// Re-export commonly used types
pub use adapters::Settings;
pub use domain::errors::{DomainError, FailureKind};
pub use domain::model::{ConversionPlan, FileOutcome, StreamDescriptor};
pub use domain::rules::{ComplianceProfile, StreamClassifier};
pub use error::{AppError, AppResult};
