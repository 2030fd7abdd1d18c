// Domain errors - Per-file failure kinds for the normalization pipeline

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Domain-specific error types
///
/// Every variant that can occur while processing a file carries the path it
/// concerns and the diagnostic text captured from the failing collaborator.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// The prober could not read stream metadata
    ProbeFailure { path: PathBuf, diagnostic: String },
    /// The transcoding engine reported failure
    TranscodeFailure { path: PathBuf, diagnostic: String },
    /// A rename, delete or existence check failed during replacement
    FilesystemFailure {
        operation: &'static str,
        path: PathBuf,
        diagnostic: String,
    },
    /// Anything else
    UnexpectedFailure { path: PathBuf, diagnostic: String },
    /// Invalid arguments or configuration values
    BadArgs(String),
}

/// Failure category used when reporting outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Probe,
    Transcode,
    Filesystem,
    Unexpected,
    BadArgs,
}

impl DomainError {
    pub fn probe(path: impl AsRef<Path>, diagnostic: impl Into<String>) -> Self {
        DomainError::ProbeFailure {
            path: path.as_ref().to_path_buf(),
            diagnostic: diagnostic.into(),
        }
    }

    pub fn transcode(path: impl AsRef<Path>, diagnostic: impl Into<String>) -> Self {
        DomainError::TranscodeFailure {
            path: path.as_ref().to_path_buf(),
            diagnostic: diagnostic.into(),
        }
    }

    pub fn filesystem(
        operation: &'static str,
        path: impl AsRef<Path>,
        diagnostic: impl Into<String>,
    ) -> Self {
        DomainError::FilesystemFailure {
            operation,
            path: path.as_ref().to_path_buf(),
            diagnostic: diagnostic.into(),
        }
    }

    pub fn unexpected(path: impl AsRef<Path>, diagnostic: impl Into<String>) -> Self {
        DomainError::UnexpectedFailure {
            path: path.as_ref().to_path_buf(),
            diagnostic: diagnostic.into(),
        }
    }

    /// Category of this error
    pub fn kind(&self) -> FailureKind {
        match self {
            DomainError::ProbeFailure { .. } => FailureKind::Probe,
            DomainError::TranscodeFailure { .. } => FailureKind::Transcode,
            DomainError::FilesystemFailure { .. } => FailureKind::Filesystem,
            DomainError::UnexpectedFailure { .. } => FailureKind::Unexpected,
            DomainError::BadArgs(_) => FailureKind::BadArgs,
        }
    }

    /// Captured diagnostic text
    pub fn diagnostic(&self) -> &str {
        match self {
            DomainError::ProbeFailure { diagnostic, .. }
            | DomainError::TranscodeFailure { diagnostic, .. }
            | DomainError::FilesystemFailure { diagnostic, .. }
            | DomainError::UnexpectedFailure { diagnostic, .. } => diagnostic,
            DomainError::BadArgs(msg) => msg,
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FailureKind::Probe => "probe failure",
            FailureKind::Transcode => "transcode failure",
            FailureKind::Filesystem => "filesystem failure",
            FailureKind::Unexpected => "unexpected failure",
            FailureKind::BadArgs => "bad arguments",
        };
        f.write_str(label)
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DomainError::ProbeFailure { path, diagnostic } => {
                write!(f, "Probe failed for {}: {}", path.display(), diagnostic)
            }
            DomainError::TranscodeFailure { path, diagnostic } => {
                write!(f, "Transcode failed for {}: {}", path.display(), diagnostic)
            }
            DomainError::FilesystemFailure {
                operation,
                path,
                diagnostic,
            } => write!(
                f,
                "Filesystem {} failed for {}: {}",
                operation,
                path.display(),
                diagnostic
            ),
            DomainError::UnexpectedFailure { path, diagnostic } => {
                write!(f, "Unexpected error for {}: {}", path.display(), diagnostic)
            }
            DomainError::BadArgs(msg) => write!(f, "Bad arguments: {}", msg),
        }
    }
}

impl std::error::Error for DomainError {}
