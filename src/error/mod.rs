//! Top-level error handling for vidnorm

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::errors::DomainError;

/// Errors that abort the whole run
#[derive(Error, Debug)]
pub enum AppError {
    /// Root path missing or not a directory
    #[error("{} is not a valid directory", path.display())]
    InvalidRoot { path: PathBuf },

    /// Configuration could not be loaded or is invalid
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Logging subscriber could not be installed
    #[error("Failed to initialize logging: {message}")]
    Logging { message: String },

    /// Summary serialization error
    #[error("Failed to serialize summary: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Domain error surfaced outside a per-file context
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// Result type alias for run-level operations
pub type AppResult<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_error_converts_transparently() {
        let err = AppError::from(DomainError::filesystem("stat", "/m", "permission denied"));
        assert!(matches!(err, AppError::Domain(_)));
        assert_eq!(err.to_string(), "Filesystem stat failed for /m: permission denied");
    }

    #[test]
    fn test_invalid_root_message() {
        let err = AppError::InvalidRoot {
            path: PathBuf::from("/nowhere"),
        };
        assert_eq!(err.to_string(), "/nowhere is not a valid directory");
    }
}
