// Ports - Interface definitions (contracts)

use std::path::Path;

use async_trait::async_trait;

use crate::domain::errors::*;
use crate::domain::model::*;

/// Port for media file probing
#[async_trait]
pub trait ProbePort: Send + Sync {
    /// Read the ordered stream list of a file.
    ///
    /// Failures are reported as [`DomainError::ProbeFailure`] carrying the
    /// prober's diagnostic output.
    async fn probe_streams(&self, file_path: &Path) -> Result<Vec<StreamDescriptor>, DomainError>;
}

/// Port for the external transcoding engine
#[async_trait]
pub trait TranscodePort: Send + Sync {
    /// Produce `request.output` from `request.source` using exactly the
    /// given directives. Blocks until the engine exits.
    async fn transcode(&self, request: &TranscodeRequest) -> Result<(), DomainError>;
}

/// Port for file system operations
#[async_trait]
pub trait FsPort: Send + Sync {
    /// Check if a file (or anything) exists at the path
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError>;

    /// Check for a directory entry with exactly this name, without the
    /// case folding some filesystems apply to lookups
    async fn name_exists(&self, file_path: &Path) -> Result<bool, DomainError>;

    /// Check if directory exists
    async fn directory_exists(&self, dir_path: &Path) -> Result<bool, DomainError>;

    /// Delete file
    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError>;

    /// Rename within the same directory
    async fn move_file(&self, from: &Path, to: &Path) -> Result<(), DomainError>;
}

/// Port for user-facing progress reporting
pub trait ReportPort: Send {
    /// A conversion is about to start
    fn converting(&mut self, file_path: &Path, reasons: &[String]);

    /// Final outcome for one file
    fn outcome(&mut self, outcome: &FileOutcome);
}
