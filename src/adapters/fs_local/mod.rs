// Local filesystem adapter - File system operations through tokio::fs

use std::io::ErrorKind;
use std::path::Path;

use async_trait::async_trait;
use tokio::fs;
use tracing::debug;

use crate::domain::errors::*;
use crate::ports::*;

/// Filesystem adapter for the local disk
#[derive(Debug, Default, Clone)]
pub struct LocalFsAdapter;

impl LocalFsAdapter {
    /// Create new local filesystem adapter
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FsPort for LocalFsAdapter {
    async fn file_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
        fs::try_exists(file_path)
            .await
            .map_err(|e| DomainError::filesystem("stat", file_path, e.to_string()))
    }

    async fn name_exists(&self, file_path: &Path) -> Result<bool, DomainError> {
        let (Some(parent), Some(name)) = (file_path.parent(), file_path.file_name()) else {
            return Ok(false);
        };
        let parent = if parent.as_os_str().is_empty() {
            Path::new(".")
        } else {
            parent
        };

        let mut entries = match fs::read_dir(parent).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(false),
            Err(e) => return Err(DomainError::filesystem("list", parent, e.to_string())),
        };

        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| DomainError::filesystem("list", parent, e.to_string()))?
        {
            if entry.file_name() == name {
                return Ok(true);
            }
        }
        Ok(false)
    }

    async fn directory_exists(&self, dir_path: &Path) -> Result<bool, DomainError> {
        match fs::metadata(dir_path).await {
            Ok(metadata) => Ok(metadata.is_dir()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DomainError::filesystem("stat", dir_path, e.to_string())),
        }
    }

    async fn delete_file(&self, file_path: &Path) -> Result<(), DomainError> {
        fs::remove_file(file_path)
            .await
            .map_err(|e| DomainError::filesystem("delete", file_path, e.to_string()))?;
        debug!(path = %file_path.display(), "Deleted file");
        Ok(())
    }

    async fn move_file(&self, from: &Path, to: &Path) -> Result<(), DomainError> {
        fs::rename(from, to).await.map_err(|e| {
            DomainError::filesystem(
                "rename",
                from,
                format!("could not move to {}: {}", to.display(), e),
            )
        })?;
        debug!(from = %from.display(), to = %to.display(), "Renamed file");
        Ok(())
    }
}
