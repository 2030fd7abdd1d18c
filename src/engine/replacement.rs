//! Crash-safe conversion and replacement of a single file

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::DomainError;
use crate::domain::model::{ConversionPlan, ConversionSuccess};
use crate::engine::ReplacementPhase;
use crate::ports::{FsPort, TranscodePort};

/// Executes a [`ConversionPlan`].
///
/// The sequence is transcode → backup rename → promote rename. The source is
/// only renamed once the engine has succeeded and the temporary output is on
/// disk, so the original bytes always exist under either the source or the
/// backup name. Renames are not rolled back.
pub struct ReplacementProtocol {
    transcoder: Arc<dyn TranscodePort>,
    fs: Arc<dyn FsPort>,
}

impl ReplacementProtocol {
    pub fn new(transcoder: Arc<dyn TranscodePort>, fs: Arc<dyn FsPort>) -> Self {
        Self { transcoder, fs }
    }

    /// Run the full sequence for one plan
    pub async fn execute(&self, plan: &ConversionPlan) -> Result<ConversionSuccess, DomainError> {
        self.preflight(plan).await?;

        self.transcode(plan).await?;

        log_phase(plan, ReplacementPhase::BackingUp);
        self.fs
            .move_file(&plan.source_path, &plan.backup_path)
            .await?;

        log_phase(plan, ReplacementPhase::Promoting);
        self.fs
            .move_file(&plan.temporary_output_path, &plan.final_output_path)
            .await?;

        log_phase(plan, ReplacementPhase::Completed);
        info!(
            source = %plan.source_path.display(),
            output = %plan.final_output_path.display(),
            backup = %plan.backup_path.display(),
            "Conversion completed"
        );

        Ok(ConversionSuccess {
            final_output_path: plan.final_output_path.clone(),
            backup_path: plan.backup_path.clone(),
        })
    }

    /// Refuse plans whose renames would replace an unrelated file
    async fn preflight(&self, plan: &ConversionPlan) -> Result<(), DomainError> {
        log_phase(plan, ReplacementPhase::Preflight);

        if self.fs.file_exists(&plan.backup_path).await? {
            return Err(DomainError::filesystem(
                "backup",
                &plan.backup_path,
                "backup file already exists",
            ));
        }

        let final_path = &plan.final_output_path;
        let occupied = if final_path == &plan.source_path {
            false
        } else if differs_only_by_case(final_path, &plan.source_path) {
            // On case-insensitive filesystems the final name resolves to the source
            self.fs.name_exists(final_path).await?
        } else {
            self.fs.file_exists(final_path).await?
        };

        if occupied {
            return Err(DomainError::filesystem(
                "promote",
                &plan.final_output_path,
                "output file already exists",
            ));
        }

        Ok(())
    }

    /// Step 1: engine into the temporary file, cleaned up on any failure
    async fn transcode(&self, plan: &ConversionPlan) -> Result<(), DomainError> {
        log_phase(plan, ReplacementPhase::Transcoding);

        let request = plan.transcode_request();
        let result = match self.transcoder.transcode(&request).await {
            Ok(()) => self.verify_temporary_output(plan).await,
            Err(err) => Err(err),
        };

        if let Err(err) = result {
            self.remove_temporary_output(plan).await;
            return Err(err);
        }

        Ok(())
    }

    async fn verify_temporary_output(&self, plan: &ConversionPlan) -> Result<(), DomainError> {
        if self.fs.file_exists(&plan.temporary_output_path).await? {
            Ok(())
        } else {
            Err(DomainError::unexpected(
                &plan.source_path,
                format!(
                    "engine reported success but {} was not written",
                    plan.temporary_output_path.display()
                ),
            ))
        }
    }

    async fn remove_temporary_output(&self, plan: &ConversionPlan) {
        let temp = &plan.temporary_output_path;
        match self.fs.file_exists(temp).await {
            Ok(true) => {
                if let Err(err) = self.fs.delete_file(temp).await {
                    warn!(path = %temp.display(), error = %err, "Could not remove temporary output");
                } else {
                    debug!(path = %temp.display(), "Removed temporary output");
                }
            }
            Ok(false) => {}
            Err(err) => {
                warn!(path = %temp.display(), error = %err, "Could not check temporary output");
            }
        }
    }
}

/// `Clip.MP4` and `Clip.mp4` in the same directory
fn differs_only_by_case(a: &Path, b: &Path) -> bool {
    match (a.file_name(), b.file_name()) {
        (Some(name_a), Some(name_b)) => {
            a.parent() == b.parent()
                && name_a != name_b
                && name_a.to_string_lossy().eq_ignore_ascii_case(&name_b.to_string_lossy())
        }
        _ => false,
    }
}

fn log_phase(plan: &ConversionPlan, phase: ReplacementPhase) {
    debug!(source = %plan.source_path.display(), ?phase, "Replacement phase");
}
