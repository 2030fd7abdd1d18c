// Normalize interactor - Orchestrates probing, planning and replacement per file

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::errors::*;
use crate::domain::model::*;
use crate::domain::rules::*;
use crate::engine::ReplacementProtocol;
use crate::planner::ConversionPlanner;
use crate::ports::*;
use crate::utils::path::PathUtils;

/// Interactor for the normalize use case
pub struct NormalizeInteractor {
    probe_port: Arc<dyn ProbePort>,
    protocol: ReplacementProtocol,
    profile: ComplianceProfile,
    dry_run: bool,
}

impl NormalizeInteractor {
    /// Create new normalize interactor with injected ports
    pub fn new(
        probe_port: Arc<dyn ProbePort>,
        transcode_port: Arc<dyn TranscodePort>,
        fs_port: Arc<dyn FsPort>,
        profile: ComplianceProfile,
        dry_run: bool,
    ) -> Self {
        Self {
            probe_port,
            protocol: ReplacementProtocol::new(transcode_port, fs_port),
            profile,
            dry_run,
        }
    }

    pub fn profile(&self) -> &ComplianceProfile {
        &self.profile
    }

    /// Process candidates one at a time, in order. A failure never stops
    /// the run.
    pub async fn run(&self, candidates: &[PathBuf], reporter: &mut dyn ReportPort) {
        info!(
            files = candidates.len(),
            dry_run = self.dry_run,
            "Starting normalization run"
        );

        for path in candidates {
            let outcome = self.process_file(path, reporter).await;
            reporter.outcome(&outcome);
        }
    }

    /// Decide and, unless in dry run, apply the conversion for one file
    pub async fn process_file(&self, path: &Path, reporter: &mut dyn ReportPort) -> FileOutcome {
        match self.normalize(path, reporter).await {
            Ok(outcome) => outcome,
            Err(error) => {
                warn!(
                    path = %path.display(),
                    kind = %error.kind(),
                    error = %error.diagnostic().trim(),
                    "File left unchanged"
                );
                FileOutcome::Failed {
                    path: path.to_path_buf(),
                    error,
                }
            }
        }
    }

    async fn normalize(
        &self,
        path: &Path,
        reporter: &mut dyn ReportPort,
    ) -> Result<FileOutcome, DomainError> {
        let streams = self.probe_port.probe_streams(path).await?;
        if streams.is_empty() {
            return Err(DomainError::probe(path, "no streams reported"));
        }

        let extension = PathUtils::dotted_extension(path);
        let (verdict, actions) = StreamClassifier::classify(&self.profile, &extension, &streams);
        debug!(
            path = %path.display(),
            streams = streams.len(),
            compliant = verdict.is_compliant,
            "Classified file"
        );

        let plan = match ConversionPlanner::plan(&self.profile, path, &verdict, &actions)? {
            Some(plan) => plan,
            None => {
                return Ok(FileOutcome::Compliant {
                    path: path.to_path_buf(),
                })
            }
        };

        if self.dry_run {
            return Ok(FileOutcome::DryRun {
                path: path.to_path_buf(),
                reasons: verdict.reasons,
            });
        }

        reporter.converting(path, &verdict.reasons);
        info!(path = %path.display(), reason = %verdict.summary(), "Converting");

        let success = self.protocol.execute(&plan).await?;

        Ok(FileOutcome::Converted {
            path: path.to_path_buf(),
            reasons: verdict.reasons,
            success,
        })
    }
}
