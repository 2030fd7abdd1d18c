//! Run reporting
//!
//! Per-file report lines for the console and a run summary that can be
//! printed as text or JSON.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::errors::FailureKind;
use crate::domain::model::FileOutcome;

pub mod report;

pub use report::ConsoleReporter;

/// Status of one file in the summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileStatus {
    Compliant,
    WouldConvert,
    Converted,
    Failed,
}

/// Serializable view of a [`FileOutcome`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRecord {
    pub path: PathBuf,
    pub status: FileStatus,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reasons: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<FailureKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<&FileOutcome> for FileRecord {
    fn from(outcome: &FileOutcome) -> Self {
        let mut record = FileRecord {
            path: outcome.path().to_path_buf(),
            status: FileStatus::Compliant,
            reasons: Vec::new(),
            output: None,
            backup: None,
            error_kind: None,
            error: None,
        };

        match outcome {
            FileOutcome::Compliant { .. } => {}
            FileOutcome::DryRun { reasons, .. } => {
                record.status = FileStatus::WouldConvert;
                record.reasons = reasons.clone();
            }
            FileOutcome::Converted {
                reasons, success, ..
            } => {
                record.status = FileStatus::Converted;
                record.reasons = reasons.clone();
                record.output = Some(success.final_output_path.clone());
                record.backup = Some(success.backup_path.clone());
            }
            FileOutcome::Failed { error, .. } => {
                record.status = FileStatus::Failed;
                record.error_kind = Some(error.kind());
                record.error = Some(error.diagnostic().trim().to_string());
            }
        }

        record
    }
}

/// Totals for one run
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub root: PathBuf,
    pub dry_run: bool,
    pub started_at: DateTime<Utc>,
    pub finished_at: Option<DateTime<Utc>>,
    pub compliant: usize,
    pub would_convert: usize,
    pub converted: usize,
    pub failed: usize,
    pub files: Vec<FileRecord>,
}

impl RunSummary {
    pub fn new(root: &Path, dry_run: bool) -> Self {
        Self {
            root: root.to_path_buf(),
            dry_run,
            started_at: Utc::now(),
            finished_at: None,
            compliant: 0,
            would_convert: 0,
            converted: 0,
            failed: 0,
            files: Vec::new(),
        }
    }

    /// Count one outcome
    pub fn record(&mut self, outcome: &FileOutcome) {
        let record = FileRecord::from(outcome);
        match record.status {
            FileStatus::Compliant => self.compliant += 1,
            FileStatus::WouldConvert => self.would_convert += 1,
            FileStatus::Converted => self.converted += 1,
            FileStatus::Failed => self.failed += 1,
        }
        self.files.push(record);
    }

    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    pub fn total(&self) -> usize {
        self.files.len()
    }

    /// One-line human readable summary
    pub fn render_text(&self) -> String {
        let mut text = format!(
            "Processed {} file(s) under {}: {} compliant, {} converted",
            self.total(),
            self.root.display(),
            self.compliant,
            self.converted
        );
        if self.dry_run {
            text.push_str(&format!(", {} would convert", self.would_convert));
        }
        text.push_str(&format!(", {} failed", self.failed));

        if let Some(finished) = self.finished_at {
            let elapsed = finished - self.started_at;
            text.push_str(&format!(" in {:.1}s", elapsed.num_milliseconds() as f64 / 1000.0));
        }
        text
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
