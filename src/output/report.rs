//! Console report lines

use std::path::Path;

use crate::domain::model::FileOutcome;
use crate::output::RunSummary;
use crate::ports::ReportPort;
use crate::utils::path::PathUtils;

/// Line printed before a conversion starts
pub fn render_converting(path: &Path, reasons: &[String]) -> String {
    format!("[CONVERTING] {} (Reason: {})", path.display(), reasons.join(", "))
}

/// Line printed for a finished file
pub fn render_outcome(outcome: &FileOutcome) -> String {
    match outcome {
        FileOutcome::Compliant { path } => {
            format!("[OK] {} is already compliant.", path.display())
        }
        FileOutcome::DryRun { path, reasons } => format!(
            "[DRY RUN] Would convert {} (Reason: {})",
            path.display(),
            reasons.join(", ")
        ),
        FileOutcome::Converted { success, .. } => format!(
            "[SUCCESS] Created {} (backup: {})",
            success.final_output_path.display(),
            PathUtils::file_name(&success.backup_path)
        ),
        FileOutcome::Failed { path, error } => format!(
            "[ERROR] {} for {}: {}",
            error.kind(),
            path.display(),
            error.diagnostic().trim()
        ),
    }
}

/// Prints report lines and accumulates the run summary.
///
/// Failures go to stderr, everything else to stdout. With `quiet` set no
/// lines are printed, which keeps stdout clean for a JSON summary.
pub struct ConsoleReporter {
    summary: RunSummary,
    quiet: bool,
}

impl ConsoleReporter {
    pub fn new(summary: RunSummary, quiet: bool) -> Self {
        Self { summary, quiet }
    }

    pub fn summary(&self) -> &RunSummary {
        &self.summary
    }

    pub fn into_summary(self) -> RunSummary {
        self.summary
    }
}

impl ReportPort for ConsoleReporter {
    fn converting(&mut self, file_path: &Path, reasons: &[String]) {
        if !self.quiet {
            println!("{}", render_converting(file_path, reasons));
        }
    }

    fn outcome(&mut self, outcome: &FileOutcome) {
        self.summary.record(outcome);
        if self.quiet {
            return;
        }

        let line = render_outcome(outcome);
        if outcome.is_failure() {
            eprintln!("{}", line);
        } else {
            println!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::DomainError;
    use crate::domain::model::ConversionSuccess;
    use std::path::PathBuf;

    #[test]
    fn test_compliant_line() {
        let outcome = FileOutcome::Compliant {
            path: PathBuf::from("/m/a.mp4"),
        };
        assert_eq!(render_outcome(&outcome), "[OK] /m/a.mp4 is already compliant.");
    }

    #[test]
    fn test_dry_run_line_lists_reasons_in_order() {
        let outcome = FileOutcome::DryRun {
            path: PathBuf::from("/m/b.avi"),
            reasons: vec![
                "container .avi".to_string(),
                "video codec mpeg4".to_string(),
            ],
        };
        assert_eq!(
            render_outcome(&outcome),
            "[DRY RUN] Would convert /m/b.avi (Reason: container .avi, video codec mpeg4)"
        );
    }

    #[test]
    fn test_success_line_names_backup_file() {
        let outcome = FileOutcome::Converted {
            path: PathBuf::from("/m/c.mkv"),
            reasons: vec!["audio codec mp3".to_string()],
            success: ConversionSuccess {
                final_output_path: PathBuf::from("/m/c.mp4"),
                backup_path: PathBuf::from("/m/c.mkv.bak"),
            },
        };
        assert_eq!(
            render_outcome(&outcome),
            "[SUCCESS] Created /m/c.mp4 (backup: c.mkv.bak)"
        );
    }

    #[test]
    fn test_failure_line_has_kind_and_diagnostic() {
        let outcome = FileOutcome::Failed {
            path: PathBuf::from("/m/d.avi"),
            error: DomainError::transcode("/m/d.avi", "Conversion failed!\n"),
        };
        assert_eq!(
            render_outcome(&outcome),
            "[ERROR] transcode failure for /m/d.avi: Conversion failed!"
        );
    }

    #[test]
    fn test_quiet_reporter_still_counts() {
        let mut reporter = ConsoleReporter::new(RunSummary::new(Path::new("/m"), true), true);
        reporter.outcome(&FileOutcome::DryRun {
            path: PathBuf::from("/m/e.flv"),
            reasons: vec!["container .flv".to_string()],
        });
        assert_eq!(reporter.summary().would_convert, 1);
    }
}
