//! Candidate enumeration

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::domain::rules::ComplianceProfile;
use crate::planner::is_backup_path;
use crate::utils::path::PathUtils;

/// Whether a regular file should be probed at all
pub fn is_candidate(profile: &ComplianceProfile, path: &Path) -> bool {
    if is_backup_path(path) {
        return false;
    }
    PathUtils::get_extension(path)
        .map(|ext| profile.is_candidate_extension(&ext))
        .unwrap_or(false)
}

/// Collect every candidate under `root`, sorted by name within each directory.
///
/// The list is built before any file is processed, so outputs written during
/// the run are never visited. Unreadable entries are logged and skipped.
pub fn collect_candidates(profile: &ComplianceProfile, root: &Path) -> Vec<PathBuf> {
    let mut candidates = Vec::new();

    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                warn!(root = %root.display(), error = %err, "Skipping unreadable entry");
                continue;
            }
        };

        if entry.file_type().is_dir() || !is_candidate(profile, entry.path()) {
            continue;
        }

        // Symlinks are not followed into directories but do count as files
        // when they point at one
        if entry.file_type().is_file() || (entry.path_is_symlink() && entry.path().is_file()) {
            candidates.push(entry.into_path());
        } else {
            debug!(path = %entry.path().display(), "Skipping entry that is not a regular file");
        }
    }

    debug!(root = %root.display(), count = candidates.len(), "Collected candidates");
    candidates
}
