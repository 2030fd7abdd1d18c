//! Sibling path derivation for the replacement protocol

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::domain::errors::DomainError;

/// Suffix appended to the original file name when it is backed up
pub const BACKUP_SUFFIX: &str = ".bak";

/// Suffix appended to the stem of the temporary output
const TEMP_STEM_SUFFIX: &str = "_temp";

/// `dir/name.ext` → `dir/name.<target>`
pub fn final_output_path_for(source: &Path, target_ext: &str) -> Result<PathBuf, DomainError> {
    require_file_name(source)?;
    Ok(source.with_extension(target_ext))
}

/// `dir/name.ext` → `dir/name_temp.<target>`
pub fn temporary_output_path_for(
    source: &Path,
    target_ext: &str,
) -> Result<PathBuf, DomainError> {
    require_file_name(source)?;
    let stem = source
        .file_stem()
        .ok_or_else(|| DomainError::unexpected(source, "path has no file stem"))?;

    let mut name = OsString::from(stem);
    name.push(TEMP_STEM_SUFFIX);
    name.push(".");
    name.push(target_ext);
    Ok(source.with_file_name(name))
}

/// `dir/name.ext` → `dir/name.ext.bak`
pub fn backup_path_for(source: &Path) -> Result<PathBuf, DomainError> {
    let file_name = require_file_name(source)?;
    let mut name = file_name.to_os_string();
    name.push(BACKUP_SUFFIX);
    Ok(source.with_file_name(name))
}

/// Whether the path names a backup produced by this tool
pub fn is_backup_path(path: &Path) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(BACKUP_SUFFIX))
        .unwrap_or(false)
}

fn require_file_name(source: &Path) -> Result<&std::ffi::OsStr, DomainError> {
    source
        .file_name()
        .ok_or_else(|| DomainError::unexpected(source, "path has no file name"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backup_appends_suffix() {
        assert_eq!(
            backup_path_for(Path::new("/a/b/clip.AVI")).unwrap(),
            PathBuf::from("/a/b/clip.AVI.bak")
        );
    }

    #[test]
    fn test_final_replaces_extension() {
        assert_eq!(
            final_output_path_for(Path::new("/a/clip.wmv"), "mp4").unwrap(),
            PathBuf::from("/a/clip.mp4")
        );
        assert_eq!(
            final_output_path_for(Path::new("/a/my.show.s01.flv"), "mp4").unwrap(),
            PathBuf::from("/a/my.show.s01.mp4")
        );
    }

    #[test]
    fn test_temp_uses_stem() {
        assert_eq!(
            temporary_output_path_for(Path::new("/a/my.show.flv"), "mp4").unwrap(),
            PathBuf::from("/a/my.show_temp.mp4")
        );
    }

    #[test]
    fn test_rootless_path_is_rejected() {
        assert!(backup_path_for(Path::new("/")).is_err());
        assert!(final_output_path_for(Path::new(".."), "mp4").is_err());
    }

    #[test]
    fn test_is_backup_path() {
        assert!(is_backup_path(Path::new("/a/clip.avi.bak")));
        assert!(!is_backup_path(Path::new("/a/clip.avi")));
        assert!(!is_backup_path(Path::new("/a/bak")));
    }
}
