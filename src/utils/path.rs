//! Path helpers shared by the walker and the interactor

use std::path::Path;

/// Path utilities
pub struct PathUtils;

impl PathUtils {
    /// File suffix including its dot, as it appears on disk (`.AVI`).
    /// Empty when the file has no extension.
    pub fn dotted_extension(path: &Path) -> String {
        path.extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default()
    }

    /// Lowercase extension without the dot
    pub fn get_extension(path: &Path) -> Option<String> {
        path.extension()
            .map(|ext| ext.to_string_lossy().to_lowercase())
    }

    /// Final path component for display
    pub fn file_name(path: &Path) -> String {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
