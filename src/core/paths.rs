//! Path utilities
//!
//! Paths are reported exactly as walked (root prefix included), using the
//! platform's own separator.

use std::path::Path;

/// String form of a path used for headers and ordering
pub fn display_path(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

/// Lowercased file name of a path, if it has one
pub fn lower_file_name(path: &Path) -> Option<String> {
    path.file_name()
        .map(|name| name.to_string_lossy().to_lowercase())
}

/// Normalize a user-supplied extension: trim, lowercase, ensure a leading '.'
pub fn normalize_extension(ext: &str) -> Option<String> {
    let ext = ext.trim().to_lowercase();
    if ext.is_empty() || ext == "." {
        return None;
    }
    if ext.starts_with('.') {
        Some(ext)
    } else {
        Some(format!(".{}", ext))
    }
}
