//! File collection backend
//!
//! Walks the root with walkdir and keeps files whose lowercased name ends with
//! one of the configured extensions. Results are sorted by path string so the
//! output does not depend on filesystem enumeration order.

use std::path::Path;
use walkdir::{DirEntry, WalkDir};

use crate::core::config::ExtensionSet;
use crate::core::model::{AssetError, FileList};
use crate::core::paths::lower_file_name;

/// Collect matching files under `root`.
///
/// Traversal errors are not skipped: an unreadable root or subdirectory aborts
/// the collection with [`AssetError::Walk`].
pub fn collect_files(
    root: &Path,
    extensions: &ExtensionSet,
    recursive: bool,
) -> Result<FileList, AssetError> {
    let mut walker = WalkDir::new(root).min_depth(1).follow_links(false);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = FileList::new();

    for entry in walker {
        let entry = entry.map_err(|source| AssetError::Walk {
            path: source
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| root.to_path_buf()),
            source,
        })?;

        let is_candidate = if recursive {
            is_walked_file(&entry)
        } else {
            entry.path().is_file()
        };
        if !is_candidate {
            continue;
        }

        let matched = lower_file_name(entry.path())
            .map(|name| extensions.matches(&name))
            .unwrap_or(false);
        if matched {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}

/// Anything that is not a directory counts as a file during a recursive walk,
/// except symlinks that resolve to directories. Dangling symlinks are kept and
/// fail later at read time.
fn is_walked_file(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }
    if file_type.is_symlink() {
        return !entry.path().is_dir();
    }
    true
}
