//! Core data model - collected file lists, run summaries and errors

use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::core::paths::display_path;

/// Fatal errors that abort a run
#[derive(Debug, Error)]
pub enum AssetError {
    /// Directory traversal failed (unreadable root, permission-denied subdirectory, ...)
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    /// The destination could not be created or written
    #[error("failed to write output {}: {source}", path.display())]
    Output {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A config file could not be read or parsed
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    #[error("extension set is empty")]
    EmptyExtensionSet,

    #[error("invalid extension: {0:?}")]
    InvalidExtension(String),
}

impl AssetError {
    pub fn output(path: &Path, source: io::Error) -> Self {
        AssetError::Output {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// A matched file: the path as walked plus its string form used for ordering and headers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    pub path: PathBuf,
    pub display: String,
}

impl FileRecord {
    pub fn new(path: PathBuf) -> Self {
        let display = display_path(&path);
        Self { path, display }
    }
}

/// Ordered list of collected files
#[derive(Debug, Clone, Default)]
pub struct FileList {
    pub items: Vec<FileRecord>,
}

impl FileList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, path: PathBuf) {
        self.items.push(FileRecord::new(path));
    }

    /// Sort by the string form of each path.
    ///
    /// `Path`'s own ordering compares component-wise, which disagrees with plain
    /// string ordering for names such as `a-b` vs `a/x`.
    pub fn sort(&mut self) {
        self.items.sort_by(|a, b| a.display.cmp(&b.display));
        self.items.dedup_by(|a, b| a.display == b.display);
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FileRecord> {
        self.items.iter()
    }

    #[cfg(test)]
    pub fn paths(&self) -> Vec<&str> {
        self.items.iter().map(|r| r.display.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a FileList {
    type Item = &'a FileRecord;
    type IntoIter = std::slice::Iter<'a, FileRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Outcome of a combine run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CombineSummary {
    /// Files whose content made it into the output
    pub files_written: usize,
    /// Files left with a header only because reading failed
    pub files_failed: usize,
    /// Written files that contained invalid UTF-8
    pub files_lossy: usize,
    /// Total bytes written to the destination
    pub bytes_written: u64,
}

impl CombineSummary {
    pub fn total(&self) -> usize {
        self.files_written + self.files_failed
    }
}
