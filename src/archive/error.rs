use std::path::PathBuf;

use crate::metadata::MetadataError;

/// Errors that can occur while building or cleaning an archive
#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    /// I/O error on a specific path
    #[error("I/O error on {}: {source}", .path.display())]
    IoError {
        /// Path being read or written
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// Target archive directory exists already
    #[error("Archive already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Archive directory or source file does not exist
    #[error("No such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    /// Archive path exists but is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// An item directory could not be processed
    #[error("Failed to process item {}: {source}", .item.display())]
    Item {
        /// The offending item directory
        item: PathBuf,
        /// What went wrong inside it
        source: MetadataError,
    },

    /// Error generating metadata outside any single item
    #[error("Metadata error: {0}")]
    MetadataError(#[from] MetadataError),
}

impl ArchiveError {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| ArchiveError::IoError { path, source }
    }
}
