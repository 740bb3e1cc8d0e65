//! Navigation error types.

use std::path::PathBuf;

/// Error raised while building navigation.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    /// Content root does not exist.
    #[error("Content root not found: {}", .0.display())]
    RootNotFound(PathBuf),
    /// Content root exists but is not a directory.
    #[error("Content root is not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
    /// A content file or directory name is not valid UTF-8.
    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
    /// A directory could not be listed.
    #[error("Failed to read directory {}: {source}", path.display())]
    ReadDir {
        /// Directory being listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },
}
