//! Error types for path validation

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while validating a path value
#[derive(Debug, Error)]
pub enum FsError {
    /// An empty path was provided
    #[error("path is empty")]
    Empty,

    /// Path contains bytes the OS cannot accept
    #[error("invalid path: {0}")]
    InvalidPath(String),

    /// Nothing exists at the specified path
    #[error("path not found: {0}")]
    NotFound(PathBuf),

    /// Path exists but is not a regular file
    #[error("not a file: {0}")]
    NotAFile(PathBuf),

    /// Path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),
}

/// Result type for path validation
pub type Result<T> = std::result::Result<T, FsError>;
