//! Validated path value types

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{FsError, Result};

/// Shape validation shared by both value types.
///
/// Rejects empty paths and paths with interior NUL bytes; everything else is
/// left to the OS at spawn time.
fn validate(path: PathBuf) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(FsError::Empty);
    }
    if path.as_os_str().as_encoded_bytes().contains(&0) {
        return Err(FsError::InvalidPath(path.to_string_lossy().into_owned()));
    }
    Ok(path)
}

/// A validated path naming a program or regular file
///
/// The value is immutable and compares structurally; it carries no handle and
/// touches the filesystem only in [`File::existing`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct File(PathBuf);

impl File {
    /// Create a file value, validating shape only
    ///
    /// The path does not have to exist: program names resolved via `PATH`
    /// (for example `"echo"`) are valid file values.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        validate(path.into()).map(Self)
    }

    /// Create a file value, requiring an existing regular file
    pub fn existing(path: impl Into<PathBuf>) -> Result<Self> {
        let file = Self::new(path)?;
        match fs::metadata(&file.0) {
            Ok(meta) if meta.is_file() => Ok(file),
            Ok(_) => Err(FsError::NotAFile(file.0)),
            Err(_) => Err(FsError::NotFound(file.0)),
        }
    }

    /// Borrow the underlying path
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume the value, returning the underlying path
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for File {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<File> for PathBuf {
    fn from(file: File) -> Self {
        file.0
    }
}

impl fmt::Display for File {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}

/// A validated path naming a directory
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Directory(PathBuf);

impl Directory {
    /// Create a directory value, validating shape only
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        validate(path.into()).map(Self)
    }

    /// Create a directory value, requiring an existing directory
    pub fn existing(path: impl Into<PathBuf>) -> Result<Self> {
        let dir = Self::new(path)?;
        match fs::metadata(&dir.0) {
            Ok(meta) if meta.is_dir() => Ok(dir),
            Ok(_) => Err(FsError::NotADirectory(dir.0)),
            Err(_) => Err(FsError::NotFound(dir.0)),
        }
    }

    /// Borrow the underlying path
    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Consume the value, returning the underlying path
    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for Directory {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl From<Directory> for PathBuf {
    fn from(dir: Directory) -> Self {
        dir.0
    }
}

impl fmt::Display for Directory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.display().fmt(f)
    }
}
