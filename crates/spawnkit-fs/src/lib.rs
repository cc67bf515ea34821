//! # spawnkit-fs
//!
//! **Purpose**: Validated path values for SpawnKit
//!
//! Provides the [`File`] and [`Directory`] newtypes consumed by
//! `spawnkit-process`: immutable path values whose construction has already
//! rejected malformed input, so downstream code can hand them to the OS as
//! opaque strings without re-checking.
//!
//! ## Usage
//!
//! ```rust
//! use spawnkit_fs::{Directory, File};
//!
//! # fn main() -> Result<(), spawnkit_fs::FsError> {
//! // Shape validation only; the path does not have to exist yet.
//! let program = File::new("echo")?;
//!
//! // Existence-checking constructor.
//! let tmp = Directory::existing("/tmp")?;
//! assert_eq!(tmp.as_path().to_str(), Some("/tmp"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod models;

pub use error::{FsError, Result};
pub use models::{Directory, File};
