//! # spawnkit-process
//!
//! **Purpose**: Typed invocation of external OS processes for SpawnKit
//!
//! Launches one child process per call, collects its output under an explicit
//! capture policy, and classifies every outcome into a two-kind error
//! taxonomy: the child exited nonzero ([`ProcessError::ExitFailure`]) or an
//! exception at spawn/drain/wait prevented normal completion
//! ([`ProcessError::Io`]).
//!
//! ## Features
//!
//! - **Capture Policies**: inherit everything, capture stdout, capture
//!   stderr, or capture both streams independently
//! - **Deadlock-Free Draining**: both-stream capture drains each pipe on its
//!   own task, so a chatty child can never stall against a bounded pipe
//!   buffer
//! - **Typed Results**: payloads tagged by policy, with pure UTF-8 text
//!   adaptation layered on top of the raw bytes
//! - **Error Embedding**: every entry point maps [`ProcessError`] through a
//!   caller-supplied function into the caller's own error type
//!
//! Deliberately absent: timeouts, cancellation, signals, process groups, and
//! streaming output. A call resolves when the child terminates, and not
//! before.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use spawnkit_fs::File;
//! use spawnkit_process::{call, call_unit, Capture, ProcessError};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Capture stdout and decode it.
//! let captured = call(
//!     |e: ProcessError| e.to_string(),
//!     File::new("echo")?,
//!     ["hi"],
//!     Capture::Stdout,
//! )
//! .await?;
//! assert_eq!(captured.into_text()?.into_stdout().as_deref(), Some("hi\n"));
//!
//! // Let output flow to the console, keep only the classification.
//! call_unit(|e: ProcessError| e.to_string(), File::new("make")?, ["check"]).await?;
//! # Ok(())
//! # }
//! ```

pub mod call;
pub mod capture;
pub mod descriptor;
pub mod engine;
pub mod error;

pub use call::{call, call_in, call_unit, call_unit_in};
pub use capture::{Capture, CapturedOutput, CapturedText, DecodeError, OutputStream};
pub use descriptor::ProcessDescriptor;
pub use engine::run;
pub use error::{ProcessError, Result};
