//! Error types for process invocation

use std::io;

use thiserror::Error;

use crate::descriptor::ProcessDescriptor;

/// Process invocation errors
///
/// Exactly two kinds exist: the child ran and exited nonzero, or an exception
/// (spawn, drain, or wait) prevented normal completion. Both are terminal for
/// the call — nothing here retries — and both carry the full descriptor that
/// produced them for diagnostics.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// Child terminated with a nonzero status
    ///
    /// `code` is the OS exit code when the child exited normally. On Unix a
    /// child terminated by signal N is reported as `-N`; a status carrying
    /// neither a code nor a signal maps to `-1`.
    #[error("process `{}` exited with code {code}", descriptor.command)]
    ExitFailure {
        /// Descriptor of the failing invocation
        descriptor: ProcessDescriptor,
        /// Exit code, nonzero
        code: i32,
    },

    /// Spawning, draining, or waiting failed at the IO level
    #[error("process `{}` could not be run", descriptor.command)]
    Io {
        /// Descriptor of the failing invocation
        descriptor: ProcessDescriptor,
        /// Underlying IO error
        #[source]
        source: io::Error,
    },
}

impl ProcessError {
    pub(crate) fn io(descriptor: &ProcessDescriptor, source: io::Error) -> Self {
        Self::Io {
            descriptor: descriptor.clone(),
            source,
        }
    }

    /// Descriptor of the invocation that produced this error
    pub fn descriptor(&self) -> &ProcessDescriptor {
        match self {
            Self::ExitFailure { descriptor, .. } | Self::Io { descriptor, .. } => descriptor,
        }
    }

    /// Exit code, when the child ran to a nonzero exit
    pub fn exit_code(&self) -> Option<i32> {
        match self {
            Self::ExitFailure { code, .. } => Some(*code),
            Self::Io { .. } => None,
        }
    }
}

/// Result type for process invocation
pub type Result<T> = std::result::Result<T, ProcessError>;
