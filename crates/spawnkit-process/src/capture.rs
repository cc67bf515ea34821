//! Capture policy and captured payloads

use std::fmt;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Which child streams are redirected into pipes for capture
///
/// Streams not selected for capture are inherited from the parent, so their
/// output appears on the parent's console in real time. Stdin is always
/// inherited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capture {
    /// Capture nothing; both streams inherited
    Pass,
    /// Capture stdout; stderr inherited
    Stdout,
    /// Capture stderr; stdout inherited
    Stderr,
    /// Capture both streams independently
    Both,
}

impl Capture {
    pub(crate) fn captures_stdout(self) -> bool {
        matches!(self, Self::Stdout | Self::Both)
    }

    pub(crate) fn captures_stderr(self) -> bool {
        matches!(self, Self::Stderr | Self::Both)
    }
}

/// One of the two capturable child streams
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputStream {
    /// Standard output
    Stdout,
    /// Standard error
    Stderr,
}

impl fmt::Display for OutputStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str("stdout"),
            Self::Stderr => f.write_str("stderr"),
        }
    }
}

/// Captured output that was not valid UTF-8
///
/// Decoding is layered on top of process execution: a decode failure is never
/// a [`ProcessError`](crate::ProcessError), and by the time it can occur the
/// child has already terminated normally.
#[derive(Debug, Error)]
#[error("captured {stream} was not valid UTF-8")]
pub struct DecodeError {
    /// Stream whose bytes failed to decode
    pub stream: OutputStream,
    /// Underlying UTF-8 error, with the offending bytes
    #[source]
    pub source: FromUtf8Error,
}

fn decode(stream: OutputStream, bytes: Vec<u8>) -> Result<String, DecodeError> {
    String::from_utf8(bytes).map_err(|source| DecodeError { stream, source })
}

/// Raw bytes captured from a terminated child, tagged by policy
///
/// The engine always returns the variant matching the requested [`Capture`]:
/// `Pass` yields `None`, `Both` yields `Both`, and so on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedOutput {
    /// Nothing captured (`Capture::Pass`)
    None,
    /// Captured stdout bytes
    Stdout(Vec<u8>),
    /// Captured stderr bytes
    Stderr(Vec<u8>),
    /// Captured stdout and stderr, independently accessible
    Both {
        /// Captured stdout bytes
        stdout: Vec<u8>,
        /// Captured stderr bytes
        stderr: Vec<u8>,
    },
}

impl CapturedOutput {
    /// Captured stdout bytes, if stdout was captured
    pub fn stdout(&self) -> Option<&[u8]> {
        match self {
            Self::Stdout(bytes) | Self::Both { stdout: bytes, .. } => Some(bytes),
            _ => None,
        }
    }

    /// Captured stderr bytes, if stderr was captured
    pub fn stderr(&self) -> Option<&[u8]> {
        match self {
            Self::Stderr(bytes) | Self::Both { stderr: bytes, .. } => Some(bytes),
            _ => None,
        }
    }

    /// Consume the payload, returning captured stdout bytes
    pub fn into_stdout(self) -> Option<Vec<u8>> {
        match self {
            Self::Stdout(bytes) | Self::Both { stdout: bytes, .. } => Some(bytes),
            _ => None,
        }
    }

    /// Consume the payload, returning captured stderr bytes
    pub fn into_stderr(self) -> Option<Vec<u8>> {
        match self {
            Self::Stderr(bytes) | Self::Both { stderr: bytes, .. } => Some(bytes),
            _ => None,
        }
    }

    /// Decode the captured bytes as UTF-8 text
    ///
    /// A pure adaptation of already-captured bytes; nothing is re-read and no
    /// process is re-invoked.
    pub fn into_text(self) -> Result<CapturedText, DecodeError> {
        match self {
            Self::None => Ok(CapturedText::None),
            Self::Stdout(bytes) => decode(OutputStream::Stdout, bytes).map(CapturedText::Stdout),
            Self::Stderr(bytes) => decode(OutputStream::Stderr, bytes).map(CapturedText::Stderr),
            Self::Both { stdout, stderr } => Ok(CapturedText::Both {
                stdout: decode(OutputStream::Stdout, stdout)?,
                stderr: decode(OutputStream::Stderr, stderr)?,
            }),
        }
    }
}

/// UTF-8 decoded counterpart of [`CapturedOutput`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CapturedText {
    /// Nothing captured (`Capture::Pass`)
    None,
    /// Decoded stdout
    Stdout(String),
    /// Decoded stderr
    Stderr(String),
    /// Decoded stdout and stderr
    Both {
        /// Decoded stdout
        stdout: String,
        /// Decoded stderr
        stderr: String,
    },
}

impl CapturedText {
    /// Decoded stdout, if stdout was captured
    pub fn stdout(&self) -> Option<&str> {
        match self {
            Self::Stdout(text) | Self::Both { stdout: text, .. } => Some(text),
            _ => None,
        }
    }

    /// Decoded stderr, if stderr was captured
    pub fn stderr(&self) -> Option<&str> {
        match self {
            Self::Stderr(text) | Self::Both { stderr: text, .. } => Some(text),
            _ => None,
        }
    }

    /// Consume the payload, returning decoded stdout
    pub fn into_stdout(self) -> Option<String> {
        match self {
            Self::Stdout(text) | Self::Both { stdout: text, .. } => Some(text),
            _ => None,
        }
    }

    /// Consume the payload, returning decoded stderr
    pub fn into_stderr(self) -> Option<String> {
        match self {
            Self::Stderr(text) | Self::Both { stderr: text, .. } => Some(text),
            _ => None,
        }
    }
}
