//! Unified error handling for Zen Core.
//!
//! The greeter has two ways to fail: the toolchain version string cannot be
//! understood, or the output sink rejects the write.  Neither is recovered
//! from here; callers decide how to surface them.

use std::io;

use thiserror::Error;

/// Root error type for Zen Core operations.
#[derive(Debug, Error)]
pub enum ZenError {
    /// A version string did not have the `major.minor.patch` shape.
    #[error("Invalid version '{input}': {reason}")]
    InvalidVersion { input: String, reason: String },

    /// Writing the greeting to the output sink failed.
    #[error("Failed to write greeting: {source}")]
    Output {
        #[from]
        source: io::Error,
    },
}

impl ZenError {
    pub(crate) fn invalid_version(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidVersion {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Get user-actionable suggestions for this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidVersion { input, .. } => vec![
                format!("The toolchain reported '{input}'"),
                "Rebuild with a stable rustc that prints `rustc X.Y.Z (...)`".into(),
            ],
            Self::Output { .. } if self.is_broken_pipe() => vec![
                "The reader of standard output went away before the greeting was written".into(),
            ],
            Self::Output { .. } => vec![
                "Check that standard output is writable".into(),
                "If redirecting to a file, check available disk space".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidVersion { .. } => ErrorCategory::Validation,
            Self::Output { .. } => ErrorCategory::Io,
        }
    }

    /// `true` when the output sink was closed by its reader (`EPIPE`).
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output { source } if source.kind() == io::ErrorKind::BrokenPipe)
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Io,
}

/// Convenient result type alias.
pub type ZenResult<T> = Result<T, ZenError>;
