//! Error handling for the `zen-hello` binary.
//!
//! Two things can go wrong after argument parsing: the subscriber refuses to
//! install, or the greeter fails.  Rendering happens exactly once, in
//! `main::handle_error`.

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use zen_core::error::ZenError;

pub use zen_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// The tracing subscriber could not be installed.
    #[error("Failed to initialise logging: {message}")]
    LoggingInit { message: String },

    /// An error propagated from `zen-core`.
    #[error("Greeting failed: {0}")]
    Core(#[from] ZenError),
}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::LoggingInit {
            message: format!("{err:#}"),
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::LoggingInit { .. } => vec![
                "Check the RUST_LOG environment variable for typos".into(),
            ],
            Self::Core(core) => core.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::LoggingInit { .. } => ErrorCategory::Internal,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::Internal,
                CoreCategory::Io => ErrorCategory::Io,
            },
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// Usage errors (exit 2) never reach here; clap reports those itself.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Io | ErrorCategory::Internal => 1,
        }
    }

    /// `true` when stdout's reader went away.  Routine for pipelines such
    /// as `zen-hello | head -0`, so it is logged quietly.
    pub fn is_broken_pipe(&self) -> bool {
        match self {
            Self::Core(core) => core.is_broken_pipe(),
            Self::LoggingInit { .. } => false,
        }
    }

    /// The stderr report: a category headline, the message, the cause chain
    /// when `verbose`, then suggestions.  `colored` only toggles ANSI styling.
    pub fn render(&self, colored: bool, verbose: bool) -> String {
        let paint = |text: &str, style: fn(&str) -> String| {
            if colored { style(text) } else { text.to_owned() }
        };

        let mut out = format!(
            "\n{}\n  {self}\n",
            paint(self.category().headline(), |s| s.red().bold().to_string()),
        );

        let mut cause = self.source();
        if verbose {
            while let Some(err) = cause {
                out.push_str(&format!(
                    "  {}\n",
                    paint(&format!("caused by: {err}"), |s| s.dimmed().to_string())
                ));
                cause = err.source();
            }
        }

        for hint in self.suggestions() {
            out.push_str(&format!(
                "  {} {hint}\n",
                paint("hint:", |s| s.yellow().to_string())
            ));
        }

        if cause.is_some() {
            out.push_str("  (run with -v to see the cause)\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        if self.is_broken_pipe() {
            tracing::debug!("stdout closed by reader: {}", self);
            return;
        }

        match self.category() {
            ErrorCategory::Io => tracing::error!("I/O error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Standard output rejected the greeting.
    Io,
    /// Anything else: bad toolchain capture, subscriber setup.
    Internal,
}

impl ErrorCategory {
    pub const fn headline(self) -> &'static str {
        match self {
            Self::Io => "zen-hello: could not write the greeting",
            Self::Internal => "zen-hello: internal error",
        }
    }
}
