//! Diagnostic flags.
//!
//! These only steer the tracing subscriber on stderr.  Stdout is the same
//! whichever of them are passed.

use clap::Args;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Increase logging verbosity.
    ///
    /// Pass once for INFO (`-v`), twice for DEBUG (`-vv`), three times for
    /// TRACE (`-vvv`).  Conflicts with `--quiet`.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)",
        long_help = "Increase logging verbosity on stderr:
    (none)  - Warnings and errors
    -v      - Info level
    -vv     - Debug level
    -vvv    - Trace level"
    )]
    pub verbose: u8,

    /// Log errors only.
    #[arg(
        short = 'q',
        long = "quiet",
        conflicts_with = "verbose",
        help = "Only log errors"
    )]
    pub quiet: bool,

    /// Disable ANSI colour codes in diagnostics.
    ///
    /// A non-empty `NO_COLOR` has the same effect (see
    /// <https://no-color.org>); that is resolved in `AppConfig`.
    #[arg(
        long = "no-color",
        help = "Disable colored diagnostics (also: NO_COLOR=<anything>)"
    )]
    pub no_color: bool,
}
