//! CLI argument definitions using the clap derive API.
//!
//! `zen-hello` takes no positional arguments and has no subcommands.  The
//! only flags are the diagnostic ones in [`GlobalArgs`]; none of them change
//! what is written to stdout.  Anything else is a usage error (exit 2).

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name     = "zen-hello",
    bin_name = "zen-hello",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Print the Rust toolchain version and a small banner",
    long_about = "Prints `Runtime Version: X.Y.Z`, where X.Y.Z is the rustc \
                  release this binary was built with, followed by an ASCII banner.",
    after_help = "EXAMPLES:\n\
        \x20 zen-hello\n\
        \x20 zen-hello -vv        # debug diagnostics on stderr\n\
        \x20 zen-hello | head -1  # just the version line",
)]
pub struct Cli {
    /// Diagnostic flags.
    #[command(flatten)]
    pub global: GlobalArgs,
}
