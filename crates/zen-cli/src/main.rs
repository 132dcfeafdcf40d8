//! # zen-hello
//!
//! Prints the Rust toolchain version and a banner.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Resolve [`AppConfig`] from the flags and `NO_COLOR`.
//! 3. Initialise the tracing subscriber (stderr only).
//! 4. Run the greeter against locked stdout.
//! 5. Translate any [`CliError`] into a stderr message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                 |
//! |------|-----------------------------------------|
//! |  0   | Success                                 |
//! |  1   | Internal / I/O error (e.g. stdout gone) |
//! |  2   | Usage error (unknown flag, extra args)  |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};
use zen_core::greeter::Greeter;

use crate::{
    cli::Cli,
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
};

mod cli;
mod config;
mod error;
mod logging;

fn main() -> ExitCode {
    // ── 1. Parse arguments ────────────────────────────────────────────────
    // Help and version requests come back as errors too; clap prints them to
    // stdout with exit 0, real parse failures to stderr with exit 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Nowhere left to report a failure to print the diagnostic.
            e.print().ok();
            return ExitCode::from(u8::try_from(e.exit_code()).unwrap_or(2));
        }
    };

    // ── 2. Resolve configuration ──────────────────────────────────────────
    let config = AppConfig::from_args(&cli.global);

    // ── 3. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&config.logging) {
        return handle_error(CliError::from(e), &config);
    }

    debug!(?config, "CLI started");

    // ── 4. Run + 5. Error handling ────────────────────────────────────────
    match run() {
        Ok(()) => {
            info!("greeting complete");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &config),
    }
}

/// Greet on stdout.
#[instrument(skip_all)]
fn run() -> CliResult<()> {
    let greeter = Greeter::from_toolchain()?;
    info!(version = %greeter.version(), "resolved toolchain version");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    greeter.run(&mut out)?;
    Ok(())
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, config: &AppConfig) -> ExitCode {
    err.log();

    // A vanished reader is not worth a banner of its own on stderr.
    if !err.is_broken_pipe() {
        let colored =
            config.logging.color && std::io::IsTerminal::is_terminal(&std::io::stderr());
        eprint!("{}", err.render(colored, config.logging.verbose_errors));
    }

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
