//! Resolved run settings.
//!
//! `zen-hello` reads no configuration files.  [`AppConfig`] is what the
//! command-line flags and `NO_COLOR` boil down to, built once in `main` and
//! passed down by value.
//!
//! # Resolution order (highest priority first)
//!
//! 1. `RUST_LOG` (applied by the subscriber, see `logging.rs`)
//! 2. CLI flags / `NO_COLOR`
//! 3. Built-in defaults

use std::ffi::OsStr;

use crate::cli::GlobalArgs;

/// Environment variable that disables colour when set to anything non-empty.
pub const NO_COLOR_ENV: &str = "NO_COLOR";

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    /// `tracing` level name for the zen crates.
    pub level: &'static str,
    /// Allow ANSI colour on stderr (still subject to TTY detection).
    pub color: bool,
    /// Print the error cause chain when a run fails.
    pub verbose_errors: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            logging: LoggingConfig {
                level: "warn",
                color: true,
                verbose_errors: false,
            },
        }
    }
}

impl AppConfig {
    /// Layer the CLI flags and the process environment over the defaults.
    pub fn from_args(args: &GlobalArgs) -> Self {
        Self::resolve(args, std::env::var_os(NO_COLOR_ENV).as_deref())
    }

    /// Same as [`Self::from_args`] with an explicit `NO_COLOR` value.
    pub fn resolve(args: &GlobalArgs, no_color_env: Option<&OsStr>) -> Self {
        let defaults = Self::default();
        let no_color = args.no_color || no_color_env.is_some_and(|v| !v.is_empty());
        Self {
            logging: LoggingConfig {
                level: derive_level(args).unwrap_or(defaults.logging.level),
                color: defaults.logging.color && !no_color,
                verbose_errors: args.verbose > 0,
            },
        }
    }
}

/// Translate the verbosity counter + quiet flag to a level string.
///
/// `None` means no flag was given and the default applies.
fn derive_level(args: &GlobalArgs) -> Option<&'static str> {
    if args.quiet {
        return Some("error");
    }
    match args.verbose {
        0 => None,
        1 => Some("info"),
        2 => Some("debug"),
        _ => Some("trace"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with(verbose: u8, quiet: bool, no_color: bool) -> GlobalArgs {
        GlobalArgs {
            verbose,
            quiet,
            no_color,
        }
    }

    fn without_env(args: &GlobalArgs) -> AppConfig {
        AppConfig::resolve(args, None)
    }

    #[test]
    fn default_level_is_warn() {
        assert_eq!(AppConfig::default().logging.level, "warn");
        assert_eq!(
            without_env(&args_with(0, false, false)),
            AppConfig::default()
        );
    }

    #[test]
    fn level_quiet() {
        let cfg = without_env(&args_with(0, true, false));
        assert_eq!(cfg.logging.level, "error");
    }

    #[test]
    fn level_verbose_steps() {
        assert_eq!(without_env(&args_with(1, false, false)).logging.level, "info");
        assert_eq!(without_env(&args_with(2, false, false)).logging.level, "debug");
        assert_eq!(without_env(&args_with(3, false, false)).logging.level, "trace");
        assert_eq!(without_env(&args_with(10, false, false)).logging.level, "trace");
    }

    // quiet takes precedence over verbose
    #[test]
    fn quiet_overrides_verbose() {
        let cfg = without_env(&args_with(3, true, false));
        assert_eq!(cfg.logging.level, "error");
    }

    #[test]
    fn no_color_disables_color() {
        let cfg = AppConfig::resolve(&args_with(0, false, true), None);
        assert!(!cfg.logging.color);
    }

    #[test]
    fn no_color_env_any_non_empty_value() {
        for value in ["1", "true", "0", "yes"] {
            let cfg = AppConfig::resolve(&args_with(0, false, false), Some(OsStr::new(value)));
            assert!(!cfg.logging.color, "NO_COLOR={value} kept colour on");
        }
    }

    #[test]
    fn no_color_env_empty_is_unset() {
        let cfg = AppConfig::resolve(&args_with(0, false, false), Some(OsStr::new("")));
        assert!(cfg.logging.color);
        assert!(AppConfig::resolve(&args_with(0, false, false), None).logging.color);
    }

    #[test]
    fn verbose_enables_error_chain() {
        assert!(without_env(&args_with(1, false, false)).logging.verbose_errors);
        assert!(!without_env(&args_with(0, true, false)).logging.verbose_errors);
    }
}
