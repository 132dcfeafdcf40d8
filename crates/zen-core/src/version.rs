//! Version triples and where they come from.
//!
//! A compiled binary has no interpreter to ask, so the "runtime version" is
//! the rustc that built it.  `build.rs` records `rustc --version` verbatim in
//! `ZEN_RUSTC_VERSION`; [`ToolchainVersion`] turns it into a [`VersionTriple`]
//! at call time.

use std::fmt;
use std::str::FromStr;

use tracing::trace;

use crate::error::{ZenError, ZenResult};

/// Raw `rustc --version` output captured at build time.
pub const RUSTC_VERSION_LINE: &str = env!("ZEN_RUSTC_VERSION");

// ── VersionTriple ────────────────────────────────────────────────────────────

/// `major.minor.patch`, nothing more.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VersionTriple {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl VersionTriple {
    pub const fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

impl fmt::Display for VersionTriple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

/// Accepts `X.Y.Z` of ASCII digits, dropping a pre-release tail such as
/// `-nightly` or `-beta.3`.
impl FromStr for VersionTriple {
    type Err = ZenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let core = trimmed.split_once('-').map_or(trimmed, |(core, _)| core);

        let mut parts = core.split('.');
        let mut next = |name: &str| -> ZenResult<u64> {
            let part = parts
                .next()
                .ok_or_else(|| ZenError::invalid_version(trimmed, format!("missing {name}")))?;
            let not_a_number =
                || ZenError::invalid_version(trimmed, format!("{name} '{part}' is not a number"));
            // `u64::from_str` would also take a leading `+`
            if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
                return Err(not_a_number());
            }
            part.parse().map_err(|_| not_a_number())
        };

        let version = Self::new(next("major")?, next("minor")?, next("patch")?);

        if parts.next().is_some() {
            return Err(ZenError::invalid_version(
                trimmed,
                "expected exactly three components",
            ));
        }

        Ok(version)
    }
}

// ── Sources ──────────────────────────────────────────────────────────────────

/// Something that can report the version the greeter should print.
///
/// Implemented by:
/// - [`ToolchainVersion`] (the rustc that compiled this crate)
/// - [`VersionTriple`] (a fixed version)
pub trait VersionSource {
    fn version(&self) -> ZenResult<VersionTriple>;
}

impl VersionSource for VersionTriple {
    fn version(&self) -> ZenResult<VersionTriple> {
        Ok(*self)
    }
}

/// The compiler toolchain, as recorded by the build script.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolchainVersion;

impl ToolchainVersion {
    /// Parse a `rustc --version` line: `rustc 1.85.0 (4d91de4e4 2025-02-17)`.
    pub fn parse_line(line: &str) -> ZenResult<VersionTriple> {
        let mut tokens = line.split_whitespace();
        match (tokens.next(), tokens.next()) {
            (Some(_), Some(version)) => version.parse(),
            _ => Err(ZenError::invalid_version(line, "expected `rustc <version>`")),
        }
    }
}

impl VersionSource for ToolchainVersion {
    fn version(&self) -> ZenResult<VersionTriple> {
        trace!(raw = RUSTC_VERSION_LINE, "reading toolchain version");
        Self::parse_line(RUSTC_VERSION_LINE)
    }
}
