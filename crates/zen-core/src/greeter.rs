//! The greeter: one version line, the banner, a blank line.
//!
//! Exact bytes written by [`Greeter::run`]:
//!
//! ```text
//! Runtime Version: <major>.<minor>.<patch>\n
//! <BANNER, four \n-terminated lines>
//! \n
//! ```
//!
//! Five non-empty lines, six `\n` in total.

use std::io::Write;

use tracing::{debug, instrument};

use crate::banner::BANNER;
use crate::error::ZenResult;
use crate::version::{ToolchainVersion, VersionSource, VersionTriple};

/// Prefix of the first output line.
pub const VERSION_PREFIX: &str = "Runtime Version: ";

/// Prints the version line and the banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Greeter {
    version: VersionTriple,
}

impl Greeter {
    /// A greeter that reports `version`.
    pub const fn new(version: VersionTriple) -> Self {
        Self { version }
    }

    /// Ask `source` for the version to report.
    pub fn from_source(source: &impl VersionSource) -> ZenResult<Self> {
        source.version().map(Self::new)
    }

    /// Report the rustc this crate was compiled with.
    pub fn from_toolchain() -> ZenResult<Self> {
        Self::from_source(&ToolchainVersion)
    }

    pub fn version(&self) -> VersionTriple {
        self.version
    }

    /// The full greeting, byte-for-byte what [`Self::run`] writes.
    pub fn render(&self) -> String {
        format!("{VERSION_PREFIX}{}\n{BANNER}\n", self.version)
    }

    /// Write the greeting to `out` and flush it.
    ///
    /// The greeting goes out in a single `write_all`, so a failing sink never
    /// sees a partial version line followed by a successful banner.
    #[instrument(skip_all, fields(version = %self.version))]
    pub fn run<W: Write>(&self, out: &mut W) -> ZenResult<()> {
        let greeting = self.render();
        out.write_all(greeting.as_bytes())?;
        out.flush()?;
        debug!(bytes = greeting.len(), "greeting written");
        Ok(())
    }
}
