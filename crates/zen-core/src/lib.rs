//! Zen Core - the greeter behind `zen-hello`.
//!
//! ```text
//! ┌──────────────────────────────┐
//! │        zen-cli (binary)      │
//! │  args, logging, exit codes   │
//! └──────────────┬───────────────┘
//!                │ calls
//!                ▼
//! ┌──────────────────────────────┐
//! │           Greeter            │
//! │  version line + banner       │
//! └──────────────┬───────────────┘
//!                │ asks
//!                ▼
//! ┌──────────────────────────────┐
//! │   VersionSource (trait)      │
//! │ ToolchainVersion | fixed     │
//! └──────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use zen_core::prelude::*;
//!
//! let greeter = Greeter::from_toolchain()?;
//! greeter.run(&mut std::io::stdout().lock())?;
//! # Ok::<(), ZenError>(())
//! ```

pub mod banner;
pub mod error;
pub mod greeter;
pub mod version;

pub mod prelude {
    pub use crate::banner::BANNER;
    pub use crate::error::{ErrorCategory, ZenError, ZenResult};
    pub use crate::greeter::{Greeter, VERSION_PREFIX};
    pub use crate::version::{ToolchainVersion, VersionSource, VersionTriple};
}
