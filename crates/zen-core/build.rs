//! Captures the version of the compiler building this crate.
//!
//! Exposed to the crate as `ZEN_RUSTC_VERSION`, holding the raw
//! `rustc --version` line (e.g. `rustc 1.85.0 (4d91de4e4 2025-02-17)`).
//! Parsing happens at runtime in `version::ToolchainVersion`.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-env-changed=RUSTC");
    println!("cargo:rerun-if-changed=build.rs");

    // Cargo always sets RUSTC for build scripts; fall back for manual runs.
    let rustc = env::var_os("RUSTC").unwrap_or_else(|| "rustc".into());

    let output = match Command::new(&rustc).arg("--version").output() {
        Ok(output) if output.status.success() => output,
        Ok(output) => panic!(
            "`{} --version` exited with {}",
            rustc.to_string_lossy(),
            output.status
        ),
        Err(e) => panic!("failed to run `{} --version`: {e}", rustc.to_string_lossy()),
    };

    let raw = String::from_utf8_lossy(&output.stdout);
    println!("cargo:rustc-env=ZEN_RUSTC_VERSION={}", raw.trim());
}
