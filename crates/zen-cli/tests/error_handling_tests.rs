//! Tests for usage errors and unwritable stdout.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_positional_argument_rejected() {
    let mut cmd = Command::cargo_bin("zen-hello").unwrap();
    cmd.arg("extra");

    cmd.assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unexpected argument"));
}

#[test]
fn test_unknown_flag_rejected() {
    let mut cmd = Command::cargo_bin("zen-hello").unwrap();
    cmd.arg("--frobnicate");

    cmd.assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_quiet_with_verbose_rejected() {
    let mut cmd = Command::cargo_bin("zen-hello").unwrap();
    cmd.args(["--quiet", "--verbose"]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

/// `/dev/full` accepts the open and fails every write with `ENOSPC`.
#[cfg(target_os = "linux")]
#[test]
fn test_unwritable_stdout_exits_nonzero() {
    use std::fs::OpenOptions;
    use std::process::{Command as StdCommand, Stdio};

    let full = OpenOptions::new().write(true).open("/dev/full").unwrap();
    let output = StdCommand::new(env!("CARGO_BIN_EXE_zen-hello"))
        .env_remove("RUST_LOG")
        .stdout(Stdio::from(full))
        .stderr(Stdio::piped())
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not write the greeting"), "stderr: {stderr}");
    assert!(stderr.contains("Greeting failed"), "stderr: {stderr}");
}

/// The reader closes the pipe before anything is written.
#[cfg(unix)]
#[test]
fn test_broken_pipe_exits_nonzero_quietly() {
    use std::process::{Command as StdCommand, Stdio};

    // The sleep keeps zen-hello from writing until the read end is gone.
    let script = format!("sleep 1; exec '{}'", env!("CARGO_BIN_EXE_zen-hello"));
    let mut child = StdCommand::new("sh")
        .args(["-c", &script])
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    drop(child.stdout.take());

    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!stderr.contains("could not write"), "stderr: {stderr}");
}
