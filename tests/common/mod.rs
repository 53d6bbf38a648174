//! Common test utilities for Lox CLI integration tests.
//!
//! Each test file is compiled as a separate crate, so not every helper
//! is used in every file.
#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

use tempfile::tempdir;

/// Returns the path to the `lox` binary built by cargo.
pub fn lox_binary() -> String {
    env!("CARGO_BIN_EXE_lox").to_string()
}

/// Writes `source` to a scratch `.lox` file and runs the built binary on
/// it, returning the raw process output.
pub fn run_source(source: &str) -> Output {
    let temp = tempdir().unwrap();
    let path = temp.path().join("program.lox");
    fs::write(&path, source).unwrap();

    Command::new(lox_binary()).arg(&path).output().unwrap()
}

/// Runs `source` and returns `(stdout, exit_code)`, panicking if the
/// process couldn't be spawned.
pub fn run_and_capture(source: &str) -> (String, Option<i32>) {
    let output = run_source(source);
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.code(),
    )
}

/// Runs the binary with no input file and the given stdin, returning
/// stdout and the exit code.
pub fn run_repl_with_stdin(stdin_text: &str) -> (String, Option<i32>) {
    use std::io::Write;
    use std::process::Stdio;

    let mut child = Command::new(lox_binary())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin_text.as_bytes())
        .unwrap();

    let output = child.wait_with_output().unwrap();
    (
        String::from_utf8_lossy(&output.stdout).to_string(),
        output.status.code(),
    )
}

pub fn lox_path() -> PathBuf {
    PathBuf::from(lox_binary())
}
