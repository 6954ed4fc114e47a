// Test code uses unwrap/expect for clarity - panics provide good test failure messages
#![allow(clippy::unwrap_used, clippy::expect_used)]

//! Binary-level tests: spawn `backstep` and check stdout, stderr, and exit status.

use std::io::Write;
use std::process::{Command, Output, Stdio};

use pretty_assertions::assert_eq;

fn backstep(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_backstep"))
        .args(args)
        .env_remove("BACKSTEP_LOG")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn backstep");

    child
        .stdin
        .take()
        .expect("stdin is piped")
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr_of(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn chars_test_becomes_tset() {
    let output = backstep(&["chars", "test"], "");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "tset\n");
}

#[test]
fn words_with_take() {
    let output = backstep(&["words", "a", "b", "c", "--take=2"], "");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "c b\n");
}

#[test]
fn lines_from_stdin() {
    let output = backstep(&["lines"], "one\ntwo\n");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "two\none\n");
}

#[test]
fn unknown_command_fails_with_usage() {
    let output = backstep(&["sideways"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).starts_with("error: unknown command 'sideways'"));
    assert!(stdout_of(&output).contains("Usage: backstep"));
}

#[test]
fn bad_option_value_fails() {
    let output = backstep(&["chars", "x", "--take=lots"], "");
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr_of(&output).contains("invalid value 'lots' for --take"));
}

#[test]
fn verbose_logs_to_stderr_only() {
    let output = backstep(&["chars", "-v", "rev"], "");
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "ver\n");
    assert!(stderr_of(&output).contains("running"));
}

#[test]
fn version_prints_package_version() {
    let output = backstep(&["--version"], "");
    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!("backstep {}\n", env!("CARGO_PKG_VERSION"))
    );
}
