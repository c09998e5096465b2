// e2e/error_handling.rs — usage errors and exit codes of the `expctl` binary.
//
// Every usage error must exit 3, print `<program>: ERROR: ...` plus the usage
// text on stderr, and write nothing to stdout.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn expctl_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_expctl"))
}

fn run(args: &[&str]) -> Output {
    Command::new(expctl_bin())
        .args(args)
        .stdin(Stdio::null())
        .output()
        .expect("spawn expctl")
}

fn assert_usage_error(args: &[&str], message: &str) {
    let out = run(args);
    assert_eq!(out.status.code(), Some(3), "{args:?}");
    assert!(out.stdout.is_empty(), "{args:?}: stdout must stay empty");
    let err = String::from_utf8_lossy(&out.stderr);
    let first = err.lines().next().unwrap_or_default();
    assert!(first.contains(": ERROR: "), "{args:?}: {first}");
    assert!(first.ends_with(message), "{args:?}: {first}");
    assert!(err.contains("usage: "), "{args:?}: usage text missing");
}

#[test]
fn octal_and_hex_together() {
    assert_usage_error(&["-o", "-x"], "-o and -x cannot be used at the same time");
    assert_usage_error(&["-xo"], "-o and -x cannot be used at the same time");
}

#[test]
fn unknown_flag() {
    assert_usage_error(&["-z"], "illegal option -- z");
}

#[test]
fn positional_arguments() {
    assert_usage_error(&["somefile"], "expected 0 args, found: 1");
    assert_usage_error(&["-n", "a", "b"], "expected 0 args, found: 2");
}

#[test]
fn help_takes_precedence_over_conflict() {
    let out = run(&["-o", "-x", "-h"]);
    assert_eq!(out.status.code(), Some(2));
}

#[test]
fn success_is_zero() {
    let out = run(&["-n", "-t"]);
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
}
