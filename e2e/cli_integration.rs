// e2e/cli_integration.rs — black-box tests of the `expctl` binary.
//
// Drives the compiled binary through std::process::Command: stdin is piped
// or redirected from a temp file, stdout and stderr are captured.

use std::fs::{self, File};
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Path to the compiled `expctl` binary under test.
fn expctl_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_expctl"))
}

/// Run the binary with `args`, feeding `input` on stdin.
fn run(args: &[&str], input: &[u8]) -> Output {
    let mut child = Command::new(expctl_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn expctl");
    {
        let mut stdin = child.stdin.take().expect("stdin");
        stdin.write_all(input).expect("write stdin");
    }
    child.wait_with_output().expect("wait expctl")
}

fn stdout_of(args: &[&str], input: &[u8]) -> Vec<u8> {
    let out = run(args, input);
    assert_eq!(out.status.code(), Some(0), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    out.stdout
}

// ── 1. Default rendering ─────────────────────────────────────────────────────

#[test]
fn default_scenarios() {
    let cases: [(&[u8], &[u8]); 9] = [
        (b"A", b"A"),
        (b"\\", b"\\\\"),
        (b"^", b"\\^"),
        (b"\x00", b"^@"),
        (b"\n", b"\n"),
        (b"\t", b"\t"),
        (b"\x7f", b"\\177"),
        (b"\x01", b"^A"),
        (b"\x80", b"\\200"),
    ];
    for (input, want) in cases {
        assert_eq!(stdout_of(&[], input), want, "input {input:?}");
    }
}

#[test]
fn empty_input_gives_empty_output() {
    let out = run(&[], b"");
    assert_eq!(out.status.code(), Some(0));
    assert!(out.stdout.is_empty());
    assert!(out.stderr.is_empty());
}

// ── 2. Octal / hex ───────────────────────────────────────────────────────────

#[test]
fn octal_flag() {
    assert_eq!(stdout_of(&["-o"], b"\x00\x80"), b"\\o000\\o200");
}

#[test]
fn hex_flag() {
    assert_eq!(stdout_of(&["-x"], b"\x00\x80"), b"\\x00\\x80");
}

// ── 3. Newline / tab ─────────────────────────────────────────────────────────

#[test]
fn newline_flag() {
    assert_eq!(stdout_of(&["-n"], b"a\nb\n"), b"a\\nb\\n");
}

#[test]
fn tab_flag_with_hex() {
    assert_eq!(stdout_of(&["-t", "-x"], b"\t"), b"\\x09");
    assert_eq!(stdout_of(&["-tx"], b"\t\n"), b"\\x09\n");
}

// ── 4. Input redirected from a file ──────────────────────────────────────────

#[test]
fn file_redirect_all_bytes() {
    let dir = TempDir::new().expect("TempDir::new");
    let path = dir.path().join("all.bin");
    let data: Vec<u8> = (0..=255u8).collect();
    fs::write(&path, &data).expect("write input");

    let out = Command::new(expctl_bin())
        .arg("-x")
        .stdin(Stdio::from(File::open(&path).expect("open input")))
        .output()
        .expect("spawn expctl");
    assert_eq!(out.status.code(), Some(0));

    let mut expected = Vec::new();
    for b in data {
        match b {
            b'\\' => expected.extend_from_slice(b"\\\\"),
            b'\t' | b'\n' => expected.push(b),
            b'^' => expected.extend_from_slice(b"\\x5e"),
            0x20..=0x7e => expected.push(b),
            _ => expected.extend_from_slice(format!("\\x{:02x}", b).as_bytes()),
        }
    }
    assert_eq!(out.stdout, expected);
}

// ── 5. Help / version ────────────────────────────────────────────────────────

#[test]
fn help_exits_2_with_usage_on_stderr() {
    let out = run(&["-h"], b"ignored");
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    let err = String::from_utf8_lossy(&out.stderr);
    assert!(err.contains("usage: "), "{err}");
    assert!(err.contains("[-o | -x]"), "{err}");
}

#[test]
fn version_exits_2_with_version_on_stdout() {
    let out = run(&["-V"], b"");
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(String::from_utf8_lossy(&out.stdout), format!("{}\n", expctl::VERSION));
}

#[test]
fn earliest_of_repeated_help_and_version_is_honoured() {
    let out = run(&["-V", "-h", "-V"], b"");
    assert_eq!(out.status.code(), Some(2));
    assert_eq!(String::from_utf8_lossy(&out.stdout), format!("{}\n", expctl::VERSION));
    assert!(out.stderr.is_empty());

    let out = run(&["-h", "-V", "-h"], b"");
    assert_eq!(out.status.code(), Some(2));
    assert!(out.stdout.is_empty());
    assert!(String::from_utf8_lossy(&out.stderr).contains("usage: "));
}
