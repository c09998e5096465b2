// Integration tests for cli/help.rs — usage, version and bad-usage text.

use expctl::cli::args::UsageError;
use expctl::cli::constants::VERSION;
use expctl::cli::help::{print_bad_usage, print_usage, print_version, usage_text};
use expctl::cli::init::Invocation;

fn render_usage(argv0: &str) -> String {
    let mut buf = Vec::new();
    print_usage(&Invocation::from_argv0(argv0), &mut buf).unwrap();
    String::from_utf8(buf).unwrap()
}

#[test]
fn print_usage_matches_usage_text() {
    let inv = Invocation::from_argv0("expctl");
    assert_eq!(render_usage("expctl"), usage_text(&inv));
}

#[test]
fn usage_documents_every_flag() {
    let text = render_usage("expctl");
    for flag in ["-h", "-V", "-o", "-x", "-n", "-t"] {
        assert!(text.contains(&format!("\n    {flag}  ")), "missing {flag}");
    }
    assert!(text.contains("-o and -x cannot be used at the same time"));
}

#[test]
fn usage_lists_exit_codes() {
    let text = render_usage("expctl");
    assert!(text.contains("    0         all OK"));
    assert!(text.contains("    2         -h and help string printed"));
    assert!(text.contains("    3         command line error"));
    assert!(text.contains(" >= 10        internal error"));
}

#[test]
fn usage_uses_full_path_then_basename() {
    let text = render_usage("./build/expctl");
    assert!(text.starts_with("usage: ./build/expctl "));
    assert!(text.ends_with(&format!("\nexpctl version: {VERSION}\n")));
}

#[test]
fn version_output() {
    let mut buf = Vec::new();
    print_version(&mut buf).unwrap();
    assert_eq!(buf, format!("{VERSION}\n").into_bytes());
}

#[test]
fn bad_usage_for_each_error() {
    let inv = Invocation::from_argv0("expctl");
    let cases = [
        (UsageError::IllegalOption("z".into()), "expctl: ERROR: illegal option -- z"),
        (UsageError::UnexpectedArgs(2), "expctl: ERROR: expected 0 args, found: 2"),
        (UsageError::ConflictingModes, "expctl: ERROR: -o and -x cannot be used at the same time"),
        (UsageError::InvalidFlag, "expctl: ERROR: invalid -flag"),
    ];
    for (err, first_line) in cases {
        let mut buf = Vec::new();
        print_bad_usage(&inv, &err, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text.lines().next(), Some(first_line));
        assert!(text.ends_with(&usage_text(&inv)));
    }
}
