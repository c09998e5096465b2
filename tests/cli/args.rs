// Integration tests for cli/args.rs — flag parsing into an Action.

use expctl::cli::args::{parse_args_from, Action, UsageError};
use expctl::cli::constants::EXIT_USAGE;
use expctl::cli::init::Invocation;
use expctl::escape::{Config, EscapeMode};

fn parse(args: &[&str]) -> Result<Action, UsageError> {
    parse_args_from(&Invocation::from_argv0("/usr/bin/expctl"), args.iter().copied())
}

fn transcribe_config(args: &[&str]) -> Config {
    match parse(args) {
        Ok(Action::Transcribe(c)) => c,
        other => panic!("{args:?}: expected Transcribe, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Valid flag sets
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn every_valid_combination() {
    for mode_flag in ["", "o", "x"] {
        for n in [false, true] {
            for t in [false, true] {
                let mut flag = String::from(mode_flag);
                if n {
                    flag.push('n');
                }
                if t {
                    flag.push('t');
                }
                let args: Vec<String> = if flag.is_empty() { vec![] } else { vec![format!("-{flag}")] };
                let refs: Vec<&str> = args.iter().map(String::as_str).collect();
                let c = transcribe_config(&refs);

                let mode = match mode_flag {
                    "o" => EscapeMode::Octal,
                    "x" => EscapeMode::Hex,
                    _ => EscapeMode::Literal,
                };
                assert_eq!(c, Config::with_mode(mode).newline_as_control(n).tab_as_control(t));
            }
        }
    }
}

#[test]
fn separate_and_aggregated_flags_agree() {
    assert_eq!(transcribe_config(&["-o", "-n", "-t"]), transcribe_config(&["-ont"]));
    assert_eq!(transcribe_config(&["-t", "-x"]), transcribe_config(&["-tx"]));
}

#[test]
fn repeated_flags_are_accepted() {
    let c = transcribe_config(&["-n", "-n", "-nn"]);
    assert!(c.is_newline_control());
}

// ─────────────────────────────────────────────────────────────────────────────
// Help / version
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn help_ignores_other_valid_flags() {
    assert_eq!(parse(&["-o", "-h", "-n"]), Ok(Action::Help));
}

#[test]
fn first_of_help_and_version_wins() {
    assert_eq!(parse(&["-hV"]), Ok(Action::Help));
    assert_eq!(parse(&["-Vh"]), Ok(Action::Version));
}

#[test]
fn repeated_info_flags_keep_first_position() {
    assert_eq!(parse(&["-h", "-V", "-h"]), Ok(Action::Help));
    assert_eq!(parse(&["-V", "-h", "-V"]), Ok(Action::Version));
    assert_eq!(parse(&["-hVh"]), Ok(Action::Help));
}

// ─────────────────────────────────────────────────────────────────────────────
// Usage errors
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn octal_and_hex_conflict_in_any_order() {
    for args in [&["-o", "-x"][..], &["-x", "-o"], &["-xo"], &["-nox"]] {
        assert_eq!(parse(args), Err(UsageError::ConflictingModes), "{args:?}");
    }
}

#[test]
fn unknown_short_flag() {
    assert_eq!(parse(&["-q"]), Err(UsageError::IllegalOption("q".to_owned())));
}

#[test]
fn unknown_flag_inside_aggregate() {
    assert_eq!(parse(&["-nq"]), Err(UsageError::IllegalOption("q".to_owned())));
}

#[test]
fn long_options_do_not_exist() {
    assert!(matches!(parse(&["--help"]), Err(UsageError::IllegalOption(_))));
    assert!(matches!(parse(&["--version"]), Err(UsageError::IllegalOption(_))));
}

#[test]
fn operands_are_rejected() {
    assert_eq!(parse(&["input.bin"]), Err(UsageError::UnexpectedArgs(1)));
    assert_eq!(parse(&["-"]), Err(UsageError::UnexpectedArgs(1)));
    assert_eq!(parse(&["-o", "a", "b", "c"]), Err(UsageError::UnexpectedArgs(3)));
}

#[test]
fn flag_with_value_is_invalid() {
    assert!(parse(&["-o=1"]).is_err());
}

#[test]
fn all_usage_errors_exit_3() {
    let errors = [
        UsageError::IllegalOption("q".into()),
        UsageError::UnexpectedArgs(2),
        UsageError::ConflictingModes,
        UsageError::InvalidFlag,
    ];
    for e in errors {
        assert_eq!(e.exit_code(), EXIT_USAGE);
        assert!(!e.to_string().is_empty());
    }
}
