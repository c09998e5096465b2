//! Command-line flag parsing for `expctl`.
//!
//! The flag set is `[-h] [-V] [-o | -x] [-n] [-t]`, short options only.
//! Flags may be aggregated (`-nt`) and repeated. No operands are accepted.
//!
//! [`parse_args_from`] turns an argument list into an [`Action`]: show help,
//! show the version, or run the filter with a validated [`Config`]. When both
//! `-h` and `-V` are present the one given first wins, as with `getopt`.
//! Anything else wrong with the command line yields a [`UsageError`].

use std::ffi::OsString;
use std::fmt;

use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{CommandFactory, FromArgMatches, Parser};

use crate::cli::arg_utils::option_name;
use crate::cli::constants::{EXIT_USAGE, PROGRAM_NAME};
use crate::cli::init::Invocation;
use crate::escape::{Config, ConfigError};

#[derive(Parser, Debug)]
#[command(
    name = PROGRAM_NAME,
    disable_help_flag = true,
    disable_version_flag = true,
    args_override_self = true
)]
struct Flags {
    /// Print help message and exit.
    #[arg(short = 'h')]
    help: bool,
    /// Print version string and exit.
    #[arg(short = 'V')]
    version: bool,
    /// Print non-printable bytes as \oNNN octal.
    #[arg(short = 'o')]
    octal: bool,
    /// Print non-printable bytes as \xHH hex.
    #[arg(short = 'x')]
    hex: bool,
    /// Print ASCII newline as if it is a control character.
    #[arg(short = 'n')]
    newline: bool,
    /// Print ASCII tab as if it is a control character.
    #[arg(short = 't')]
    tab: bool,
    /// Collected only to be rejected with a count.
    #[arg(hide = true)]
    operands: Vec<OsString>,
}

/// What the binary should do after parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Transcribe(Config),
}

/// A rejected command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UsageError {
    /// Unknown flag, named without its leading dashes.
    IllegalOption(String),
    /// Operands were given; carries how many.
    UnexpectedArgs(usize),
    /// `-o` and `-x` together.
    ConflictingModes,
    /// Any other malformed flag.
    InvalidFlag,
}

impl UsageError {
    pub fn exit_code(&self) -> i32 {
        EXIT_USAGE
    }
}

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UsageError::IllegalOption(opt) => write!(f, "illegal option -- {}", opt),
            UsageError::UnexpectedArgs(n) => write!(f, "expected 0 args, found: {}", n),
            UsageError::ConflictingModes => f.write_str("-o and -x cannot be used at the same time"),
            UsageError::InvalidFlag => f.write_str("invalid -flag"),
        }
    }
}

impl std::error::Error for UsageError {}

impl From<ConfigError> for UsageError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::ConflictingModes => UsageError::ConflictingModes,
        }
    }
}

impl From<clap::Error> for UsageError {
    fn from(err: clap::Error) -> Self {
        if err.kind() != ErrorKind::UnknownArgument {
            return UsageError::InvalidFlag;
        }
        match err.get(ContextKind::InvalidArg) {
            Some(ContextValue::String(arg)) => UsageError::IllegalOption(option_name(arg).to_owned()),
            _ => UsageError::InvalidFlag,
        }
    }
}

/// Parse the process arguments (skipping argv[0]).
pub fn parse_args(invocation: &Invocation) -> Result<Action, UsageError> {
    parse_args_from(invocation, std::env::args_os().skip(1))
}

/// Parse an explicit argument list; `argv` excludes argv[0].
pub fn parse_args_from<I, T>(invocation: &Invocation, argv: I) -> Result<Action, UsageError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let argv: Vec<OsString> = argv.into_iter().map(Into::into).collect();
    let full = std::iter::once(OsString::from(&invocation.program)).chain(argv.iter().cloned());
    let matches = Flags::command().try_get_matches_from(full)?;
    let flags = Flags::from_arg_matches(&matches)?;

    if flags.help || flags.version {
        let given = if flags.help { Action::Help } else { Action::Version };
        return Ok(first_info_flag(&argv).unwrap_or(given));
    }

    if !flags.operands.is_empty() {
        return Err(UsageError::UnexpectedArgs(flags.operands.len()));
    }

    let config = Config::new(flags.octal, flags.hex, flags.newline, flags.tab)?;
    Ok(Action::Transcribe(config))
}

/// The first `-h` or `-V` in left-to-right order, looking inside clusters.
///
/// Clap keeps only the last occurrence of a repeated flag, so the order is
/// taken from the raw tokens. Only called once clap has accepted them, so
/// every `-` token up to `--` is a cluster of known short flags.
fn first_info_flag(argv: &[OsString]) -> Option<Action> {
    argv.iter()
        .filter_map(|arg| arg.to_str())
        .take_while(|s| *s != "--")
        .filter_map(|s| s.strip_prefix('-'))
        .flat_map(str::chars)
        .find_map(|c| match c {
            'h' => Some(Action::Help),
            'V' => Some(Action::Version),
            _ => None,
        })
}
