//! Binary entry point for the `expctl` filter.
//!
//! # Control flow
//!
//! 1. [`restore_sigpipe`] so a closed downstream pipe ends the process quietly.
//! 2. [`Invocation::from_env`] captures argv[0] for diagnostics.
//! 3. [`parse_args`] yields an [`Action`] or a usage error (exit 3).
//! 4. Help and version exit 2; the filter itself exits 0, or 10 on I/O failure.

use std::io::{self, Write};

use anyhow::Context;

use expctl::cli::args::{parse_args, Action};
use expctl::cli::constants::{EXIT_INFO, EXIT_IO, EXIT_OK};
use expctl::cli::help::{print_bad_usage, print_usage, print_version};
use expctl::cli::init::Invocation;
use expctl::display;
use expctl::escape::Config;
use expctl::io::{is_broken_pipe, restore_sigpipe, stdout_writer, transcribe, Transcript};

/// Escape stdin to stdout until end of input.
fn run(config: &Config) -> anyhow::Result<Transcript> {
    let stdin = io::stdin().lock();
    let mut out = stdout_writer();
    let transcript =
        transcribe(config, stdin, &mut out).context("cannot copy standard input to standard output")?;
    out.flush().context("cannot flush standard output")?;
    Ok(transcript)
}

fn main() {
    restore_sigpipe();
    let invocation = Invocation::from_env();

    let action = match parse_args(&invocation) {
        Ok(a) => a,
        Err(e) => {
            let _ = print_bad_usage(&invocation, &e, &mut io::stderr());
            std::process::exit(e.exit_code());
        }
    };

    let exit_code = match action {
        Action::Help => {
            let _ = print_usage(&invocation, &mut io::stderr());
            EXIT_INFO
        }
        Action::Version => {
            let mut stdout = io::stdout();
            let _ = print_version(&mut stdout).and_then(|()| stdout.flush());
            EXIT_INFO
        }
        Action::Transcribe(config) => match run(&config) {
            Ok(_) => EXIT_OK,
            Err(e) => {
                // A reader that went away needs no explanation.
                let quiet = e.downcast_ref::<io::Error>().is_some_and(is_broken_pipe);
                if !quiet {
                    display!("{}: ERROR: {:#}\n", invocation.program, e);
                }
                EXIT_IO
            }
        },
    };

    std::process::exit(exit_code);
}
