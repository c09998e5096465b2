//! Command-line interface for the `expctl` binary.
//!
//! | Submodule     | Responsibility |
//! |---------------|---------------|
//! | [`constants`] | Program identity, version, exit codes and the `display!` macro. |
//! | [`arg_utils`] | Path basename and option-name helpers. |
//! | [`init`]      | [`init::Invocation`] — argv[0] and its basename, threaded to every reporter. |
//! | [`args`]      | Flag parsing into an [`args::Action`], or a [`args::UsageError`]. |
//! | [`help`]      | Usage, version and bad-usage printers. |
//!
//! Typical call sequence: `Invocation::from_env` → `parse_args` → run the
//! filter or print help/version.

pub mod constants;
pub mod arg_utils;
pub mod init;
pub mod args;
pub mod help;
