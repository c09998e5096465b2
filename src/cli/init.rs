//! Invocation identity.
//!
//! Diagnostics quote the full argv[0]; the trailing version line of the usage
//! text quotes only its basename. Both are captured once in an
//! [`Invocation`] that is passed to every reporter, instead of living in a
//! process-wide variable.

use crate::cli::arg_utils::last_name_from_path;
use crate::cli::constants::UNKNOWN_PROGRAM;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// argv[0] as given.
    pub program: String,
    /// Basename of `program`.
    pub exe_name: String,
}

impl Invocation {
    pub fn from_argv0(argv0: &str) -> Self {
        let program = if argv0.is_empty() { UNKNOWN_PROGRAM } else { argv0 };
        let mut exe_name = last_name_from_path(program);
        if exe_name.is_empty() {
            exe_name = program;
        }
        Invocation {
            program: program.to_owned(),
            exe_name: exe_name.to_owned(),
        }
    }

    /// Reads argv[0] from the process arguments.
    pub fn from_env() -> Self {
        let argv0 = std::env::args_os()
            .next()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self::from_argv0(&argv0)
    }
}
