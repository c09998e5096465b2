// cli/help.rs — usage, version and bad-usage reporting.
//
// Every printer takes the destination stream explicitly so the text can be
// captured in tests; the binary passes stderr (usage) or stdout (version).

use std::io::{self, Write};

use crate::cli::args::UsageError;
use crate::cli::constants::VERSION;
use crate::cli::init::Invocation;

/// Full usage text for `invocation`.
pub fn usage_text(invocation: &Invocation) -> String {
    format!(
        "usage: {program} [-h] [-V] [-o | -x] [-n] [-t]\n\
         \n\
         \x20   -h        print help message and exit\n\
         \x20   -V        print version string and exit\n\
         \n\
         \x20   -o        print non-printable bytes as \\oNNN octal\n\
         \x20   -x        print non-printable bytes as \\xHH hex\n\
         \x20   -n        print ASCII newline as if it is a control character (def: print ASCII newline)\n\
         \x20   -t        print ASCII tab as if it is a control character (def: print ASCII tab)\n\
         \n\
         NOTE: -o and -x cannot be used at the same time\n\
         \n\
         Exit codes:\n\
         \x20   0         all OK\n\
         \x20   2         -h and help string printed or -V and version string printed\n\
         \x20   3         command line error\n\
         \x20>= 10        internal error\n\
         \n\
         {exe_name} version: {version}\n",
        program = invocation.program,
        exe_name = invocation.exe_name,
        version = VERSION,
    )
}

/// Print the usage text to `out`.
pub fn print_usage(invocation: &Invocation, out: &mut dyn Write) -> io::Result<()> {
    out.write_all(usage_text(invocation).as_bytes())
}

/// Print the bare version string to `out`.
pub fn print_version(out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{}", VERSION)
}

/// Print `<program>: ERROR: <msg>` followed by the usage text.
pub fn print_bad_usage(
    invocation: &Invocation,
    err: &UsageError,
    out: &mut dyn Write,
) -> io::Result<()> {
    writeln!(out, "{}: ERROR: {}", invocation.program, err)?;
    print_usage(invocation, out)
}
