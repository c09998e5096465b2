//! Standard stream setup for the filter binary.

use std::io::{self, BufWriter, Stdout};

/// Output buffer size for [`stdout_writer`].
const STDOUT_BUFFER_SIZE: usize = 64 << 10;

/// Restores the default `SIGPIPE` disposition.
///
/// The Rust runtime ignores `SIGPIPE`, which turns a closed downstream pipe
/// into an `EPIPE` write error. A filter at the head of a pipeline is
/// expected to die quietly instead, as `expctl < file | head` does in C.
#[cfg(unix)]
pub fn restore_sigpipe() {
    // SAFETY: installing SIG_DFL for SIGPIPE touches no Rust-managed state
    // and happens before any I/O.
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// No-op where `SIGPIPE` does not exist; broken pipes surface as I/O errors.
#[cfg(not(unix))]
pub fn restore_sigpipe() {}

/// Buffered handle on standard output.
///
/// The caller must `flush` it before exiting: `std::process::exit` skips
/// destructors.
pub fn stdout_writer() -> BufWriter<Stdout> {
    BufWriter::with_capacity(STDOUT_BUFFER_SIZE, io::stdout())
}

/// Whether `err` means the reader on the other end went away.
pub fn is_broken_pipe(err: &io::Error) -> bool {
    err.kind() == io::ErrorKind::BrokenPipe
}
