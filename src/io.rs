//! Stream plumbing around the escaping transducer.
//!
//! - [`transcribe`] — blocking read → escape → write loop.
//! - [`EscapeWriter`] — the same transformation as a `Write` adapter.
//! - [`stdio`] — standard stream setup used by the binary.

pub mod stdio;
pub mod transcribe;

pub use stdio::{is_broken_pipe, restore_sigpipe, stdout_writer};
pub use transcribe::{transcribe, EscapeWriter, Transcript, TRANSCRIBE_BLOCK_SIZE};
