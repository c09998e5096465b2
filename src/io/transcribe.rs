//! Block-buffered escaping of a byte stream.
//!
//! [`transcribe`] pulls fixed-size blocks from a [`Read`], escapes each block
//! through an [`EscapeTable`] and pushes the result to a [`Write`].
//! [`EscapeWriter`] offers the same transformation as a [`Write`] adapter for
//! callers that produce data push-style.
//!
//! Because the transducer carries no state between bytes, output never
//! depends on where reads or writes happen to split the input.

use std::io::{self, Read, Write};

use crate::escape::{Config, EscapeTable, MAX_FRAGMENT_LEN};

/// Input block size for [`transcribe`]: 64 KiB.
pub const TRANSCRIBE_BLOCK_SIZE: usize = 64 << 10;

/// Byte counts for one transcription.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Transcript {
    /// Bytes consumed from the source.
    pub bytes_in: u64,
    /// Bytes written to the destination.
    pub bytes_out: u64,
}

/// Escapes everything `src` yields into `dst` until end of input.
///
/// `dst` is not flushed; wrap it in a `BufWriter` and flush afterwards as the
/// binary does. Reads interrupted by a signal are retried; any other read or
/// write error is returned immediately.
pub fn transcribe<R, W>(config: &Config, mut src: R, mut dst: W) -> io::Result<Transcript>
where
    R: Read,
    W: Write,
{
    let table = EscapeTable::new(config);
    let mut in_buf = vec![0u8; TRANSCRIBE_BLOCK_SIZE];
    let mut out_buf = Vec::with_capacity(TRANSCRIBE_BLOCK_SIZE * MAX_FRAGMENT_LEN);
    let mut transcript = Transcript::default();

    loop {
        let n = match src.read(&mut in_buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        out_buf.clear();
        table.escape_into(&in_buf[..n], &mut out_buf);
        dst.write_all(&out_buf)?;
        transcript.bytes_in += n as u64;
        transcript.bytes_out += out_buf.len() as u64;
    }

    Ok(transcript)
}

/// A [`Write`] adapter that escapes everything written through it.
///
/// Each `write` call escapes the whole input slice and forwards it with
/// `write_all`, so it always reports the full slice as consumed.
pub struct EscapeWriter<W: Write> {
    inner: W,
    table: EscapeTable,
    scratch: Vec<u8>,
    transcript: Transcript,
}

impl<W: Write> EscapeWriter<W> {
    pub fn new(inner: W, config: &Config) -> Self {
        EscapeWriter {
            inner,
            table: EscapeTable::new(config),
            scratch: Vec::new(),
            transcript: Transcript::default(),
        }
    }

    /// Counts accumulated so far.
    pub fn transcript(&self) -> Transcript {
        self.transcript
    }

    /// Borrows the wrapped writer.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Returns the wrapped writer. Nothing is buffered inside the adapter,
    /// so no data is lost.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: Write> Write for EscapeWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.scratch.clear();
        self.table.escape_into(buf, &mut self.scratch);
        self.inner.write_all(&self.scratch)?;
        self.transcript.bytes_in += buf.len() as u64;
        self.transcript.bytes_out += self.scratch.len() as u64;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
