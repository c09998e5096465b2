//! Precomputed per-byte escape table.

use crate::escape::{escape_byte, Config, Fragment};

/// The 256 fragments of one [`Config`], indexed by byte value.
///
/// Built once per run; lookups replace the branchy classification in the
/// stream driver's inner loop.
#[derive(Clone)]
pub struct EscapeTable {
    config: Config,
    entries: [Fragment; 256],
}

impl EscapeTable {
    pub fn new(config: &Config) -> Self {
        let mut entries = [Fragment::single(0); 256];
        for (byte, entry) in (0..=u8::MAX).zip(entries.iter_mut()) {
            *entry = escape_byte(byte, config);
        }
        EscapeTable { config: *config, entries }
    }

    /// Configuration the table was built from.
    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn get(&self, byte: u8) -> Fragment {
        self.entries[byte as usize]
    }

    /// Appends the escaped form of `input` to `out`.
    ///
    /// Returns the number of bytes appended.
    pub fn escape_into(&self, input: &[u8], out: &mut Vec<u8>) -> usize {
        let start = out.len();
        out.reserve(input.len());
        for &byte in input {
            out.extend_from_slice(self.entries[byte as usize].as_bytes());
        }
        out.len() - start
    }
}

impl std::fmt::Debug for EscapeTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EscapeTable").field("config", &self.config).finish_non_exhaustive()
    }
}
