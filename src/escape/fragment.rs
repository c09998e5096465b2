//! Inline output fragment produced for a single input byte.
//!
//! The longest rendering is the octal escape `\o377` (five bytes), so every
//! fragment fits in a fixed `[u8; MAX_FRAGMENT_LEN]` without heap allocation.

use std::fmt;
use std::ops::Deref;

/// Maximum number of bytes any single input byte can expand to (`\oNNN`).
pub const MAX_FRAGMENT_LEN: usize = 5;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// The bytes emitted for one input byte.
///
/// Always 1 to [`MAX_FRAGMENT_LEN`] bytes long and, apart from the
/// pass-through cases, pure ASCII.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fragment {
    buf: [u8; MAX_FRAGMENT_LEN],
    len: u8,
}

impl Fragment {
    /// The byte itself, unchanged.
    #[inline]
    pub const fn single(byte: u8) -> Self {
        Fragment { buf: [byte, 0, 0, 0, 0], len: 1 }
    }

    /// A two-byte literal such as `\\`, `\n` or `^A`.
    #[inline]
    pub const fn pair(first: u8, second: u8) -> Self {
        Fragment { buf: [first, second, 0, 0, 0], len: 2 }
    }

    /// Caret notation: `^` followed by `byte + 64`.
    ///
    /// Only meaningful for bytes below 0x40; the addition wraps otherwise.
    #[inline]
    pub const fn caret(byte: u8) -> Self {
        Fragment::pair(b'^', byte.wrapping_add(64))
    }

    /// `\oNNN` — three zero-padded octal digits behind a `\o` prefix.
    #[inline]
    pub const fn octal(byte: u8) -> Self {
        let [a, b, c] = octal_digits(byte);
        Fragment { buf: [b'\\', b'o', a, b, c], len: 5 }
    }

    /// `\NNN` — three zero-padded octal digits behind a bare backslash.
    #[inline]
    pub const fn bare_octal(byte: u8) -> Self {
        let [a, b, c] = octal_digits(byte);
        Fragment { buf: [b'\\', a, b, c, 0], len: 4 }
    }

    /// `\xHH` — two zero-padded lowercase hex digits.
    #[inline]
    pub const fn hex(byte: u8) -> Self {
        Fragment {
            buf: [
                b'\\',
                b'x',
                HEX_DIGITS[(byte >> 4) as usize],
                HEX_DIGITS[(byte & 0x0f) as usize],
                0,
            ],
            len: 4,
        }
    }

    /// The emitted bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len as usize]
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Always `false`; every byte produces output.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[inline]
const fn octal_digits(byte: u8) -> [u8; 3] {
    [
        b'0' + (byte >> 6),
        b'0' + ((byte >> 3) & 0o7),
        b'0' + (byte & 0o7),
    ]
}

impl Deref for Fragment {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl AsRef<[u8]> for Fragment {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fragment({:?})", self.as_bytes().escape_ascii().to_string())
    }
}
