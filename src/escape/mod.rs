//! Byte classification and escaping.
//!
//! Every input byte maps to exactly one output [`Fragment`], decided by the
//! byte value and the run's [`Config`] alone. No state is carried between
//! bytes, so the transducer can be applied to a stream in arbitrary chunks.
//!
//! | Submodule    | Responsibility |
//! |--------------|----------------|
//! | [`config`]   | [`Config`], [`EscapeMode`] and the octal/hex exclusion check. |
//! | [`fragment`] | Fixed-size output fragments and their numeric renderings. |
//! | [`table`]    | [`EscapeTable`], the 256-entry cache used by the stream driver. |
//!
//! Rules, in precedence order:
//!
//! 1. Printable ASCII (0x20–0x7E) passes through, except `\` (doubled) and
//!    `^` (escaped; `\^` in literal mode).
//! 2. ASCII control bytes (0x00–0x1F, 0x7F) are escaped with a per-byte
//!    fallback literal; LF and TAB pass through unless configured otherwise.
//! 3. Everything from 0x80 up is escaped, falling back to `\NNN`.

pub mod config;
pub mod fragment;
pub mod table;

pub use config::{Config, ConfigError, EscapeMode};
pub use fragment::{Fragment, MAX_FRAGMENT_LEN};
pub use table::EscapeTable;

const NUL: u8 = 0x00;
const BEL: u8 = 0x07;
const BS: u8 = 0x08;
const TAB: u8 = 0x09;
const LF: u8 = 0x0a;
const VT: u8 = 0x0b;
const FF: u8 = 0x0c;
const CR: u8 = 0x0d;
const DEL: u8 = 0x7f;

/// Coarse class of a byte, independent of configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    /// 0x20–0x7E.
    Printable,
    /// 0x00–0x1F and 0x7F.
    Control,
    /// 0x80–0xFF, treated as opaque.
    NonAscii,
}

impl ByteClass {
    #[inline]
    pub const fn of(byte: u8) -> Self {
        match byte {
            0x20..=0x7e => ByteClass::Printable,
            0x00..=0x1f | DEL => ByteClass::Control,
            _ => ByteClass::NonAscii,
        }
    }
}

/// The shared octal-else-hex-else-fallback decision.
#[inline]
pub fn flag_rule(byte: u8, mode: EscapeMode, fallback: Fragment) -> Fragment {
    match mode {
        EscapeMode::Octal => Fragment::octal(byte),
        EscapeMode::Hex => Fragment::hex(byte),
        EscapeMode::Literal => fallback,
    }
}

/// Fallback literal for a control byte, or `None` when the configuration
/// passes it through unchanged.
fn control_fallback(byte: u8, config: &Config) -> Option<Fragment> {
    let fallback = match byte {
        NUL => Fragment::caret(NUL),
        BEL => Fragment::pair(b'\\', b'a'),
        BS => Fragment::pair(b'\\', b'b'),
        FF => Fragment::pair(b'\\', b'f'),
        LF if !config.is_newline_control() => return None,
        LF => Fragment::pair(b'\\', b'n'),
        CR => Fragment::pair(b'\\', b'r'),
        TAB if !config.is_tab_control() => return None,
        TAB => Fragment::pair(b'\\', b't'),
        VT => Fragment::pair(b'\\', b'v'),
        DEL => Fragment::bare_octal(DEL),
        _ => Fragment::caret(byte),
    };
    Some(fallback)
}

/// Renders one byte under `config`.
pub fn escape_byte(byte: u8, config: &Config) -> Fragment {
    let mode = config.mode();
    match ByteClass::of(byte) {
        ByteClass::Printable => match byte {
            b'\\' => Fragment::pair(b'\\', b'\\'),
            b'^' => flag_rule(byte, mode, Fragment::pair(b'\\', b'^')),
            _ => Fragment::single(byte),
        },
        ByteClass::Control => match control_fallback(byte, config) {
            Some(fallback) => flag_rule(byte, mode, fallback),
            None => Fragment::single(byte),
        },
        ByteClass::NonAscii => flag_rule(byte, mode, Fragment::bare_octal(byte)),
    }
}

/// Whether `byte` goes through the escape-flag rule under `config`.
///
/// This depends on the LF/TAB flags but never on the escape mode; a doubled
/// backslash is not considered an escape.
pub fn is_escaped(byte: u8, config: &Config) -> bool {
    match ByteClass::of(byte) {
        ByteClass::Printable => byte == b'^',
        ByteClass::Control => control_fallback(byte, config).is_some(),
        ByteClass::NonAscii => true,
    }
}

/// Escapes a whole buffer in one call.
pub fn escape_bytes(input: &[u8], config: &Config) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len());
    EscapeTable::new(config).escape_into(input, &mut out);
    out
}
