//! Run configuration for the escaping transducer.

use std::fmt;

/// How bytes that need escaping are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EscapeMode {
    /// Per-byte fallback literals: `\n`, `^A`, `\177`, ...
    #[default]
    Literal,
    /// `\oNNN` for every escaped byte.
    Octal,
    /// `\xHH` for every escaped byte.
    Hex,
}

/// Rejected flag combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Octal and hex rendering were both requested.
    ConflictingModes,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ConflictingModes => {
                f.write_str("octal and hex escapes cannot be used at the same time")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Immutable transducer configuration.
///
/// The octal and hex flags are folded into a single [`EscapeMode`], so a
/// constructed `Config` can never hold both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Config {
    mode: EscapeMode,
    newline_as_control: bool,
    tab_as_control: bool,
}

impl Config {
    /// Builds a configuration from the four raw flags.
    ///
    /// Fails with [`ConfigError::ConflictingModes`] when `octal_escape` and
    /// `hex_escape` are both set.
    pub fn new(
        octal_escape: bool,
        hex_escape: bool,
        newline_as_control: bool,
        tab_as_control: bool,
    ) -> Result<Self, ConfigError> {
        let mode = match (octal_escape, hex_escape) {
            (true, true) => return Err(ConfigError::ConflictingModes),
            (true, false) => EscapeMode::Octal,
            (false, true) => EscapeMode::Hex,
            (false, false) => EscapeMode::Literal,
        };
        Ok(Config { mode, newline_as_control, tab_as_control })
    }

    pub const fn with_mode(mode: EscapeMode) -> Self {
        Config { mode, newline_as_control: false, tab_as_control: false }
    }

    /// Escape LF instead of passing it through.
    pub const fn newline_as_control(mut self, enabled: bool) -> Self {
        self.newline_as_control = enabled;
        self
    }

    /// Escape TAB instead of passing it through.
    pub const fn tab_as_control(mut self, enabled: bool) -> Self {
        self.tab_as_control = enabled;
        self
    }

    #[inline]
    pub const fn mode(&self) -> EscapeMode {
        self.mode
    }

    #[inline]
    pub const fn octal_escape(&self) -> bool {
        matches!(self.mode, EscapeMode::Octal)
    }

    #[inline]
    pub const fn hex_escape(&self) -> bool {
        matches!(self.mode, EscapeMode::Hex)
    }

    #[inline]
    pub const fn is_newline_control(&self) -> bool {
        self.newline_as_control
    }

    #[inline]
    pub const fn is_tab_control(&self) -> bool {
        self.tab_as_control
    }
}
