// expctl — expand control characters in a byte stream into printable escapes

pub mod escape;
pub mod io;
pub mod cli;

pub use cli::constants::VERSION;

// ── Top-level re-exports ──────────────────────────────────────────────────────
pub use escape::{escape_byte, escape_bytes, is_escaped, ByteClass, Config, ConfigError, EscapeMode, Fragment};
pub use io::transcribe;
