// cli/constants.rs — program identity, exit codes and the display macro.

// ── Identity ──────────────────────────────────────────────────────────────────
pub const PROGRAM_NAME: &str = "expctl";

/// Version string printed by `-V`; format `major.minor.patch YYYY-MM-DD`.
pub const VERSION: &str = "1.4.0 2025-03-30";

/// Stand-in program name when argv[0] is missing.
pub const UNKNOWN_PROGRAM: &str = "((NULL))";

// ── Exit codes ────────────────────────────────────────────────────────────────
pub const EXIT_OK: i32 = 0;
/// `-h` or `-V` was handled.
pub const EXIT_INFO: i32 = 2;
/// Bad flags or stray arguments.
pub const EXIT_USAGE: i32 = 3;
/// Read or write failure; first code of the internal-error range.
pub const EXIT_IO: i32 = 10;

// ── Display helpers ───────────────────────────────────────────────────────────

/// Print a diagnostic to stderr.
#[macro_export]
macro_rules! display {
    ($($arg:tt)*) => { eprint!($($arg)*) };
}
