// arg_utils.rs — small helpers for argv handling.

/// Returns the last path component of `path`.
///
/// `/` always separates; `\` does only on Windows, so on Unix a backslash
/// stays part of the name.
pub fn last_name_from_path(path: &str) -> &str {
    let is_separator = |c: char| c == '/' || (cfg!(windows) && c == '\\');
    match path.rfind(is_separator) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Strips the leading dashes from an option as clap reports it (`-z`, `--zz`).
///
/// A bare `-` or `--` is returned unchanged.
pub fn option_name(arg: &str) -> &str {
    let trimmed = arg.trim_start_matches('-');
    if trimmed.is_empty() {
        arg
    } else {
        trimmed
    }
}
