//! Log file location, ANSI stripping and timestamps.
use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;

/// Remove the SGR colour sequences (`ESC [ ... m`) that console messages
/// carry.
pub(super) fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut rest = s;
    while let Some((before, after)) = rest.split_once("\x1b[") {
        out.push_str(before);
        rest = after.split_once('m').map_or("", |(_, tail)| tail);
    }
    out.push_str(rest);
    out
}

/// Cache root: `$XDG_CACHE_HOME`, else `$HOME/.cache`, else `./.cache`.
fn cache_root(xdg_cache_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    xdg_cache_home
        .filter(|dir| !dir.is_empty())
        .map(PathBuf::from)
        .or_else(|| home.map(|h| PathBuf::from(h).join(".cache")))
        .unwrap_or_else(|| PathBuf::from(".cache"))
}

/// Return the `rkit/` directory under the cache root, creating it if needed.
pub(super) fn rkit_cache_dir() -> Option<PathBuf> {
    let dir = cache_root(
        std::env::var_os("XDG_CACHE_HOME"),
        std::env::var_os("HOME"),
    )
    .join("rkit");
    fs::create_dir_all(&dir).ok()?;
    Some(dir)
}

/// Return the log file path under `$XDG_CACHE_HOME/rkit/` (or `~/.cache/rkit/`).
pub(super) fn log_file_path(command: &str) -> Option<PathBuf> {
    Some(rkit_cache_dir()?.join(format!("{command}.log")))
}

/// Format the current UTC time as `YYYY-MM-DD HH:MM:SS`.
pub(super) fn format_utc_datetime() -> String {
    chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format the current UTC time as `HH:MM:SS`.
pub(super) fn format_utc_time() -> String {
    chrono::Utc::now().format("%H:%M:%S").to_string()
}
