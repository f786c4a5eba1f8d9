//! Extension bucket naming.
use std::ffi::OsString;
use std::path::Path;

/// Bucket name for files without an extension.
pub const NO_EXTENSION: &str = "no_extension";

/// Lowercased extension of `path` without the dot, or [`NO_EXTENSION`].
///
/// Only the last extension counts (`archive.tar.gz` is `gz`); dotfiles such
/// as `.gitignore` and names ending in a bare dot have none. Extensions that
/// are not valid UTF-8 are kept byte for byte.
#[must_use]
pub fn extension_of(path: &Path) -> OsString {
    match path.extension() {
        Some(ext) if ext.is_empty() => NO_EXTENSION.into(),
        Some(ext) => ext
            .to_str()
            .map_or_else(|| ext.to_os_string(), |text| text.to_lowercase().into()),
        None => NO_EXTENSION.into(),
    }
}
