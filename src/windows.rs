// windows.rs
use camino::Utf8Path;
use std::path::PathBuf;

/// Converts a collected path into the path handed to the OS when opening
///
/// On Windows, paths longer than MAX_PATH need the "\\?\" prefix, which
/// is only valid on absolute paths. Relative paths are returned unchanged.
#[cfg(windows)]
pub fn native_path(p: &Utf8Path) -> PathBuf {
    let s = p.as_str();

    if s.starts_with("\\\\?\\") || !p.is_absolute() {
        return p.as_std_path().to_path_buf();
    }

    let mut pref = String::from("\\\\?\\");
    pref.push_str(&s.replace('/', "\\"));
    PathBuf::from(pref)
}

/// No-op implementation for non-Windows platforms
#[cfg(not(windows))]
pub fn native_path(p: &Utf8Path) -> PathBuf {
    p.as_std_path().to_path_buf()
}
