//! Path helpers shared by the locality index and the CLI
//!
//! Host paths arrive as plain strings and may use either Windows (`\`) or
//! Unix (`/`) separators regardless of the platform this crate runs on, so
//! the helpers here work on `&str` instead of `std::path::Path`, which only
//! understands the native separator.

use std::path::{Path, PathBuf};

use crate::{Result, TabSweepError};

/// Extended-length prefix Windows adds to canonicalized paths
const VERBATIM_PREFIX: &str = r"\\?\";
const VERBATIM_UNC_PREFIX: &str = r"\\?\UNC\";

/// True for either path separator style.
pub fn is_separator(c: char) -> bool {
    c == '/' || c == '\\'
}

/// Strip the Windows `\\?\` prefix so `\\?\C:\src` and `C:\src` compare equal.
///
/// `\\?\UNC\server\share` becomes `\\server\share`.
pub fn strip_verbatim_prefix(path: &str) -> std::borrow::Cow<'_, str> {
    if let Some(stripped) = path.strip_prefix(VERBATIM_UNC_PREFIX) {
        return std::borrow::Cow::Owned(format!(r"\\{}", stripped));
    }
    match path.strip_prefix(VERBATIM_PREFIX) {
        Some(stripped) => std::borrow::Cow::Borrowed(stripped),
        None => std::borrow::Cow::Borrowed(path),
    }
}

/// Remove any trailing separators.
pub fn trim_trailing_separators(path: &str) -> &str {
    path.trim_end_matches(is_separator)
}

/// Final component of a path (the whole string when it has no separator).
pub fn file_name(path: &str) -> &str {
    let trimmed = trim_trailing_separators(path);
    match trimmed.rfind(is_separator) {
        Some(idx) => &trimmed[idx + 1..],
        None => trimmed,
    }
}

/// Parent directory of a path, or `None` when there is no non-empty parent.
///
/// ```
/// use tabsweep_engine::paths::parent_dir;
///
/// assert_eq!(parent_dir(r"c:\proj\app\app.csproj"), Some(r"c:\proj\app"));
/// assert_eq!(parent_dir("/work/crate/Cargo.toml"), Some("/work/crate"));
/// assert_eq!(parent_dir("Cargo.toml"), None);
/// ```
pub fn parent_dir(path: &str) -> Option<&str> {
    let trimmed = trim_trailing_separators(path);
    let idx = trimmed.rfind(is_separator)?;
    let parent = trim_trailing_separators(&trimmed[..idx]);
    if parent.is_empty() {
        None
    } else {
        Some(parent)
    }
}

/// Lexical guess whether a location names a project file rather than a
/// directory: the last component has an extension (`app.csproj`,
/// `Cargo.toml`). Dot-files such as `.vscode` count as directories.
pub fn looks_like_file(path: &str) -> bool {
    let name = file_name(path);
    match name.rfind('.') {
        Some(idx) => idx > 0 && idx + 1 < name.len(),
        None => false,
    }
}

/// Case-folded comparison key for a path.
pub fn normalize_key(path: &str) -> String {
    path.to_lowercase()
}

/// Turn a raw project location into the directory key the locality index
/// stores, or `None` when the location is unusable.
///
/// A location ending in a separator is always a directory. Otherwise a
/// location that looks like a project file contributes its parent.
pub fn project_base_dir(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw.contains('\0') {
        return None;
    }

    let stripped = strip_verbatim_prefix(raw);
    let explicit_dir = stripped.ends_with(is_separator);
    let location = trim_trailing_separators(&stripped);

    let dir = if !explicit_dir && looks_like_file(location) {
        parent_dir(location)?
    } else {
        location
    };

    if dir.is_empty() {
        None
    } else {
        Some(normalize_key(dir))
    }
}

/// Resolve a path string, treating relative paths as relative to CWD.
///
/// - Absolute paths are returned as-is
/// - Relative paths are joined with the current working directory
pub fn resolve_path_or_cwd(path: &Path) -> Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        let cwd = std::env::current_dir().map_err(|e| TabSweepError::FileNotFound {
            path: format!("current directory: {}", e),
        })?;
        Ok(cwd.join(path))
    }
}
