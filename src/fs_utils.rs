//! Cross-platform filesystem utilities
//!
//! - `atomic_rename`: atomic file replacement (Windows requires explicit delete)
//! - `get_config_base_dir`: platform-appropriate configuration directory

use std::io;
use std::path::{Path, PathBuf};

/// Cross-platform atomic rename that handles Windows file replacement.
///
/// On Unix, `fs::rename` atomically replaces the target if it exists.
/// On Windows, `fs::rename` fails if the target exists, so the target is
/// deleted first.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use tabsweep_engine::fs_utils::atomic_rename;
///
/// std::fs::write("config.tmp", "close_modified = true\n")?;
/// atomic_rename(Path::new("config.tmp"), Path::new("config.toml"))?;
/// # Ok::<(), std::io::Error>(())
/// ```
pub fn atomic_rename(src: &Path, dst: &Path) -> io::Result<()> {
    #[cfg(windows)]
    {
        if dst.exists() {
            std::fs::remove_file(dst)?;
        }
    }
    std::fs::rename(src, dst)
}

/// Get the platform-appropriate configuration directory for tabsweep.
///
/// - **Windows**: `%APPDATA%\tabsweep`
/// - **Unix**: `$XDG_CONFIG_HOME/tabsweep` or `~/.config/tabsweep`
/// - **Fallback**: System temp directory + `tabsweep`
pub fn get_config_base_dir() -> PathBuf {
    #[cfg(windows)]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return PathBuf::from(appdata).join("tabsweep");
        }
    }

    #[cfg(not(windows))]
    {
        if let Ok(xdg_config) = std::env::var("XDG_CONFIG_HOME") {
            if !xdg_config.is_empty() {
                return PathBuf::from(xdg_config).join("tabsweep");
            }
        }
    }

    if let Some(config) = dirs::config_dir() {
        return config.join("tabsweep");
    }

    std::env::temp_dir().join("tabsweep")
}
