//! Where querybar keeps its files
//!
//! Everything lives in one directory: `$QUERYBAR_CONFIG_DIR` when set,
//! otherwise `querybar/` inside the platform config root (`$XDG_CONFIG_HOME`
//! or `~/.config` on Unix and macOS, `%APPDATA%` on Windows).

use std::io;
use std::path::PathBuf;

const DIR_NAME: &str = "querybar";
const OVERRIDE_VAR: &str = "QUERYBAR_CONFIG_DIR";

/// Root the querybar directory is placed under
fn platform_config_root() -> Option<PathBuf> {
    if cfg!(target_os = "windows") {
        std::env::var_os("APPDATA").map(PathBuf::from)
    } else {
        std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
    }
}

pub fn config_dir() -> Option<PathBuf> {
    match std::env::var_os(OVERRIDE_VAR) {
        Some(dir) if !dir.is_empty() => Some(PathBuf::from(dir)),
        _ => platform_config_root().map(|root| root.join(DIR_NAME)),
    }
}

/// Operator vocabulary and suggestion settings
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// Default suggestion list for the driver
pub fn suggestions_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("suggestions.yaml"))
}

pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

/// Create the log directory (and its parents) if missing
pub fn ensure_logs_dir() -> io::Result<PathBuf> {
    let logs = logs_dir().ok_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "no home or config directory to log into")
    })?;
    std::fs::create_dir_all(&logs)?;
    Ok(logs)
}
