//! Where yanta keeps its per-user files
//!
//! Preferences and logs share one directory:
//! - Unix/macOS: `$XDG_CONFIG_HOME/yanta/`, falling back to `~/.config/yanta/`
//! - Windows: `%APPDATA%\yanta\`

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "yanta";

/// File name prefix of the log; the appender adds a `.YYYY-MM-DD` suffix
pub const LOG_FILE_PREFIX: &str = "yanta.log";

/// The yanta directory for the current user, if one can be determined
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// Preferences file holding word wrap and the custom stylesheet path
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.json"))
}

/// Directory receiving the rolling debug log
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn create_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the yanta directory if needed and return it
pub fn ensure_config_dir() -> Result<PathBuf, String> {
    let dir = config_dir().ok_or_else(|| "No config directory available".to_string())?;
    create_dir(&dir)?;
    Ok(dir)
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let logs = ensure_config_dir()?.join("logs");
    create_dir(&logs)?;
    Ok(logs)
}
