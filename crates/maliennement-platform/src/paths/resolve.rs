use std::path::PathBuf;

use maliennement_common::PlatformError;

pub(super) const APP_NAME: &str = "maliennement";

/// Platform configuration directory for the shell.
///
/// - macOS: `~/Library/Application Support/maliennement`
/// - Linux: `$XDG_CONFIG_HOME/maliennement` (defaults to `~/.config/maliennement`)
/// - Windows: `%APPDATA%\maliennement`
pub fn config_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::config_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine config directory".into()))?
        .join(APP_NAME))
}

/// Platform data directory for the shell.
///
/// - macOS: `~/Library/Application Support/maliennement`
/// - Linux: `$XDG_DATA_HOME/maliennement` (defaults to `~/.local/share/maliennement`)
/// - Windows: `%APPDATA%\maliennement`
pub fn data_dir() -> Result<PathBuf, PlatformError> {
    Ok(dirs::data_dir()
        .ok_or_else(|| PlatformError::PathError("could not determine data directory".into()))?
        .join(APP_NAME))
}

/// `data_dir()/saved_state.json`, the host save bundle.
pub fn saved_state_file() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("saved_state.json"))
}

/// `data_dir()/logs`.
pub fn log_dir() -> Result<PathBuf, PlatformError> {
    Ok(data_dir()?.join("logs"))
}

/// `log_dir()/crash-reports`.
pub fn crash_report_dir() -> Result<PathBuf, PlatformError> {
    Ok(log_dir()?.join("crash-reports"))
}
