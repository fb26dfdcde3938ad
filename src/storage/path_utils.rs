use std::ffi::OsString;
use std::path::PathBuf;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE, HOME_ENV_VAR, LOG_FILE, SOUNDS_DIR};

/// Retourne le repertoire de donnees cross-platform.
/// Linux: ~/.config/claude-code-cue/
/// macOS: ~/Library/Application Support/claude-code-cue/
/// Windows: %APPDATA%/claude-code-cue/
/// `CLAUDE_CODE_CUE_HOME` remplace le tout.
pub fn data_dir() -> PathBuf {
    data_dir_from(std::env::var_os(HOME_ENV_VAR))
}

fn data_dir_from(env_override: Option<OsString>) -> PathBuf {
    if let Some(dir) = env_override.filter(|d| !d.is_empty()) {
        return PathBuf::from(dir);
    }
    let base = dirs::config_dir().unwrap_or_else(|| {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
    });
    base.join(APP_DIR_NAME)
}

/// {data_dir}/config.json
pub fn config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE)
}

/// {data_dir}/cue.log
pub fn log_path() -> PathBuf {
    data_dir().join(LOG_FILE)
}

/// Sounds directory: `configured` (tilde-expanded) when non-empty, else {data_dir}/sounds.
pub fn sounds_dir(configured: &str) -> PathBuf {
    let configured = configured.trim();
    if configured.is_empty() {
        data_dir().join(SOUNDS_DIR)
    } else {
        PathBuf::from(expand_tilde(configured))
    }
}

/// User-level Claude Code settings: ~/.claude/settings.json
pub fn claude_settings_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".claude")
        .join("settings.json")
}

/// Expand ~ to home directory in paths.
pub fn expand_tilde(path: &str) -> String {
    if path.starts_with("~/") || path == "~" {
        if let Some(home) = dirs::home_dir() {
            return path.replacen('~', &home.to_string_lossy(), 1);
        }
    }
    path.to_string()
}
