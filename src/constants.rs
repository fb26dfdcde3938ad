// === Storage ===
pub const APP_DIR_NAME: &str = "claude-code-cue";
pub const HOME_ENV_VAR: &str = "CLAUDE_CODE_CUE_HOME";
pub const CONFIG_FILE: &str = "config.json";
pub const LOG_FILE: &str = "cue.log";
pub const SOUNDS_DIR: &str = "sounds";

// === Config ===
pub const CONFIG_VERSION: &str = "1.0.0";
pub const DEFAULT_VOLUME: f64 = 0.8;
pub const DEFAULT_ANALYSIS_TIMEOUT_MS: u64 = 5_000;
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 0.8;

// === Sounds ===
pub const SUPPORTED_SOUND_EXTENSIONS: &[&str] = &["mp3", "wav", "aac", "ogg", "m4a"];

// === Hook ===
/// Set while a hook runs so a sound played by a hook never re-enters one.
pub const HOOK_GUARD_ENV: &str = "CLAUDE_CODE_CUE_HOOK_RUNNING";
