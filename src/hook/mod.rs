pub mod event;
pub mod post_tool;
pub mod pre_tool;

use std::io::Read;

use claude_code_cue::config::CueConfig;
use claude_code_cue::constants::HOOK_GUARD_ENV;
use claude_code_cue::sounds::SoundLibrary;
use claude_code_cue::storage::{path_utils, ConfigStore};

/// Hook subcommands.
pub enum HookAction {
    PostToolUse,
    PreToolUse,
    Event { id: String },
}

impl HookAction {
    fn name(&self) -> &'static str {
        match self {
            Self::PostToolUse => "post_tool_use",
            Self::PreToolUse => "pre_tool_use",
            Self::Event { .. } => "event",
        }
    }
}

/// Run hook action. CRITICAL: Always exits 0, even on panic, and never
/// writes to stdout.
pub fn run(action: HookAction) -> ! {
    let result = std::panic::catch_unwind(|| {
        // Sounds spawned from a hook must not re-trigger hooks
        if std::env::var_os(HOOK_GUARD_ENV).is_some() {
            drain_stdin();
            return;
        }
        // SAFETY: single-threaded at this point
        #[allow(unused_unsafe)]
        unsafe {
            std::env::set_var(HOOK_GUARD_ENV, "1");
        }

        claude_code_cue::tracing_init::init_file_tracing();
        tracing::info!(action = action.name(), pid = std::process::id(), "Hook process started");

        let input = read_stdin();
        let config = ConfigStore::open_default().load();
        if config.global_settings.enable_debug_mode {
            tracing::info!(input = %input, "Hook input");
        }

        if let Some(sound) = cue_for(&config, &action, &input) {
            play(&config, &sound);
        }
    });

    if let Err(e) = result {
        eprintln!("[cue-hook] panic: {:?}", e);
    }

    // ALWAYS exit 0 — hooks must never break the Claude Code session
    std::process::exit(0);
}

/// Sound to play for one hook invocation; `None` when cues are disabled or
/// nothing is mapped.
pub fn cue_for(config: &CueConfig, action: &HookAction, input: &str) -> Option<String> {
    if !config.global_settings.enabled {
        tracing::debug!(action = action.name(), "Cues disabled, skipping");
        return None;
    }
    match action {
        HookAction::PostToolUse => post_tool::run(config, input),
        HookAction::PreToolUse => pre_tool::run(config, input),
        HookAction::Event { id } => event::run(config, id),
    }
}

/// Start playback without waiting: the hook must return to Claude Code
/// immediately.
fn play(config: &CueConfig, sound: &str) {
    let library = SoundLibrary::new(path_utils::sounds_dir(&config.global_settings.sounds_directory));
    match library.spawn(sound, config.global_settings.volume) {
        Ok(()) => tracing::info!(sound, "Cue started"),
        Err(e) => tracing::warn!(sound, error = %e, "Cue playback failed"),
    }
}

/// Read stdin fully.
fn read_stdin() -> String {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input).ok();
    input
}

fn drain_stdin() {
    let _ = read_stdin();
}

/// Parse hook stdin JSON; empty or invalid input is logged and ignored.
fn parse_input(input: &str) -> Option<serde_json::Value> {
    if input.trim().is_empty() {
        tracing::debug!("Hook stdin was empty");
        return None;
    }
    match serde_json::from_str(input) {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::info!(
                error = %e,
                input_preview = %input.chars().take(200).collect::<String>(),
                "Hook stdin is not valid JSON, skipping"
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_disabled_config_plays_nothing() {
        let mut config = CueConfig::default();
        let bash = json!({"tool_name": "Bash", "tool_response": "", "error": "boom"}).to_string();
        let event = HookAction::Event { id: "sessionStart".into() };
        assert_eq!(cue_for(&config, &HookAction::PostToolUse, &bash).as_deref(), Some("damage"));
        assert_eq!(cue_for(&config, &HookAction::PreToolUse, &bash).as_deref(), Some("item_small"));
        assert_eq!(cue_for(&config, &event, "").as_deref(), Some("session_start"));

        config.global_settings.enabled = false;
        assert_eq!(cue_for(&config, &HookAction::PostToolUse, &bash), None);
        assert_eq!(cue_for(&config, &HookAction::PreToolUse, &bash), None);
        assert_eq!(cue_for(&config, &event, ""), None);
    }

    #[test]
    fn test_parse_input_rejects_empty_and_invalid() {
        assert!(parse_input("").is_none());
        assert!(parse_input("  \n").is_none());
        assert!(parse_input("{oops").is_none());
        assert_eq!(parse_input(r#"{"a":1}"#), Some(json!({"a": 1})));
    }
}
