//! Hook setup — installs this binary as Claude Code hook commands.
//!
//! Entries are merged into an existing `settings.json`: unrelated keys and
//! other tools' hook entries are preserved, previous cue entries replaced.

use anyhow::{bail, Context, Result};
use serde_json::{json, Map, Value};
use std::path::Path;

use crate::constants::APP_DIR_NAME;
use crate::registry::SimpleHook;

/// Event name → hook subcommand (without the binary path).
fn hook_commands() -> Vec<(&'static str, String)> {
    let mut commands: Vec<(&'static str, String)> = SimpleHook::ALL
        .into_iter()
        .map(|h| (h.event_name(), format!("hook event {}", h.config_key())))
        .collect();
    commands.push(("PreToolUse", "hook pre-tool-use".to_string()));
    commands.push(("PostToolUse", "hook post-tool-use".to_string()));
    commands
}

/// Install cue hooks into `settings_path` (usually `~/.claude/settings.json`).
///
/// - Creates the parent directory and file if absent.
/// - Refuses to touch a file that is not valid JSON.
/// - Returns the event names that were written.
pub fn install_cue_hooks(settings_path: &Path, bin_path: &str) -> Result<Vec<&'static str>> {
    if let Some(parent) = settings_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let settings: Value = if settings_path.exists() {
        let content = std::fs::read_to_string(settings_path)
            .with_context(|| format!("Failed to read {}", settings_path.display()))?;
        if content.trim().is_empty() {
            json!({})
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("{} is not valid JSON", settings_path.display()))?
        }
    } else {
        json!({})
    };

    let mut root = match settings {
        Value::Object(m) => m,
        _ => bail!("{} does not contain a JSON object", settings_path.display()),
    };
    let mut hooks = match root.remove("hooks") {
        Some(Value::Object(m)) => m,
        _ => Map::new(),
    };

    let mut installed = Vec::new();
    for (event, subcommand) in hook_commands() {
        let command = format!("{} {}", bin_path, subcommand);
        // Claude Code expects nested { matcher?, hooks: [...] } entries
        let mut entry = json!({
            "hooks": [{
                "type": "command",
                "command": command
            }]
        });
        if event.ends_with("ToolUse") {
            entry["matcher"] = json!("*");
        }

        let mut entries = match hooks.remove(event) {
            Some(Value::Array(a)) => a,
            _ => Vec::new(),
        };
        entries.retain(|e| !is_cue_entry(e));
        entries.push(entry);
        hooks.insert(event.to_string(), Value::Array(entries));
        installed.push(event);
    }
    root.insert("hooks".to_string(), Value::Object(hooks));

    let formatted = serde_json::to_string_pretty(&Value::Object(root))
        .context("Failed to serialize settings")?;
    std::fs::write(settings_path, formatted)
        .with_context(|| format!("Failed to write {}", settings_path.display()))?;

    tracing::info!(path = %settings_path.display(), events = installed.len(), "Cue hooks installed");
    Ok(installed)
}

/// An entry whose commands all point at this binary.
fn is_cue_entry(entry: &Value) -> bool {
    let Some(list) = entry.get("hooks").and_then(|h| h.as_array()) else {
        return false;
    };
    !list.is_empty()
        && list.iter().all(|h| {
            h.get("command")
                .and_then(|c| c.as_str())
                .is_some_and(|c| c.contains(APP_DIR_NAME) && c.contains(" hook "))
        })
}

/// Resolve the path to the `claude-code-cue` binary.
///
/// Priority:
/// 1. `which claude-code-cue` (works when installed in PATH)
/// 2. `std::env::current_exe()` (works during development)
pub fn resolve_bin_path() -> String {
    if let Ok(output) = std::process::Command::new("which")
        .arg(APP_DIR_NAME)
        .output()
    {
        if output.status.success() {
            let path = String::from_utf8_lossy(&output.stdout).trim().to_string();
            if !path.is_empty() {
                return path;
            }
        }
    }

    std::env::current_exe()
        .map(|p| p.to_string_lossy().to_string())
        .unwrap_or_else(|_| APP_DIR_NAME.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIN: &str = "/usr/local/bin/claude-code-cue";

    fn read(path: &Path) -> Value {
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap()
    }

    #[test]
    fn test_fresh_install_writes_six_events() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".claude").join("settings.json");
        let events = install_cue_hooks(&path, BIN).unwrap();
        assert_eq!(events.len(), 6);

        let settings = read(&path);
        let hooks = settings["hooks"].as_object().unwrap();
        for event in ["UserPromptSubmit", "SessionStart", "Stop", "Notification", "PreToolUse", "PostToolUse"] {
            assert_eq!(hooks[event].as_array().unwrap().len(), 1, "{}", event);
        }
        assert_eq!(
            hooks["SessionStart"][0]["hooks"][0]["command"],
            format!("{} hook event sessionStart", BIN)
        );
        assert_eq!(hooks["PostToolUse"][0]["matcher"], "*");
        assert!(hooks["Stop"][0].get("matcher").is_none());
    }

    #[test]
    fn test_merge_preserves_foreign_entries_and_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        let existing = json!({
            "model": "opus",
            "hooks": {
                "PostToolUse": [{"matcher": "Bash", "hooks": [{"type": "command", "command": "lint.sh"}]}]
            }
        });
        std::fs::write(&path, existing.to_string()).unwrap();

        install_cue_hooks(&path, BIN).unwrap();
        install_cue_hooks(&path, BIN).unwrap();

        let settings = read(&path);
        assert_eq!(settings["model"], "opus");
        let post = settings["hooks"]["PostToolUse"].as_array().unwrap();
        assert_eq!(post.len(), 2);
        assert_eq!(post[0]["hooks"][0]["command"], "lint.sh");
        assert_eq!(settings["hooks"]["Stop"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_settings_left_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ broken").unwrap();
        assert!(install_cue_hooks(&path, BIN).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{ broken");
    }

    #[test]
    fn test_is_cue_entry() {
        let ours = json!({"hooks": [{"command": format!("{} hook event stop", BIN)}]});
        let theirs = json!({"hooks": [{"command": "notify-send done"}]});
        assert!(is_cue_entry(&ours));
        assert!(!is_cue_entry(&theirs));
        assert!(!is_cue_entry(&json!({"hooks": []})));
    }
}
