//! PreToolUse handler — plays the tool's `start` cue.

use claude_code_cue::config::CueConfig;
use claude_code_cue::registry::Outcome;
use claude_code_cue::resolver::{self, SoundTarget};

pub fn run(config: &CueConfig, input: &str) -> Option<String> {
    let data = super::parse_input(input)?;
    let tool = data.get("tool_name").and_then(|v| v.as_str())?;
    let sound = resolver::resolve(config, SoundTarget::Tool { tool, outcome: Outcome::Start });
    tracing::debug!(tool, sound = ?sound, "PreToolUse resolved");
    sound.map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_only_process_tools_have_start_cues() {
        let config = CueConfig::default();
        let bash = json!({"tool_name": "Bash", "tool_input": {"command": "ls"}}).to_string();
        assert_eq!(run(&config, &bash).as_deref(), Some("item_small"));
        let task = json!({"tool_name": "Task"}).to_string();
        assert_eq!(run(&config, &task).as_deref(), Some("session_start"));
        let read = json!({"tool_name": "Read"}).to_string();
        assert_eq!(run(&config, &read), None);
    }
}
