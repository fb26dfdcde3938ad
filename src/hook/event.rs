//! Lifecycle event handler (UserPromptSubmit, SessionStart, Stop, Notification).

use claude_code_cue::config::CueConfig;
use claude_code_cue::resolver::{self, SoundTarget};

pub fn run(config: &CueConfig, id: &str) -> Option<String> {
    let sound = resolver::resolve(config, SoundTarget::SimpleHook { id });
    if sound.is_none() {
        tracing::debug!(event = id, "No cue for event");
    }
    sound.map(String::from)
}
