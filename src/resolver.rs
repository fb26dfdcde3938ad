//! Sound resolver — answers "which sound, if any" for a simple hook or a
//! (tool, outcome) pair. Pure lookup over a normalized [`CueConfig`]; there
//! is no fallback between states or tools.

use crate::classifier::{self, ExecutionRecord};
use crate::config::CueConfig;
use crate::registry::{Outcome, SimpleHook, ToolName};

/// What a sound is being resolved for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundTarget<'a> {
    /// Lifecycle event, by config key (`sessionStart`) or event name (`SessionStart`).
    SimpleHook { id: &'a str },
    Tool { tool: &'a str, outcome: Outcome },
}

/// Sound id for `target`, or `None` for "play nothing".
///
/// `None` when the hook/tool is unknown, the tool never produces the
/// outcome, no sound is mapped, or the mapped id is empty.
pub fn resolve<'c>(config: &'c CueConfig, target: SoundTarget<'_>) -> Option<&'c str> {
    let sound = match target {
        SoundTarget::SimpleHook { id } => {
            let hook = SimpleHook::parse(id)?;
            config.simple_hooks.get(hook)
        }
        SoundTarget::Tool { tool, outcome } => {
            let tool = ToolName::parse(tool)?;
            if !tool.supports(outcome) {
                return None;
            }
            config.tool_sound_config.get(tool, outcome)
        }
    };
    sound.filter(|s| !s.is_empty())
}

/// Classify `record` with the config's analysis settings, then resolve the
/// sound for the resulting outcome.
pub fn resolve_for_record<'c>(
    config: &'c CueConfig,
    record: &ExecutionRecord,
) -> (Outcome, Option<&'c str>) {
    let outcome = classifier::classify(record, &config.result_analysis_config);
    let sound = resolve(
        config,
        SoundTarget::Tool {
            tool: &record.tool_name,
            outcome,
        },
    );
    tracing::debug!(tool = %record.tool_name, outcome = %outcome, sound = ?sound, "Resolved tool sound");
    (outcome, sound)
}
