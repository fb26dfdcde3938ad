//! Canonical tool registry — the closed sets of tools, outcome states and
//! simple lifecycle hooks the rest of the crate is keyed on.
//!
//! Every tool supports a fixed subset of [`Outcome`]. The subset is static
//! data: the config resolver uses it to drop extraneous states and the sound
//! resolver uses it to answer "no sound" for states a tool never produces.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// OUTCOME
// ============================================================================

/// Classified result of a single tool execution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Success,
    Error,
    Start,
    NoResults,
    Completed,
    AllComplete,
}

impl Outcome {
    pub const ALL: [Outcome; 6] = [
        Outcome::Success,
        Outcome::Error,
        Outcome::Start,
        Outcome::NoResults,
        Outcome::Completed,
        Outcome::AllComplete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Start => "start",
            Self::NoResults => "no_results",
            Self::Completed => "completed",
            Self::AllComplete => "all_complete",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_str() == s)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// TOOLS
// ============================================================================

/// Claude Code tools that can carry per-outcome sounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ToolName {
    Read,
    Write,
    Edit,
    MultiEdit,
    NotebookEdit,
    Grep,
    Glob,
    #[serde(rename = "LS")]
    Ls,
    Bash,
    Task,
    WebFetch,
    WebSearch,
    TodoWrite,
    ExitPlanMode,
}

/// Behavioural grouping used by the tool-specific classification rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolFamily {
    /// Grep, Glob: may legitimately find nothing.
    Search,
    /// TodoWrite: reports item/list completion.
    TaskList,
    /// Bash, Task: report an exit code.
    Process,
    Plain,
}

use Outcome::*;

const PLAIN_STATES: &[Outcome] = &[Success, Error];
const SEARCH_STATES: &[Outcome] = &[Success, Error, NoResults];
const PROCESS_STATES: &[Outcome] = &[Start, Success, Error];
const TODO_STATES: &[Outcome] = &[Success, Completed, AllComplete];
const PLAN_STATES: &[Outcome] = &[Success];

impl ToolName {
    pub const ALL: [ToolName; 14] = [
        ToolName::Read,
        ToolName::Write,
        ToolName::Edit,
        ToolName::MultiEdit,
        ToolName::NotebookEdit,
        ToolName::Grep,
        ToolName::Glob,
        ToolName::Ls,
        ToolName::Bash,
        ToolName::Task,
        ToolName::WebFetch,
        ToolName::WebSearch,
        ToolName::TodoWrite,
        ToolName::ExitPlanMode,
    ];

    /// Name as Claude Code reports it in `tool_name`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Read => "Read",
            Self::Write => "Write",
            Self::Edit => "Edit",
            Self::MultiEdit => "MultiEdit",
            Self::NotebookEdit => "NotebookEdit",
            Self::Grep => "Grep",
            Self::Glob => "Glob",
            Self::Ls => "LS",
            Self::Bash => "Bash",
            Self::Task => "Task",
            Self::WebFetch => "WebFetch",
            Self::WebSearch => "WebSearch",
            Self::TodoWrite => "TodoWrite",
            Self::ExitPlanMode => "ExitPlanMode",
        }
    }

    /// Exact-match lookup. Unknown names (MCP tools, future tools) yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == name)
    }

    pub fn family(&self) -> ToolFamily {
        match self {
            Self::Grep | Self::Glob => ToolFamily::Search,
            Self::TodoWrite => ToolFamily::TaskList,
            Self::Bash | Self::Task => ToolFamily::Process,
            _ => ToolFamily::Plain,
        }
    }

    /// Outcome states this tool can be mapped for.
    pub fn supported_outcomes(&self) -> &'static [Outcome] {
        match self {
            Self::Grep => SEARCH_STATES,
            Self::Bash | Self::Task => PROCESS_STATES,
            Self::TodoWrite => TODO_STATES,
            Self::ExitPlanMode => PLAN_STATES,
            _ => PLAIN_STATES,
        }
    }

    pub fn supports(&self, outcome: Outcome) -> bool {
        self.supported_outcomes().contains(&outcome)
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// SIMPLE HOOKS
// ============================================================================

/// Lifecycle events bound to a single sound, independent of any tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimpleHook {
    UserPromptSubmit,
    SessionStart,
    Stop,
    Notification,
}

impl SimpleHook {
    pub const ALL: [SimpleHook; 4] = [
        SimpleHook::UserPromptSubmit,
        SimpleHook::SessionStart,
        SimpleHook::Stop,
        SimpleHook::Notification,
    ];

    /// Key used in the persisted `simpleHooks` object.
    pub fn config_key(&self) -> &'static str {
        match self {
            Self::UserPromptSubmit => "userPromptSubmit",
            Self::SessionStart => "sessionStart",
            Self::Stop => "stop",
            Self::Notification => "notification",
        }
    }

    /// Event name as it appears in Claude Code `settings.json`.
    pub fn event_name(&self) -> &'static str {
        match self {
            Self::UserPromptSubmit => "UserPromptSubmit",
            Self::SessionStart => "SessionStart",
            Self::Stop => "Stop",
            Self::Notification => "Notification",
        }
    }

    /// Accepts either the config key or the Claude Code event name.
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|h| h.config_key() == id || h.event_name() == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_names_roundtrip() {
        for tool in ToolName::ALL {
            assert_eq!(ToolName::parse(tool.as_str()), Some(tool));
        }
        assert_eq!(ToolName::parse("LS"), Some(ToolName::Ls));
        assert_eq!(ToolName::parse("ls"), None);
        assert_eq!(ToolName::parse("mcp__server__tool"), None);
    }

    #[test]
    fn test_supported_outcomes_per_tool() {
        assert!(ToolName::Grep.supports(Outcome::NoResults));
        assert!(!ToolName::Glob.supports(Outcome::NoResults));
        assert!(!ToolName::Read.supports(Outcome::NoResults));
        assert!(ToolName::Bash.supports(Outcome::Start));
        assert!(ToolName::TodoWrite.supports(Outcome::AllComplete));
        assert!(!ToolName::TodoWrite.supports(Outcome::Error));
        assert_eq!(ToolName::ExitPlanMode.supported_outcomes(), &[Outcome::Success]);
    }

    #[test]
    fn test_families() {
        assert_eq!(ToolName::Glob.family(), ToolFamily::Search);
        assert_eq!(ToolName::Task.family(), ToolFamily::Process);
        assert_eq!(ToolName::TodoWrite.family(), ToolFamily::TaskList);
        assert_eq!(ToolName::WebFetch.family(), ToolFamily::Plain);
    }

    #[test]
    fn test_outcome_serde_names() {
        assert_eq!(serde_json::to_string(&Outcome::NoResults).unwrap(), "\"no_results\"");
        assert_eq!(Outcome::parse("all_complete"), Some(Outcome::AllComplete));
        assert_eq!(Outcome::parse("bogus"), None);
    }

    #[test]
    fn test_simple_hook_accepts_both_spellings() {
        assert_eq!(SimpleHook::parse("sessionStart"), Some(SimpleHook::SessionStart));
        assert_eq!(SimpleHook::parse("SessionStart"), Some(SimpleHook::SessionStart));
        assert_eq!(SimpleHook::parse("PreCompact"), None);
    }
}
