//! PostToolUse handler — classify the finished tool call and pick its cue.

use serde_json::Value;

use claude_code_cue::classifier::ExecutionRecord;
use claude_code_cue::config::CueConfig;
use claude_code_cue::resolver;

/// Returns the sound to play, if any.
pub fn run(config: &CueConfig, input: &str) -> Option<String> {
    let data = super::parse_input(input)?;
    let record = record_from_hook_input(&data)?;
    let (outcome, sound) = resolver::resolve_for_record(config, &record);
    tracing::info!(
        tool = %record.tool_name,
        outcome = %outcome,
        sound = ?sound,
        "PostToolUse classified"
    );
    sound.map(String::from)
}

/// Build an execution record from the Claude Code PostToolUse payload
/// (`tool_name`, `tool_input`, `tool_response`, optional `error`).
///
/// The call failed when the payload carries an `error` field or the
/// response reports `is_error: true`.
pub fn record_from_hook_input(data: &Value) -> Option<ExecutionRecord> {
    let tool_name = data
        .get("tool_name")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())?;
    let tool_response = data.get("tool_response").cloned().unwrap_or(Value::Null);

    let error = data.get("error").filter(|e| !e.is_null());
    let is_error = tool_response
        .get("is_error")
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    let mut record = ExecutionRecord::new(tool_name, tool_response, error.is_none() && !is_error);
    record.tool_input = data.get("tool_input").cloned().unwrap_or(Value::Null);
    record.execution_time_ms = data.get("duration_ms").and_then(|v| v.as_u64()).unwrap_or(0);
    record.error_message = error.map(|e| match e.as_str() {
        Some(s) => s.to_string(),
        None => e.to_string(),
    });
    Some(record)
}
