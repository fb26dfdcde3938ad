//! Outcome classifier — maps one tool execution onto the outcome enum.
//!
//! Evaluation is an ordered rule table, first match wins:
//!   1. analysis disabled → caller's flag
//!   2. explicit failure flag / error message → error
//!   3. error keyword in response text → error
//!   4. success indicator in response text → success
//!   5. tool-specific rules (search / task list / process)
//!   6. default → success
//!
//! Pure: no I/O, no state carried between calls.

pub mod response;
pub mod rules;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::OnceLock;

use crate::config::ClassificationSettings;
use crate::registry::{Outcome, ToolFamily, ToolName};
use rules::*;

/// Snapshot of one tool invocation. Created per invocation, consumed once.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionRecord {
    /// Not required to be a registry tool.
    pub tool_name: String,
    #[serde(default)]
    pub tool_input: Value,
    /// String, object, or `null` when absent.
    #[serde(default)]
    pub tool_response: Value,
    #[serde(default)]
    pub execution_time_ms: u64,
    #[serde(default = "default_true")]
    pub success: bool,
    #[serde(default)]
    pub error_message: Option<String>,
}

fn default_true() -> bool {
    true
}

impl ExecutionRecord {
    pub fn new(tool_name: &str, tool_response: Value, success: bool) -> Self {
        Self {
            tool_name: tool_name.to_string(),
            tool_input: Value::Null,
            tool_response,
            execution_time_ms: 0,
            success,
            error_message: None,
        }
    }

    pub fn has_error_message(&self) -> bool {
        self.error_message.as_deref().is_some_and(|m| !m.is_empty())
    }
}

/// What every rule sees: the record, the settings, and the response text
/// extracted once up front.
pub struct Evidence<'a> {
    pub record: &'a ExecutionRecord,
    pub settings: &'a ClassificationSettings,
    pub tool: Option<ToolName>,
    text: String,
}

impl<'a> Evidence<'a> {
    pub fn new(record: &'a ExecutionRecord, settings: &'a ClassificationSettings) -> Self {
        Self {
            record,
            settings,
            tool: ToolName::parse(&record.tool_name),
            text: response::extract_text(&record.tool_response),
        }
    }

    /// Lowercased response text.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn family(&self) -> Option<ToolFamily> {
        self.tool.map(|t| t.family())
    }
}

pub struct OutcomeClassifier {
    rules: Vec<Box<dyn ClassificationRule>>,
}

impl OutcomeClassifier {
    /// Empty chain: every record classifies as success.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The full priority chain.
    pub fn standard() -> Self {
        let mut classifier = Self::new();
        classifier.add_rule(Box::new(AnalysisDisabledRule));
        classifier.add_rule(Box::new(ExplicitFailureRule));
        classifier.add_rule(Box::new(ErrorKeywordRule));
        classifier.add_rule(Box::new(SuccessIndicatorRule));
        classifier.add_rule(Box::new(EmptySearchRule));
        classifier.add_rule(Box::new(TodoProgressRule));
        classifier.add_rule(Box::new(ExitCodeRule));
        classifier
    }

    pub fn add_rule(&mut self, rule: Box<dyn ClassificationRule>) {
        self.rules.push(rule);
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    pub fn classify(&self, record: &ExecutionRecord, settings: &ClassificationSettings) -> Outcome {
        let evidence = Evidence::new(record, settings);
        for rule in &self.rules {
            if let Some(outcome) = rule.evaluate(&evidence) {
                tracing::debug!(tool = %record.tool_name, rule = rule.name(), outcome = %outcome, "Classified");
                return outcome;
            }
        }
        tracing::debug!(tool = %record.tool_name, outcome = "success", "Classified by default");
        Outcome::Success
    }
}

impl Default for OutcomeClassifier {
    fn default() -> Self {
        Self::standard()
    }
}

/// Classify with the standard rule chain.
pub fn classify(record: &ExecutionRecord, settings: &ClassificationSettings) -> Outcome {
    static STANDARD: OnceLock<OutcomeClassifier> = OnceLock::new();
    STANDARD
        .get_or_init(OutcomeClassifier::standard)
        .classify(record, settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::RecordBuilder;
    use serde_json::json;

    fn settings() -> ClassificationSettings {
        ClassificationSettings::default()
    }

    #[test]
    fn test_failure_flag_dominates_success_keyword() {
        let record = RecordBuilder::new("Write").response(json!("File created successfully")).failed().build();
        assert_eq!(classify(&record, &settings()), Outcome::Error);
    }

    #[test]
    fn test_error_keyword_case_insensitive() {
        let mut s = settings();
        s.error_keywords = vec!["permission denied".to_string()];
        let record = RecordBuilder::new("Read").response(json!("Permission Denied")).build();
        assert_eq!(classify(&record, &s), Outcome::Error);
    }

    #[test]
    fn test_error_keyword_beats_success_indicator() {
        let record = RecordBuilder::new("Edit").response(json!("Update failed")).build();
        assert_eq!(classify(&record, &settings()), Outcome::Error);
    }

    #[test]
    fn test_search_with_empty_results_is_no_results() {
        let record = RecordBuilder::new("Grep").response(json!({"results": []})).build();
        assert_eq!(classify(&record, &settings()), Outcome::NoResults);
        let count = RecordBuilder::new("Glob").response(json!({"count": 0})).build();
        assert_eq!(classify(&record, &settings()), classify(&count, &settings()));
    }

    #[test]
    fn test_bash_nonzero_exit_overrides_success_flag() {
        let record = RecordBuilder::new("Bash").response(json!({"exitCode": 1})).build();
        assert!(record.success);
        assert_eq!(classify(&record, &settings()), Outcome::Error);
    }

    #[test]
    fn test_todo_all_complete_with_default_settings() {
        let record = RecordBuilder::new("TodoWrite").response(json!("All tasks completed")).build();
        assert_eq!(classify(&record, &settings()), Outcome::AllComplete);
        let one = RecordBuilder::new("TodoWrite").response(json!("Todo completed: write docs")).build();
        assert_eq!(classify(&one, &settings()), Outcome::Completed);
    }

    #[test]
    fn test_success_indicator_masks_tool_rules_without_override() {
        let mut s = settings();
        s.tool_overrides.clear();
        let record = RecordBuilder::new("TodoWrite").response(json!("All tasks completed")).build();
        assert_eq!(classify(&record, &s), Outcome::Success);
    }

    #[test]
    fn test_disabled_analysis_trusts_flag() {
        let mut s = settings();
        s.enabled = false;
        let record = RecordBuilder::new("Bash").response(json!({"exitCode": 1})).build();
        assert_eq!(classify(&record, &s), Outcome::Success);
        let failed = RecordBuilder::new("Bash").failed().build();
        assert_eq!(classify(&failed, &s), Outcome::Error);
    }

    #[test]
    fn test_unknown_tool_and_odd_responses_default_to_success() {
        for resp in [Value::Null, json!(7), json!([]), json!({}), json!({"nested": {"x": 1}})] {
            let record = RecordBuilder::new("mcp__weather__forecast").response(resp.clone()).build();
            assert_eq!(classify(&record, &settings()), Outcome::Success, "response {}", resp);
        }
    }

    #[test]
    fn test_deterministic() {
        let record = RecordBuilder::new("Grep").response(json!("No matches found")).build();
        let s = settings();
        let first = classify(&record, &s);
        for _ in 0..10 {
            assert_eq!(classify(&record, &s), first);
        }
    }

    #[test]
    fn test_rule_order() {
        let names = OutcomeClassifier::standard().rule_names().join(",");
        assert_eq!(
            names,
            "analysis_disabled,explicit_failure,error_keyword,success_indicator,empty_search,todo_progress,exit_code"
        );
        let empty = OutcomeClassifier::new();
        let failed = RecordBuilder::new("Read").failed().build();
        assert_eq!(empty.classify(&failed, &settings()), Outcome::Success);
    }

    #[test]
    fn test_record_deserializes_with_defaults() {
        let record: ExecutionRecord =
            serde_json::from_str(r#"{"toolName":"Bash","toolResponse":{"exitCode":3}}"#).unwrap();
        assert!(record.success);
        assert_eq!(record.execution_time_ms, 0);
        assert_eq!(classify(&record, &settings()), Outcome::Error);
    }
}
