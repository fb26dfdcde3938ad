//! Classification rules — trait + built-in rules, in priority order.

use super::response::{self, ALL_COMPLETE_PHRASES, EMPTY_RESULT_PHRASES, ITEM_COMPLETE_PHRASES};
use super::Evidence;
use crate::registry::{Outcome, ToolFamily};

/// One predicate → outcome step of the classification chain.
/// `None` passes to the next rule.
pub trait ClassificationRule: Send + Sync {
    fn name(&self) -> &str;
    fn evaluate(&self, evidence: &Evidence<'_>) -> Option<Outcome>;
}

/// Analysis switched off: trust the caller's success flag.
pub struct AnalysisDisabledRule;

impl ClassificationRule for AnalysisDisabledRule {
    fn name(&self) -> &str {
        "analysis_disabled"
    }
    fn evaluate(&self, evidence: &Evidence<'_>) -> Option<Outcome> {
        if evidence.settings.enabled {
            return None;
        }
        Some(if evidence.record.success {
            Outcome::Success
        } else {
            Outcome::Error
        })
    }
}

/// Explicit failure flag or error message.
pub struct ExplicitFailureRule;

impl ClassificationRule for ExplicitFailureRule {
    fn name(&self) -> &str {
        "explicit_failure"
    }
    fn evaluate(&self, evidence: &Evidence<'_>) -> Option<Outcome> {
        let record = evidence.record;
        (!record.success || record.has_error_message()).then_some(Outcome::Error)
    }
}

pub struct ErrorKeywordRule;

impl ClassificationRule for ErrorKeywordRule {
    fn name(&self) -> &str {
        "error_keyword"
    }
    fn evaluate(&self, evidence: &Evidence<'_>) -> Option<Outcome> {
        let keywords = evidence.settings.error_keywords_for(evidence.tool);
        let hit = response::contains_any(evidence.text(), keywords)?;
        tracing::debug!(keyword = %hit, "Error keyword matched");
        Some(Outcome::Error)
    }
}

pub struct SuccessIndicatorRule;

impl ClassificationRule for SuccessIndicatorRule {
    fn name(&self) -> &str {
        "success_indicator"
    }
    fn evaluate(&self, evidence: &Evidence<'_>) -> Option<Outcome> {
        let indicators = evidence.settings.success_indicators_for(evidence.tool);
        let hit = response::contains_any(evidence.text(), indicators)?;
        tracing::debug!(indicator = %hit, "Success indicator matched");
        Some(Outcome::Success)
    }
}

/// Search tools: empty-result phrase or structurally empty response.
pub struct EmptySearchRule;

impl ClassificationRule for EmptySearchRule {
    fn name(&self) -> &str {
        "empty_search"
    }
    fn evaluate(&self, evidence: &Evidence<'_>) -> Option<Outcome> {
        if evidence.family() != Some(ToolFamily::Search) {
            return None;
        }
        let empty = response::contains_any(evidence.text(), EMPTY_RESULT_PHRASES).is_some()
            || response::is_structurally_empty(&evidence.record.tool_response);
        empty.then_some(Outcome::NoResults)
    }
}

/// Task-list tools: whole list complete beats single item complete.
pub struct TodoProgressRule;

impl ClassificationRule for TodoProgressRule {
    fn name(&self) -> &str {
        "todo_progress"
    }
    fn evaluate(&self, evidence: &Evidence<'_>) -> Option<Outcome> {
        if evidence.family() != Some(ToolFamily::TaskList) {
            return None;
        }
        let text = evidence.text();
        if response::contains_any(text, ALL_COMPLETE_PHRASES).is_some() {
            Some(Outcome::AllComplete)
        } else if response::contains_any(text, ITEM_COMPLETE_PHRASES).is_some() {
            Some(Outcome::Completed)
        } else {
            None
        }
    }
}

/// Process tools: non-zero exit code.
pub struct ExitCodeRule;

impl ClassificationRule for ExitCodeRule {
    fn name(&self) -> &str {
        "exit_code"
    }
    fn evaluate(&self, evidence: &Evidence<'_>) -> Option<Outcome> {
        if evidence.family() != Some(ToolFamily::Process) {
            return None;
        }
        let code = response::exit_code(&evidence.record.tool_response)?;
        if code != 0.0 {
            tracing::debug!(exit_code = code, "Non-zero exit code");
            Some(Outcome::Error)
        } else {
            None
        }
    }
}
