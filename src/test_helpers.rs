//! Shared test utilities.
//!
//! Available only under `#[cfg(test)]`.

use serde_json::Value;

use crate::classifier::ExecutionRecord;

// ============================================================================
// RecordBuilder
// ============================================================================

pub struct RecordBuilder {
    record: ExecutionRecord,
}

impl RecordBuilder {
    /// Successful execution of `tool` with a `null` response.
    pub fn new(tool: &str) -> Self {
        Self {
            record: ExecutionRecord::new(tool, Value::Null, true),
        }
    }

    pub fn response(mut self, response: Value) -> Self {
        self.record.tool_response = response;
        self
    }

    pub fn input(mut self, input: Value) -> Self {
        self.record.tool_input = input;
        self
    }

    pub fn failed(mut self) -> Self {
        self.record.success = false;
        self
    }

    pub fn error_message(mut self, msg: &str) -> Self {
        self.record.error_message = Some(msg.to_string());
        self
    }

    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.record.execution_time_ms = ms;
        self
    }

    pub fn build(self) -> ExecutionRecord {
        self.record
    }
}
