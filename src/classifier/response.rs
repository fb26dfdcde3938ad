//! Response inspection helpers: text extraction and structural checks over
//! the untyped `tool_response` payload.

use serde_json::Value;

/// Conventional text-bearing fields, searched in order.
const TEXT_FIELDS: &[&str] = &["message", "output", "result", "content", "data", "text"];

/// Exit-code field spellings, examined in order.
const EXIT_CODE_FIELDS: &[&str] = &["exitCode", "exit_code", "code"];

pub const EMPTY_RESULT_PHRASES: &[&str] = &[
    "no matches found",
    "no results",
    "not found",
    "0 matches",
    "empty result",
    "no files found",
];

pub const ALL_COMPLETE_PHRASES: &[&str] = &[
    "all tasks completed",
    "all todos completed",
    "all items completed",
    "100% complete",
    "everything done",
];

pub const ITEM_COMPLETE_PHRASES: &[&str] = &[
    "task completed",
    "todo completed",
    "item completed",
    "marked as completed",
    "status: completed",
];

/// Lowercase text representation of a response.
///
/// - string: the string itself
/// - object or array: the first non-empty string among [`TEXT_FIELDS`],
///   else the whole value serialized as JSON
/// - anything else: its JSON literal (`null`, `42`, `true`)
pub fn extract_text(response: &Value) -> String {
    match response {
        Value::String(s) => s.to_lowercase(),
        Value::Object(obj) => TEXT_FIELDS
            .iter()
            .find_map(|field| obj.get(*field).and_then(|v| v.as_str()).filter(|s| !s.is_empty()))
            .map(str::to_lowercase)
            .unwrap_or_else(|| response.to_string().to_lowercase()),
        other => other.to_string().to_lowercase(),
    }
}

/// Case-insensitive substring match against any non-empty keyword.
pub fn contains_any<S: AsRef<str>>(text: &str, keywords: &[S]) -> Option<String> {
    keywords
        .iter()
        .map(|k| AsRef::<str>::as_ref(k))
        .filter(|k| !k.is_empty())
        .map(str::to_lowercase)
        .find(|k| text.contains(k.as_str()))
}

/// True when a search response is structurally empty: an empty `results` or
/// `matches` array, or a numeric `count` of zero.
pub fn is_structurally_empty(response: &Value) -> bool {
    let Some(obj) = response.as_object() else {
        return false;
    };
    let empty_array = |key: &str| {
        obj.get(key)
            .and_then(|v| v.as_array())
            .is_some_and(|a| a.is_empty())
    };
    let zero_count = obj
        .get("count")
        .and_then(|v| v.as_f64())
        .is_some_and(|c| c == 0.0);
    empty_array("results") || empty_array("matches") || zero_count
}

/// Exit code reported by a process-style response.
///
/// The first field among [`EXIT_CODE_FIELDS`] holding a truthy value
/// decides; `0`, `false`, `""` and `null` are skipped. Returns `None` when
/// no field qualifies or the deciding value is not a number.
pub fn exit_code(response: &Value) -> Option<f64> {
    let obj = response.as_object()?;
    let deciding = EXIT_CODE_FIELDS
        .iter()
        .filter_map(|field| obj.get(*field))
        .find(|v| is_truthy(v))?;
    deciding.as_f64()
}

fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
