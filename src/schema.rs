//! Field-by-field merge of loosely-typed JSON against typed defaults.
//!
//! A typed record is rebuilt from its `Default` plus one accessor call per
//! field. Each accessor keeps the caller's value only when its JSON type
//! matches, and otherwise returns the default it was handed, so a single
//! corrupt field never resets its siblings.

use serde_json::{Map, Value};

/// Read-only view over the object a record is normalized from.
/// A non-object input behaves like an empty object.
#[derive(Clone, Copy)]
pub struct Fields<'a> {
    obj: Option<&'a Map<String, Value>>,
    section: &'static str,
}

impl<'a> Fields<'a> {
    pub fn of(value: Option<&'a Value>, section: &'static str) -> Self {
        let obj = value.and_then(|v| v.as_object());
        if value.is_some_and(|v| !v.is_null()) && obj.is_none() {
            tracing::debug!(section, "Config section is not an object, using defaults");
        }
        Self { obj, section }
    }

    /// True when the caller supplied an actual object for this section.
    pub fn is_present(&self) -> bool {
        self.obj.is_some()
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.obj.and_then(|o| o.get(key))
    }

    /// Nested section, itself merged field-by-field.
    pub fn section(&self, key: &str, section: &'static str) -> Fields<'a> {
        Fields::of(self.get(key), section)
    }

    pub fn boolean(&self, key: &str, default: bool) -> bool {
        self.typed(key, Value::as_bool).unwrap_or(default)
    }

    pub fn number(&self, key: &str, default: f64) -> f64 {
        self.typed(key, Value::as_f64).unwrap_or(default)
    }

    pub fn unsigned(&self, key: &str, default: u64) -> u64 {
        self.typed(key, Value::as_u64).unwrap_or(default)
    }

    pub fn string(&self, key: &str, default: String) -> String {
        self.typed(key, |v| v.as_str().map(String::from))
            .unwrap_or(default)
    }

    /// String that may be explicitly `null`. Only a missing or wrongly typed
    /// value falls back; an explicit `null` is kept as `None`.
    pub fn nullable_string(&self, key: &str, default: Option<String>) -> Option<String> {
        match self.get(key) {
            Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            other => {
                if other.is_some() {
                    self.note_default(key);
                }
                default
            }
        }
    }

    /// Ordered list of strings. A non-array falls back; non-string elements
    /// inside an array are skipped.
    pub fn string_list(&self, key: &str, default: &[String]) -> Vec<String> {
        match self.get(key) {
            Some(Value::Array(items)) => items
                .iter()
                .filter_map(|v| v.as_str().map(String::from))
                .collect(),
            other => {
                if other.is_some() {
                    self.note_default(key);
                }
                default.to_vec()
            }
        }
    }

    /// Like [`Fields::string_list`] but absence is meaningful: `None` unless
    /// the caller supplied an array.
    pub fn optional_string_list(&self, key: &str) -> Option<Vec<String>> {
        match self.get(key) {
            Some(Value::Array(_)) => Some(self.string_list(key, &[])),
            _ => None,
        }
    }

    /// Iterate the caller's entries as-is (used for open-keyed maps).
    pub fn entries(&self) -> impl Iterator<Item = (&'a String, &'a Value)> {
        self.obj.into_iter().flat_map(|o| o.iter())
    }

    fn typed<T>(&self, key: &str, extract: impl Fn(&'a Value) -> Option<T>) -> Option<T> {
        let raw = self.get(key)?;
        let value = extract(raw);
        if value.is_none() {
            self.note_default(key);
        }
        value
    }

    fn note_default(&self, key: &str) {
        tracing::debug!(section = self.section, field = key, "Invalid config field, using default");
    }
}
