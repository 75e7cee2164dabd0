//! Loosely-typed request fields.
//!
//! Clients send `name`, `age` and `originPlace` either as form strings or as
//! arbitrary JSON values. These helpers decide whether a value counts as
//! supplied and how to turn it into text.

use serde_json::Value;

/// Returns `true` when the field carries a usable value.
///
/// Absent, `null`, empty strings, zero and `false` count as missing.
pub fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Number(n)) => n.as_f64().is_some_and(|f| f != 0.0),
        Some(Value::Bool(b)) => *b,
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Text form of a field value (strings verbatim, anything else as JSON).
pub fn to_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
