//! # Value Coercion
//!
//! Request bodies are never rejected for having the wrong types. Each todo
//! field is decoded from a raw [`serde_json::Value`] with the rules below.
//!
//! | Value | text | deadline | flag |
//! |---|---|---|---|
//! | string | trimmed | trimmed | non-empty |
//! | number | decimal text | decimal text | non-zero |
//! | bool | `"true"` / `"false"` | `"true"` / `"false"` | itself |
//! | null | none | none | false |
//! | array / object | none | compact JSON text | non-empty |

use serde_json::Value;

/// Converts a scalar JSON value to trimmed text.
///
/// Returns `None` for `null`, arrays and objects. Callers decide what such a
/// value falls back to.
pub fn to_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Converts a JSON value to deadline text.
///
/// Only `null` yields `None`; arrays and objects are kept as compact JSON.
pub fn to_deadline(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.trim().to_string()),
        other => Some(other.to_string()),
    }
}

/// Converts any JSON value to a boolean by its truthiness.
pub fn to_flag(value: &Value) -> bool {
    match value {
        Value::Bool(b) => *b,
        Value::Null => false,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}
