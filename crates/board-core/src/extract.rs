//! Field Value Extractors
//!
//! Host field values come in heterogeneous shapes: bare scalars,
//! labeled-option objects, lists of either, user references. Each concern
//! is an ordered chain of small typed extractors tried first-match; an
//! unrecognized shape yields `None`/empty, never an error.

use serde_json::{Map, Value};

/// Stringify a scalar JSON value. Objects, arrays and null yield `None`.
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `.label` of a labeled-option object
fn label_text(value: &Value) -> Option<String> {
    value.as_object()?.get("label").and_then(scalar_text)
}

/// Display text of a field value: labeled-option label, else scalar.
///
/// Used for both title and detail resolution; the caller decides the
/// fallback (record label vs empty string).
pub fn extract_text(value: &Value) -> Option<String> {
    const CHAIN: [fn(&Value) -> Option<String>; 2] = [label_text, scalar_text];
    CHAIN.iter().find_map(|f| f(value))
}

/// Key carried by a select-option object (`key`, `id` or `value`,
/// whichever is present first)
fn object_key(obj: &Map<String, Value>) -> Option<String> {
    ["key", "id", "value"]
        .iter()
        .find_map(|k| obj.get(*k).and_then(scalar_text))
}

/// Normalize a stored tag value into a list of option keys.
///
/// Recognized shapes, in order: list of option objects (multi-select),
/// single option object, list of scalars, bare scalar. Anything else is an
/// empty list.
pub fn extract_tag_keys(value: &Value) -> Vec<String> {
    match value {
        Value::Array(items) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(obj) => object_key(obj),
                other => scalar_text(other).filter(|s| !s.is_empty()),
            })
            .collect(),
        Value::Object(obj) => object_key(obj).into_iter().collect(),
        other => scalar_text(other)
            .filter(|s| !s.is_empty())
            .into_iter()
            .collect(),
    }
}

/// Keys a category value contributes for column matching.
///
/// Multi-valued category fields contribute one key per entry; option
/// objects contribute their stored key. Shapes with no usable key match
/// no column, which drops the record from the board.
pub fn category_keys(value: Option<&Value>) -> Vec<String> {
    let Some(value) = value else {
        return Vec::new();
    };
    match value {
        Value::Object(obj) => object_key(obj).into_iter().collect(),
        Value::Array(_) => extract_tag_keys(value),
        other => scalar_text(other)
            .filter(|s| !s.is_empty())
            .into_iter()
            .collect(),
    }
}

/// Loose string-normalized equality between a stored value and an option
/// key, so a numeric `1` matches the option key `"1"`.
pub fn loose_eq(a: &str, b: &str) -> bool {
    a.trim() == b.trim()
}
