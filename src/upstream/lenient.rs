//! Guarded accessors over untyped JSON records.
//!
//! Each accessor takes a list of candidate keys and uses the first one that
//! holds a usable value. Values of an unexpected type are treated as absent.

use serde_json::{Map, Value};

/// An empty record, used for list items that are not JSON objects.
pub(crate) static EMPTY_RECORD: std::sync::LazyLock<Map<String, Value>> =
    std::sync::LazyLock::new(Map::new);

/// Text value: strings as-is, numbers and booleans in their textual form.
pub fn text(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(number_text(n)),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    })
}

/// String value only; any other type is absent.
pub fn string(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .find_map(|key| record.get(*key)?.as_str().map(str::to_string))
}

/// A type code such as `"1"`, `1` or `1.0`, normalized to trimmed integer text.
pub fn code(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    text(record, keys)
        .map(|c| c.trim().to_string())
        .filter(|c| !c.is_empty())
}

/// Boolean flag: JSON booleans or the strings `"true"` / `"false"`.
pub fn flag(record: &Map<String, Value>, keys: &[&str]) -> Option<bool> {
    keys.iter().find_map(|key| match record.get(*key)? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim().to_ascii_lowercase().as_str() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    })
}

/// Array value; each item is viewed as a record, non-objects as empty records.
pub fn records<'a>(
    record: &'a Map<String, Value>,
    keys: &[&str],
) -> Option<Vec<&'a Map<String, Value>>> {
    keys.iter().find_map(|key| {
        record
            .get(*key)?
            .as_array()
            .map(|items| items.iter().map(as_record).collect())
    })
}

pub(crate) fn as_record(value: &Value) -> &Map<String, Value> {
    value.as_object().unwrap_or(&*EMPTY_RECORD)
}

/// Integral numbers render without a fractional part, so `1.0` reads as `1`.
fn number_text(n: &serde_json::Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() < 1e15 => format!("{}", f as i64),
        _ => n.to_string(),
    }
}
