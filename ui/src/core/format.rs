//! Formatting helpers for presenting raw profile payloads.

use serde_json::Value;

use crate::t;

/// `programName` -> `Program name`, `total_events` -> `Total events`.
pub fn humanize_key(key: &str) -> String {
    let mut words: Vec<String> = Vec::new();
    let mut current = String::new();
    for ch in key.chars() {
        if ch == '_' || ch == '-' || ch == ' ' {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
        } else if ch.is_uppercase() && !current.is_empty() {
            words.push(std::mem::take(&mut current));
            current.extend(ch.to_lowercase());
        } else {
            current.extend(ch.to_lowercase());
        }
    }
    if !current.is_empty() {
        words.push(current);
    }

    let mut label = words.join(" ");
    if let Some(first) = label.get(0..1) {
        let upper = first.to_uppercase();
        label.replace_range(0..1, &upper);
    }
    label
}

/// Renders a scalar JSON value; arrays and objects yield `None`.
pub fn format_scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Bool(true) => Some(t!("value-yes")),
        Value::Bool(false) => Some(t!("value-no")),
        Value::Number(number) => Some(match number.as_f64() {
            Some(float) if number.is_f64() => format!("{float:.3}"),
            _ => number.to_string(),
        }),
        Value::Null => Some(t!("value-missing")),
        Value::Array(_) | Value::Object(_) => None,
    }
}

/// Top-level scalar fields of an object payload, sorted by key.
pub fn scalar_fields(payload: &Value) -> Vec<(String, String)> {
    let Some(object) = payload.as_object() else {
        return Vec::new();
    };
    let mut fields: Vec<(String, String)> = object
        .iter()
        .filter_map(|(key, value)| format_scalar(value).map(|text| (key.clone(), text)))
        .collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));
    fields
        .into_iter()
        .map(|(key, text)| (humanize_key(&key), text))
        .collect()
}

pub fn format_size(bytes: usize) -> String {
    const KIB: f64 = 1024.0;
    let bytes_f = bytes as f64;
    if bytes_f < KIB {
        format!("{bytes} B")
    } else if bytes_f < KIB * KIB {
        format!("{:.1} KiB", bytes_f / KIB)
    } else {
        format!("{:.1} MiB", bytes_f / (KIB * KIB))
    }
}
