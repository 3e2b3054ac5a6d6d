//! Required-field validation for submitted records
//!
//! Validation semantics:
//! - Every requested field must be present
//! - String fields must not be empty after trimming whitespace
//! - Everything else present counts as supplied, including `null`
//!
//! No type checking and no referential checks are performed; the store
//! reports those faults itself. Validation never mutates the record.

use serde_json::{Map, Value};

/// A submitted JSON object keyed by field name
pub type Record = Map<String, Value>;

/// Checks `record` for each of `required`.
///
/// Returns `None` when every field is supplied, otherwise one message per
/// missing field in the order the fields were requested.
pub fn input_check(record: &Record, required: &[&str]) -> Option<Vec<String>> {
    let errors: Vec<String> = required
        .iter()
        .filter(|field| is_missing(record.get(**field)))
        .map(|field| missing_message(field))
        .collect();

    if errors.is_empty() {
        None
    } else {
        Some(errors)
    }
}

/// Copies the named fields out of `record`, skipping absent ones.
pub fn take_fields(record: &Record, names: &[&str]) -> Vec<(String, Value)> {
    names
        .iter()
        .filter_map(|name| record.get(*name).map(|v| (name.to_string(), v.clone())))
        .collect()
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None => true,
        Some(Value::String(s)) => s.trim().is_empty(),
        Some(_) => false,
    }
}

fn missing_message(field: &str) -> String {
    format!("No {} specified.", field)
}
