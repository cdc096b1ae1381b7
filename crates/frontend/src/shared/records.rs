//! Records as returned by the backend: untyped JSON objects, read through column keys.

use serde::Serialize;
use serde_json::{Map, Number, Value};

use super::error::ListError;

/// One row of backend data
pub type Record = Map<String, Value>;

/// Source of field values for the list engine
pub trait Row {
    /// Raw value stored under `key`, without path resolution
    fn field(&self, key: &str) -> Option<&Value>;
}

impl Row for Record {
    fn field(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }
}

impl<R: Row + ?Sized> Row for &R {
    fn field(&self, key: &str) -> Option<&Value> {
        (**self).field(key)
    }
}

/// Reads a column value: the key verbatim first, then as a dotted path into nested objects
pub fn read_field<'a, R: Row + ?Sized>(row: &'a R, key: &str) -> Option<&'a Value> {
    if let Some(value) = row.field(key) {
        return Some(value);
    }

    let mut parts = key.split('.');
    let head = parts.next()?;
    let mut current = row.field(head)?;
    let mut has_tail = false;
    for part in parts {
        has_tail = true;
        current = current.as_object()?.get(part)?;
    }

    has_tail.then_some(current)
}

/// Text form of a value for searching and default rendering.
///
/// Missing and `null` values become the empty string.
pub fn stringify(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Bool(b)) => b.to_string(),
        Some(Value::Number(n)) => number_text(n),
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| stringify(Some(item)))
            .collect::<Vec<_>>()
            .join(","),
        Some(object @ Value::Object(_)) => object.to_string(),
    }
}

/// Integral floats print without a fractional part (`20.0` → `20`)
fn number_text(n: &Number) -> String {
    // 2^53: larger integral floats are not exact
    const MAX_EXACT: f64 = 9_007_199_254_740_992.0;

    match n.as_f64() {
        Some(f) if n.is_f64() && f.fract() == 0.0 && f.abs() <= MAX_EXACT => {
            format!("{}", f as i64)
        }
        _ => n.to_string(),
    }
}

/// Parses a backend response into records.
///
/// Accepts a bare array or an `{"items": [...]}` / `{"data": [...]}` envelope.
pub fn parse_records(json: &str) -> Result<Vec<Record>, ListError> {
    let value: Value = serde_json::from_str(json)?;
    records_from_value(value)
}

pub fn records_from_value(value: Value) -> Result<Vec<Record>, ListError> {
    let items = match value {
        Value::Array(items) => items,
        Value::Object(mut envelope) => match envelope
            .remove("items")
            .or_else(|| envelope.remove("data"))
        {
            Some(Value::Array(items)) => items,
            _ => return Err(ListError::MissingCollection),
        },
        _ => return Err(ListError::MissingCollection),
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| match item {
            Value::Object(record) => Ok(record),
            _ => Err(ListError::NotAnObject { index }),
        })
        .collect()
}

/// Converts typed DTOs into records
pub fn to_records<T: Serialize>(items: &[T]) -> Result<Vec<Record>, ListError> {
    items
        .iter()
        .enumerate()
        .map(|(index, item)| match serde_json::to_value(item)? {
            Value::Object(record) => Ok(record),
            _ => Err(ListError::NotAnObject { index }),
        })
        .collect()
}
