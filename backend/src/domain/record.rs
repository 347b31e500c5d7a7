//! Typed reads from a validated [`Record`].
//!
//! Form bodies arrive as strings and JSON clients send flags as `0`/`1`, so
//! each accessor accepts the spellings callers actually use and rejects the
//! rest with a single `invalid_request` message.

use serde_json::Value;

use super::Error;
use super::validation::{FieldName, Record};

/// Read a required text column.
pub fn text_field(record: &Record, field: FieldName) -> Result<String, Error> {
    match record.get(field.as_str()) {
        Some(Value::String(text)) => Ok(text.clone()),
        _ => Err(Error::invalid_request(format!("{field} must be a string"))),
    }
}

/// Read a boolean column from `true`/`false`, `0`/`1` or their string forms.
pub fn flag_field(record: &Record, field: FieldName) -> Result<bool, Error> {
    let flag = match record.get(field.as_str()) {
        Some(Value::Bool(flag)) => Some(*flag),
        Some(Value::Number(number)) => match number.as_i64() {
            Some(0) => Some(false),
            Some(1) => Some(true),
            _ => None,
        },
        Some(Value::String(text)) => match text.trim() {
            "0" | "false" => Some(false),
            "1" | "true" => Some(true),
            _ => None,
        },
        _ => None,
    };
    flag.ok_or_else(|| Error::invalid_request(format!("{field} must be a boolean")))
}

/// Read an optional integer reference; `null`, absence or a blank string
/// clear it.
pub fn optional_id_field(record: &Record, field: FieldName) -> Result<Option<i32>, Error> {
    let invalid = || Error::invalid_request(format!("{field} must be an integer"));
    match record.get(field.as_str()) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_i64()
            .and_then(|raw| i32::try_from(raw).ok())
            .map(Some)
            .ok_or_else(invalid),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => text.trim().parse().map(Some).map_err(|_| invalid()),
        Some(_) => Err(invalid()),
    }
}
