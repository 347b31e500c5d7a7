//! Validation gate for write payloads.
//!
//! Every write route names the fields it requires, in order. The gate walks
//! that list and reports one message per failing field so callers see every
//! problem in a single response. It never touches storage.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};

use super::Error;

/// Submitted request body keyed by column name.
pub type Record = Map<String, Value>;

/// Name of a field the gate may check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldName(&'static str);

impl FieldName {
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    pub const fn as_str(self) -> &'static str {
        self.0
    }

    fn is_email(self) -> bool {
        self.0 == fields::EMAIL.0
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Field names shared by candidates and voters.
pub mod fields {
    use super::FieldName;

    pub const FIRST_NAME: FieldName = FieldName::new("first_name");
    pub const LAST_NAME: FieldName = FieldName::new("last_name");
    pub const EMAIL: FieldName = FieldName::new("email");
}

/// Ordered, non-empty list of validation messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldErrors(Vec<String>);

impl FieldErrors {
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    pub fn into_messages(self) -> Vec<String> {
        self.0
    }
}

impl From<FieldErrors> for Error {
    fn from(errors: FieldErrors) -> Self {
        Error::validation(errors.into_messages())
    }
}

/// Check `record` against `required`, reporting every failure in order.
///
/// A field fails when it is absent, `null`, or a string that is empty after
/// trimming. A present `email` must additionally look like an address.
///
/// # Examples
/// ```
/// use election_backend::domain::validation::{check_required, fields, Record};
///
/// let errors = check_required(&Record::new(), &[fields::FIRST_NAME, fields::EMAIL])
///     .unwrap_err();
/// assert_eq!(
///     errors.messages(),
///     ["first_name is required", "email is required"]
/// );
/// ```
pub fn check_required(record: &Record, required: &[FieldName]) -> Result<(), FieldErrors> {
    let messages: Vec<String> = required
        .iter()
        .filter_map(|field| field_message(record, *field))
        .collect();
    if messages.is_empty() {
        Ok(())
    } else {
        Err(FieldErrors(messages))
    }
}

fn field_message(record: &Record, field: FieldName) -> Option<String> {
    let value = record.get(field.as_str());
    if is_missing(value) {
        return Some(format!("{field} is required"));
    }
    if field.is_email() && !value.and_then(Value::as_str).is_some_and(is_valid_email) {
        return Some(format!("{field} must be a valid email address"));
    }
    None
}

fn is_missing(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => true,
        Some(Value::String(text)) => text.trim().is_empty(),
        Some(_) => false,
    }
}

fn email_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").ok())
        .as_ref()
}

/// Whether `candidate` has the conventional `local@domain.tld` shape.
pub fn is_valid_email(candidate: &str) -> bool {
    email_pattern().is_some_and(|pattern| pattern.is_match(candidate))
}
