//! Registered voters. Email is the only field that changes after creation.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Error;
use super::record::text_field;
use super::validation::{FieldName, Record, check_required, fields};

/// Fields a new voter must supply, in reporting order.
pub const REQUIRED_FIELDS: [FieldName; 3] = [fields::FIRST_NAME, fields::LAST_NAME, fields::EMAIL];

/// Storage-assigned voter identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoterId(i32);

impl VoterId {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    /// Interpret a path segment; anything that is not an `i32` matches no row.
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok().map(Self)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

impl fmt::Display for VoterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Stored voter row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Voter {
    pub id: VoterId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Validated insert payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVoter {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl NewVoter {
    pub fn from_record(record: &Record) -> Result<Self, Error> {
        check_required(record, &REQUIRED_FIELDS)?;
        Ok(Self {
            first_name: text_field(record, fields::FIRST_NAME)?,
            last_name: text_field(record, fields::LAST_NAME)?,
            email: text_field(record, fields::EMAIL)?,
        })
    }
}

/// Replacement email address, already shape-checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailUpdate(String);

impl EmailUpdate {
    pub fn from_record(record: &Record) -> Result<Self, Error> {
        check_required(record, &[fields::EMAIL])?;
        text_field(record, fields::EMAIL).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
