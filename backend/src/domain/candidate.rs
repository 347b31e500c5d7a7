//! Candidates standing in the election.
//!
//! Identifiers are assigned by storage. The only mutation after creation is
//! reassigning the party reference.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::Error;
use super::record::{flag_field, optional_id_field, text_field};
use super::validation::{FieldName, Record, check_required, fields};

/// Column holding the industry-connection flag.
pub const INDUSTRY_CONNECTED: FieldName = FieldName::new("industry_connected");
/// Column holding the optional party reference.
pub const PARTY_ID: FieldName = FieldName::new("party_id");

/// Fields a new candidate must supply, in reporting order.
pub const REQUIRED_FIELDS: [FieldName; 3] =
    [fields::FIRST_NAME, fields::LAST_NAME, INDUSTRY_CONNECTED];

/// Storage-assigned candidate identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CandidateId(i32);

impl CandidateId {
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

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a party row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PartyId(i32);

impl PartyId {
    pub const fn new(raw: i32) -> Self {
        Self(raw)
    }

    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Stored candidate row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    pub industry_connected: bool,
    pub party_id: Option<PartyId>,
}

/// Candidate joined with the name of its party, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateWithParty {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub party_name: Option<String>,
}

/// Validated insert payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    pub industry_connected: bool,
}

impl NewCandidate {
    /// Run the validation gate, then coerce the submitted values.
    ///
    /// # Examples
    /// ```
    /// use election_backend::domain::NewCandidate;
    /// use serde_json::json;
    ///
    /// let body = json!({"first_name": "Jane", "last_name": "Doe", "industry_connected": 1});
    /// let candidate = NewCandidate::from_record(body.as_object().unwrap()).unwrap();
    /// assert!(candidate.industry_connected);
    /// ```
    pub fn from_record(record: &Record) -> Result<Self, Error> {
        check_required(record, &REQUIRED_FIELDS)?;
        Ok(Self {
            first_name: text_field(record, fields::FIRST_NAME)?,
            last_name: text_field(record, fields::LAST_NAME)?,
            industry_connected: flag_field(record, INDUSTRY_CONNECTED)?,
        })
    }
}

/// New party reference for an existing candidate. `None` clears it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PartyAssignment(pub Option<PartyId>);

impl PartyAssignment {
    pub fn from_record(record: &Record) -> Result<Self, Error> {
        Ok(Self(optional_id_field(record, PARTY_ID)?.map(PartyId::new)))
    }
}
