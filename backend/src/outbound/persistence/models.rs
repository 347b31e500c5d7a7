//! Internal Diesel row structs.
//!
//! These never leave the persistence layer; repositories convert them into
//! domain types before returning.

use chrono::{DateTime, Utc};
use diesel::prelude::*;

use super::schema::{candidates, voters};
use crate::domain::{Candidate, CandidateId, NewCandidate, NewVoter, PartyId, Voter, VoterId};

/// Row read from `candidates`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = candidates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct CandidateRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub industry_connected: bool,
    pub party_id: Option<i32>,
}

impl From<CandidateRow> for Candidate {
    fn from(row: CandidateRow) -> Self {
        Self {
            id: CandidateId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            industry_connected: row.industry_connected,
            party_id: row.party_id.map(PartyId::new),
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = candidates)]
pub(crate) struct NewCandidateRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub industry_connected: bool,
}

impl<'a> From<&'a NewCandidate> for NewCandidateRow<'a> {
    fn from(candidate: &'a NewCandidate) -> Self {
        Self {
            first_name: &candidate.first_name,
            last_name: &candidate.last_name,
            industry_connected: candidate.industry_connected,
        }
    }
}

/// Row read from `voters`.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = voters)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct VoterRow {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<VoterRow> for Voter {
    fn from(row: VoterRow) -> Self {
        Self {
            id: VoterId::new(row.id),
            first_name: row.first_name,
            last_name: row.last_name,
            email: row.email,
            created_at: row.created_at,
        }
    }
}

#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = voters)]
pub(crate) struct NewVoterRow<'a> {
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
}

impl<'a> From<&'a NewVoter> for NewVoterRow<'a> {
    fn from(voter: &'a NewVoter) -> Self {
        Self {
            first_name: &voter.first_name,
            last_name: &voter.last_name,
            email: &voter.email,
        }
    }
}
