//! In-memory repository doubles shared by unit and integration tests.
//!
//! Compiled for `cfg(test)` and behind the `test-support` feature. Each
//! double mirrors the PostgreSQL adapter's observable behaviour: generated
//! ids, ordering, affected-row counts, and the foreign-key failure raised
//! for unknown parties. [`InMemoryCandidateRepository::fail_with`] makes
//! every call return the given error.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::ports::{CandidateRepository, StorageError, VoterRepository};
use crate::domain::{
    Candidate, CandidateId, CandidateWithParty, NewCandidate, NewVoter, PartyId, Voter, VoterId,
};

const PARTY_FK_VIOLATION: &str =
    "insert or update on table \"candidates\" violates foreign key constraint \"fk_party\"";

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn affected(hit: bool) -> usize {
    usize::from(hit)
}

#[derive(Debug, Default)]
struct CandidateTable {
    rows: Vec<Candidate>,
    parties: Vec<(PartyId, String)>,
    last_id: i32,
    failure: Option<StorageError>,
}

impl CandidateTable {
    fn check(&self) -> Result<(), StorageError> {
        self.failure.clone().map_or(Ok(()), Err)
    }

    fn party_name(&self, party: Option<PartyId>) -> Option<String> {
        let party = party?;
        self.parties
            .iter()
            .find(|(id, _)| *id == party)
            .map(|(_, name)| name.clone())
    }
}

/// Candidate store backed by a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryCandidateRepository {
    table: Mutex<CandidateTable>,
}

impl InMemoryCandidateRepository {
    /// Repository that knows the given parties.
    pub fn with_parties<I, S>(parties: I) -> Self
    where
        I: IntoIterator<Item = (i32, S)>,
        S: Into<String>,
    {
        let repo = Self::default();
        lock(&repo.table).parties = parties
            .into_iter()
            .map(|(id, name)| (PartyId::new(id), name.into()))
            .collect();
        repo
    }

    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: StorageError) {
        lock(&self.table).failure = Some(error);
    }

    /// Current rows, in id order.
    pub fn rows(&self) -> Vec<Candidate> {
        lock(&self.table).rows.clone()
    }
}

#[async_trait]
impl CandidateRepository for InMemoryCandidateRepository {
    async fn list(&self) -> Result<Vec<Candidate>, StorageError> {
        let table = lock(&self.table);
        table.check()?;
        Ok(table.rows.clone())
    }

    async fn find_with_party(
        &self,
        id: CandidateId,
    ) -> Result<Option<CandidateWithParty>, StorageError> {
        let table = lock(&self.table);
        table.check()?;
        Ok(table
            .rows
            .iter()
            .find(|row| row.id == id)
            .map(|row| CandidateWithParty {
                candidate: row.clone(),
                party_name: table.party_name(row.party_id),
            }))
    }

    async fn insert(&self, candidate: &NewCandidate) -> Result<CandidateId, StorageError> {
        let mut table = lock(&self.table);
        table.check()?;
        table.last_id += 1;
        let id = CandidateId::new(table.last_id);
        table.rows.push(Candidate {
            id,
            first_name: candidate.first_name.clone(),
            last_name: candidate.last_name.clone(),
            industry_connected: candidate.industry_connected,
            party_id: None,
        });
        Ok(id)
    }

    async fn assign_party(
        &self,
        id: CandidateId,
        party: Option<PartyId>,
    ) -> Result<usize, StorageError> {
        let mut table = lock(&self.table);
        table.check()?;
        let Some(index) = table.rows.iter().position(|row| row.id == id) else {
            return Ok(0);
        };
        let known = party.is_none_or(|wanted| table.parties.iter().any(|(id, _)| *id == wanted));
        if !known {
            return Err(StorageError::query(PARTY_FK_VIOLATION));
        }
        if let Some(row) = table.rows.get_mut(index) {
            row.party_id = party;
        }
        Ok(1)
    }

    async fn delete(&self, id: CandidateId) -> Result<usize, StorageError> {
        let mut table = lock(&self.table);
        table.check()?;
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        Ok(affected(table.rows.len() != before))
    }
}

#[derive(Debug, Default)]
struct VoterTable {
    rows: Vec<Voter>,
    last_id: i32,
    failure: Option<StorageError>,
}

impl VoterTable {
    fn check(&self) -> Result<(), StorageError> {
        self.failure.clone().map_or(Ok(()), Err)
    }
}

/// Voter store backed by a `Vec`.
#[derive(Debug, Default)]
pub struct InMemoryVoterRepository {
    table: Mutex<VoterTable>,
}

impl InMemoryVoterRepository {
    /// Make every subsequent call fail with `error`.
    pub fn fail_with(&self, error: StorageError) {
        lock(&self.table).failure = Some(error);
    }

    /// Current rows, in insertion order.
    pub fn rows(&self) -> Vec<Voter> {
        lock(&self.table).rows.clone()
    }
}

#[async_trait]
impl VoterRepository for InMemoryVoterRepository {
    async fn list(&self) -> Result<Vec<Voter>, StorageError> {
        let table = lock(&self.table);
        table.check()?;
        let mut rows = table.rows.clone();
        rows.sort_by(|a, b| a.last_name.cmp(&b.last_name).then(a.id.cmp(&b.id)));
        Ok(rows)
    }

    async fn find_by_id(&self, id: VoterId) -> Result<Option<Voter>, StorageError> {
        let table = lock(&self.table);
        table.check()?;
        Ok(table.rows.iter().find(|row| row.id == id).cloned())
    }

    async fn insert(&self, voter: &NewVoter) -> Result<VoterId, StorageError> {
        let mut table = lock(&self.table);
        table.check()?;
        table.last_id += 1;
        let id = VoterId::new(table.last_id);
        table.rows.push(Voter {
            id,
            first_name: voter.first_name.clone(),
            last_name: voter.last_name.clone(),
            email: voter.email.clone(),
            created_at: Utc::now(),
        });
        Ok(id)
    }

    async fn update_email(&self, id: VoterId, email: &str) -> Result<usize, StorageError> {
        let mut table = lock(&self.table);
        table.check()?;
        let row = table.rows.iter_mut().find(|row| row.id == id);
        let hit = row.is_some();
        if let Some(row) = row {
            row.email = email.to_owned();
        }
        Ok(affected(hit))
    }

    async fn delete(&self, id: VoterId) -> Result<usize, StorageError> {
        let mut table = lock(&self.table);
        table.check()?;
        let before = table.rows.len();
        table.rows.retain(|row| row.id != id);
        Ok(affected(table.rows.len() != before))
    }
}
