//! Persistence port for candidates.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::{Candidate, CandidateId, CandidateWithParty, NewCandidate, PartyId};

/// Port for reading and writing candidate rows.
///
/// Each method maps to exactly one statement. Update and delete report the
/// number of rows they touched; zero is a normal outcome, not an error.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CandidateRepository: Send + Sync {
    /// Every candidate, ordered by id.
    async fn list(&self) -> Result<Vec<Candidate>, StorageError>;

    /// One candidate joined with its party's name.
    async fn find_with_party(
        &self,
        id: CandidateId,
    ) -> Result<Option<CandidateWithParty>, StorageError>;

    /// Insert a candidate and return the id storage assigned.
    async fn insert(&self, candidate: &NewCandidate) -> Result<CandidateId, StorageError>;

    /// Point the candidate at `party`, or clear the reference with `None`.
    async fn assign_party(
        &self,
        id: CandidateId,
        party: Option<PartyId>,
    ) -> Result<usize, StorageError>;

    async fn delete(&self, id: CandidateId) -> Result<usize, StorageError>;
}
