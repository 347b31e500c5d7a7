//! Persistence port for voters.

use async_trait::async_trait;

use super::StorageError;
use crate::domain::{NewVoter, Voter, VoterId};

/// Port for reading and writing voter rows.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VoterRepository: Send + Sync {
    /// Every voter, ordered by last name with id breaking ties.
    async fn list(&self) -> Result<Vec<Voter>, StorageError>;

    async fn find_by_id(&self, id: VoterId) -> Result<Option<Voter>, StorageError>;

    /// Insert a voter and return the id storage assigned.
    async fn insert(&self, voter: &NewVoter) -> Result<VoterId, StorageError>;

    /// Replace the voter's email; returns the number of rows updated.
    async fn update_email(&self, id: VoterId, email: &str) -> Result<usize, StorageError>;

    async fn delete(&self, id: VoterId) -> Result<usize, StorageError>;
}
