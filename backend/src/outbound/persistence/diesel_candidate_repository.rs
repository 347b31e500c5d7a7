//! PostgreSQL-backed `CandidateRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{CandidateRepository, StorageError};
use crate::domain::{Candidate, CandidateId, CandidateWithParty, NewCandidate, PartyId};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{CandidateRow, NewCandidateRow};
use super::pool::DbPool;
use super::schema::{candidates, parties};

/// Diesel-backed implementation of the [`CandidateRepository`] port.
#[derive(Clone)]
pub struct DieselCandidateRepository {
    pool: DbPool,
}

impl DieselCandidateRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CandidateRepository for DieselCandidateRepository {
    async fn list(&self) -> Result<Vec<Candidate>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<CandidateRow> = candidates::table
            .select(CandidateRow::as_select())
            .order_by(candidates::id.asc())
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Candidate::from).collect())
    }

    async fn find_with_party(
        &self,
        id: CandidateId,
    ) -> Result<Option<CandidateWithParty>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<(CandidateRow, Option<String>)> = candidates::table
            .left_join(parties::table)
            .filter(candidates::id.eq(id.get()))
            .select((CandidateRow::as_select(), parties::name.nullable()))
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(|(candidate, party_name)| CandidateWithParty {
            candidate: candidate.into(),
            party_name,
        }))
    }

    async fn insert(&self, candidate: &NewCandidate) -> Result<CandidateId, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id: i32 = diesel::insert_into(candidates::table)
            .values(NewCandidateRow::from(candidate))
            .returning(candidates::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(CandidateId::new(id))
    }

    async fn assign_party(
        &self,
        id: CandidateId,
        party: Option<PartyId>,
    ) -> Result<usize, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(candidates::table.filter(candidates::id.eq(id.get())))
            .set(candidates::party_id.eq(party.map(PartyId::get)))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: CandidateId) -> Result<usize, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(candidates::table.filter(candidates::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
