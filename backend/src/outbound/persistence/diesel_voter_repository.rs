//! PostgreSQL-backed `VoterRepository` using Diesel.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{StorageError, VoterRepository};
use crate::domain::{NewVoter, Voter, VoterId};

use super::diesel_helpers::{map_diesel_error, map_pool_error};
use super::models::{NewVoterRow, VoterRow};
use super::pool::DbPool;
use super::schema::voters;

/// Diesel-backed implementation of the [`VoterRepository`] port.
#[derive(Clone)]
pub struct DieselVoterRepository {
    pool: DbPool,
}

impl DieselVoterRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VoterRepository for DieselVoterRepository {
    async fn list(&self) -> Result<Vec<Voter>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let rows: Vec<VoterRow> = voters::table
            .select(VoterRow::as_select())
            .order_by((voters::last_name.asc(), voters::id.asc()))
            .load(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(rows.into_iter().map(Voter::from).collect())
    }

    async fn find_by_id(&self, id: VoterId) -> Result<Option<Voter>, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let row: Option<VoterRow> = voters::table
            .filter(voters::id.eq(id.get()))
            .select(VoterRow::as_select())
            .first(&mut conn)
            .await
            .optional()
            .map_err(map_diesel_error)?;
        Ok(row.map(Voter::from))
    }

    async fn insert(&self, voter: &NewVoter) -> Result<VoterId, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        let id: i32 = diesel::insert_into(voters::table)
            .values(NewVoterRow::from(voter))
            .returning(voters::id)
            .get_result(&mut conn)
            .await
            .map_err(map_diesel_error)?;
        Ok(VoterId::new(id))
    }

    async fn update_email(&self, id: VoterId, email: &str) -> Result<usize, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::update(voters::table.filter(voters::id.eq(id.get())))
            .set(voters::email.eq(email))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }

    async fn delete(&self, id: VoterId) -> Result<usize, StorageError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;
        diesel::delete(voters::table.filter(voters::id.eq(id.get())))
            .execute(&mut conn)
            .await
            .map_err(map_diesel_error)
    }
}
