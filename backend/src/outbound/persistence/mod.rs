//! PostgreSQL persistence adapters using Diesel.
//!
//! Repositories only translate between Diesel rows and domain types. Row
//! structs (`models.rs`) and table definitions (`schema.rs`) stay private to
//! this module.
//!
//! # Example
//!
//! ```ignore
//! use election_backend::outbound::persistence::{DbPool, DieselVoterRepository, PoolConfig};
//!
//! let pool = DbPool::new(PoolConfig::new("postgres://localhost/election")).await?;
//! let voters = DieselVoterRepository::new(pool);
//! ```

mod diesel_candidate_repository;
mod diesel_helpers;
mod diesel_voter_repository;
mod models;
mod pool;
mod schema;

pub use diesel_candidate_repository::DieselCandidateRepository;
pub use diesel_voter_repository::DieselVoterRepository;
pub use pool::{DEFAULT_MAX_CONNECTIONS, DbPool, PoolConfig, PoolError};
