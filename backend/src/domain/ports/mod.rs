//! Repository ports for candidates and voters.
//!
//! Handlers depend on these traits only. Production wires Diesel adapters;
//! tests substitute mocks or in-memory doubles.

mod macros;
pub(crate) use macros::define_port_error;

mod candidate_repository;
mod storage_error;
mod voter_repository;

#[cfg(test)]
pub use candidate_repository::MockCandidateRepository;
pub use candidate_repository::CandidateRepository;
pub use storage_error::StorageError;
#[cfg(test)]
pub use voter_repository::MockVoterRepository;
pub use voter_repository::VoterRepository;
