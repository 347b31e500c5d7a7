//! Shared HTTP adapter state.
//!
//! Handlers receive this through `web::Data` and depend only on the ports,
//! so tests can swap in mocks or in-memory repositories.

use std::sync::Arc;

use crate::domain::ports::{CandidateRepository, VoterRepository};

/// Repository handles available to every handler.
#[derive(Clone)]
pub struct HttpState {
    pub candidates: Arc<dyn CandidateRepository>,
    pub voters: Arc<dyn VoterRepository>,
}

impl HttpState {
    pub fn new(candidates: Arc<dyn CandidateRepository>, voters: Arc<dyn VoterRepository>) -> Self {
        Self { candidates, voters }
    }
}
