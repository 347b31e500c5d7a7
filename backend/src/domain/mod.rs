//! Domain types for the election API.
//!
//! Public surface:
//! - [`Error`] and [`ErrorCode`]: the response-facing error taxonomy.
//! - [`Candidate`] and [`Voter`] plus their validated write payloads.
//! - [`validation`]: the gate every write route passes through.
//! - [`ports`]: repository traits implemented by outbound adapters.

pub mod candidate;
pub mod error;
pub mod ports;
pub mod record;
pub mod trace_id;
pub mod validation;
pub mod voter;

pub use self::candidate::{
    Candidate, CandidateId, CandidateWithParty, NewCandidate, PartyAssignment, PartyId,
};
pub use self::error::{Error, ErrorCode, ErrorDetail, TRACE_ID_HEADER};
pub use self::trace_id::TraceId;
pub use self::validation::{FieldErrors, FieldName, Record};
pub use self::voter::{EmailUpdate, NewVoter, Voter, VoterId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use election_backend::domain::{ApiResult, Error};
///
/// fn handler() -> ApiResult<HttpResponse> {
///     Err(Error::invalid_request("nope"))
/// }
/// ```
pub type ApiResult<T> = Result<T, Error>;
