//! OpenAPI schema definitions for domain types.
//!
//! Domain types do not derive `ToSchema`; these wrappers mirror their wire
//! shape so the adapter layer owns the documentation concern.

use utoipa::ToSchema;

/// Error body. `error` is a message string, or a list of field messages
/// when validation fails.
#[derive(ToSchema)]
#[schema(as = ErrorBody)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct ErrorSchema {
    #[schema(value_type = Object)]
    error: serde_json::Value,
}

/// Stored candidate.
#[derive(ToSchema)]
#[schema(as = Candidate)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CandidateSchema {
    #[schema(example = 1)]
    id: i32,
    #[schema(example = "Ronald")]
    first_name: String,
    #[schema(example = "Firbank")]
    last_name: String,
    industry_connected: bool,
    party_id: Option<i32>,
}

/// Candidate joined with its party's name.
#[derive(ToSchema)]
#[schema(as = CandidateWithParty)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct CandidateWithPartySchema {
    id: i32,
    first_name: String,
    last_name: String,
    industry_connected: bool,
    party_id: Option<i32>,
    #[schema(example = "JS Juggernauts")]
    party_name: Option<String>,
}

/// Body of `POST /api/candidate`. Also accepted as a URL-encoded form.
#[derive(ToSchema)]
#[schema(as = NewCandidate)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct NewCandidateSchema {
    first_name: String,
    last_name: String,
    /// `true`/`false`, `0`/`1`, or their string forms.
    #[schema(value_type = Object, example = 1)]
    industry_connected: serde_json::Value,
}

/// Body of `PUT /api/candidate/{id}`.
#[derive(ToSchema)]
#[schema(as = PartyAssignment)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct PartyAssignmentSchema {
    /// Omit or send `null` to clear the party.
    #[schema(example = 2)]
    party_id: Option<i32>,
}

/// Stored voter.
#[derive(ToSchema)]
#[schema(as = Voter)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct VoterSchema {
    id: i32,
    #[schema(example = "Ada")]
    first_name: String,
    #[schema(example = "Lovelace")]
    last_name: String,
    #[schema(example = "ada@example.org")]
    email: String,
    #[schema(value_type = String, format = DateTime)]
    created_at: String,
}

/// Body of `POST /api/voter`.
#[derive(ToSchema)]
#[schema(as = NewVoter)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct NewVoterSchema {
    first_name: String,
    last_name: String,
    #[schema(example = "ada@example.org")]
    email: String,
}

/// Body of `PUT /api/voter/{id}`.
#[derive(ToSchema)]
#[schema(as = EmailUpdate)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct EmailUpdateSchema {
    #[schema(example = "ada@example.org")]
    email: String,
}

/// Success envelope. Which optional members appear depends on the route.
#[derive(ToSchema)]
#[schema(as = Envelope)]
#[expect(dead_code, reason = "Used only for OpenAPI schema generation via utoipa")]
pub struct EnvelopeSchema {
    #[schema(example = "success")]
    message: String,
    /// Rows, a single row (`{}` when absent), or the submitted body.
    #[schema(value_type = Object)]
    data: Option<serde_json::Value>,
    /// Rows touched by an update or delete.
    changes: Option<u64>,
    /// Raw path identifier echoed by deletes.
    id: Option<String>,
}
