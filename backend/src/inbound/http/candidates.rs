//! Candidate routes.
//!
//! ```text
//! GET    /api/candidates
//! GET    /api/candidate/{id}
//! POST   /api/candidate        {first_name, last_name, industry_connected}
//! PUT    /api/candidate/{id}   {party_id}
//! DELETE /api/candidate/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::domain::{CandidateId, NewCandidate, PartyAssignment};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{Envelope, FoundRow};
use crate::inbound::http::payload::SubmittedRecord;
use crate::inbound::http::schemas::{
    EnvelopeSchema, ErrorSchema, NewCandidateSchema, PartyAssignmentSchema,
};
use crate::inbound::http::state::HttpState;

const NOT_FOUND: &str = "Candidate not found";
const DELETED: &str = "Successfully deleted";

/// List every candidate, ordered by id.
#[utoipa::path(
    get,
    path = "/api/candidates",
    responses(
        (status = 200, description = "All candidates", body = EnvelopeSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["candidates"],
    operation_id = "listCandidates"
)]
#[get("/candidates")]
pub async fn list_candidates(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let rows = state
        .candidates
        .list()
        .await
        .map_err(|err| err.into_read_error())?;
    Ok(HttpResponse::Ok().json(Envelope::success(rows)))
}

/// Fetch one candidate with its party name. An unknown id yields `data: {}`.
#[utoipa::path(
    get,
    path = "/api/candidate/{id}",
    params(("id" = String, Path, description = "Candidate identifier")),
    responses(
        (status = 200, description = "Candidate, or `{}` when absent", body = EnvelopeSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["candidates"],
    operation_id = "getCandidate"
)]
#[get("/candidate/{id}")]
pub async fn get_candidate(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let row = match CandidateId::parse(&path) {
        Some(id) => state
            .candidates
            .find_with_party(id)
            .await
            .map_err(|err| err.into_read_error())?,
        None => None,
    };
    Ok(HttpResponse::Ok().json(Envelope::success(FoundRow(row))))
}

/// Register a candidate. The submitted body is echoed back as `data`.
#[utoipa::path(
    post,
    path = "/api/candidate",
    request_body(content(
        (NewCandidateSchema = "application/json"),
        (NewCandidateSchema = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Candidate created", body = EnvelopeSchema),
        (status = 400, description = "Validation or storage failure", body = ErrorSchema)
    ),
    tags = ["candidates"],
    operation_id = "createCandidate"
)]
#[post("/candidate")]
pub async fn create_candidate(
    state: web::Data<HttpState>,
    body: SubmittedRecord,
) -> ApiResult<HttpResponse> {
    let candidate = NewCandidate::from_record(body.as_record())?;
    let id = state
        .candidates
        .insert(&candidate)
        .await
        .map_err(|err| err.into_write_error())?;
    info!(candidate_id = %id, "candidate created");
    Ok(HttpResponse::Ok().json(Envelope::success(body.into_inner())))
}

/// Assign a party to a candidate, or clear it when `party_id` is absent.
#[utoipa::path(
    put,
    path = "/api/candidate/{id}",
    params(("id" = String, Path, description = "Candidate identifier")),
    request_body(content(
        (PartyAssignmentSchema = "application/json"),
        (PartyAssignmentSchema = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Party updated, or `Candidate not found`", body = EnvelopeSchema),
        (status = 400, description = "Malformed body or storage failure", body = ErrorSchema)
    ),
    tags = ["candidates"],
    operation_id = "assignCandidateParty"
)]
#[put("/candidate/{id}")]
pub async fn assign_party(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: SubmittedRecord,
) -> ApiResult<HttpResponse> {
    let PartyAssignment(party) = PartyAssignment::from_record(body.as_record())?;
    let changes = match CandidateId::parse(&path) {
        Some(id) => state
            .candidates
            .assign_party(id, party)
            .await
            .map_err(|err| err.into_write_error())?,
        None => 0,
    };
    if changes == 0 {
        return Ok(HttpResponse::Ok().json(Envelope::<()>::message(NOT_FOUND)));
    }
    Ok(HttpResponse::Ok().json(Envelope::success(body.into_inner()).with_changes(changes)))
}

/// Delete a candidate.
#[utoipa::path(
    delete,
    path = "/api/candidate/{id}",
    params(("id" = String, Path, description = "Candidate identifier")),
    responses(
        (status = 200, description = "Deleted, or `Candidate not found`", body = EnvelopeSchema),
        (status = 400, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["candidates"],
    operation_id = "deleteCandidate"
)]
#[delete("/candidate/{id}")]
pub async fn delete_candidate(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw_id = path.into_inner();
    let changes = match CandidateId::parse(&raw_id) {
        Some(id) => state
            .candidates
            .delete(id)
            .await
            .map_err(|err| err.into_write_error())?,
        None => 0,
    };
    if changes == 0 {
        return Ok(HttpResponse::Ok().json(Envelope::<()>::message(NOT_FOUND)));
    }
    Ok(HttpResponse::Ok().json(
        Envelope::<()>::message(DELETED)
            .with_changes(changes)
            .with_id(raw_id),
    ))
}
