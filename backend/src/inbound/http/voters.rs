//! Voter routes.
//!
//! ```text
//! GET    /api/voters
//! GET    /api/voter/{id}
//! POST   /api/voter        {first_name, last_name, email}
//! PUT    /api/voter/{id}   {email}
//! DELETE /api/voter/{id}
//! ```

use actix_web::{HttpResponse, delete, get, post, put, web};
use tracing::info;

use crate::domain::{EmailUpdate, NewVoter, VoterId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::envelope::{Envelope, FoundRow};
use crate::inbound::http::payload::SubmittedRecord;
use crate::inbound::http::schemas::{
    EmailUpdateSchema, EnvelopeSchema, ErrorSchema, NewVoterSchema,
};
use crate::inbound::http::state::HttpState;

const NOT_FOUND: &str = "Voter not found";
const DELETED: &str = "deleted";

/// List every voter, ordered by last name.
#[utoipa::path(
    get,
    path = "/api/voters",
    responses(
        (status = 200, description = "All voters", body = EnvelopeSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["voters"],
    operation_id = "listVoters"
)]
#[get("/voters")]
pub async fn list_voters(state: web::Data<HttpState>) -> ApiResult<HttpResponse> {
    let rows = state
        .voters
        .list()
        .await
        .map_err(|err| err.into_read_error())?;
    Ok(HttpResponse::Ok().json(Envelope::success(rows)))
}

/// Fetch one voter. An unknown id yields `data: {}`.
#[utoipa::path(
    get,
    path = "/api/voter/{id}",
    params(("id" = String, Path, description = "Voter identifier")),
    responses(
        (status = 200, description = "Voter, or `{}` when absent", body = EnvelopeSchema),
        (status = 500, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["voters"],
    operation_id = "getVoter"
)]
#[get("/voter/{id}")]
pub async fn get_voter(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let row = match VoterId::parse(&path) {
        Some(id) => state
            .voters
            .find_by_id(id)
            .await
            .map_err(|err| err.into_read_error())?,
        None => None,
    };
    Ok(HttpResponse::Ok().json(Envelope::success(FoundRow(row))))
}

/// Register a voter. The submitted body is echoed back as `data`.
#[utoipa::path(
    post,
    path = "/api/voter",
    request_body(content(
        (NewVoterSchema = "application/json"),
        (NewVoterSchema = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Voter created", body = EnvelopeSchema),
        (status = 400, description = "Validation or storage failure", body = ErrorSchema)
    ),
    tags = ["voters"],
    operation_id = "createVoter"
)]
#[post("/voter")]
pub async fn create_voter(
    state: web::Data<HttpState>,
    body: SubmittedRecord,
) -> ApiResult<HttpResponse> {
    let voter = NewVoter::from_record(body.as_record())?;
    let id = state
        .voters
        .insert(&voter)
        .await
        .map_err(|err| err.into_write_error())?;
    info!(voter_id = %id, "voter created");
    Ok(HttpResponse::Ok().json(Envelope::success(body.into_inner())))
}

/// Change a voter's email address.
#[utoipa::path(
    put,
    path = "/api/voter/{id}",
    params(("id" = String, Path, description = "Voter identifier")),
    request_body(content(
        (EmailUpdateSchema = "application/json"),
        (EmailUpdateSchema = "application/x-www-form-urlencoded")
    )),
    responses(
        (status = 200, description = "Email updated, or `Voter not found`", body = EnvelopeSchema),
        (status = 400, description = "Validation or storage failure", body = ErrorSchema)
    ),
    tags = ["voters"],
    operation_id = "updateVoterEmail"
)]
#[put("/voter/{id}")]
pub async fn update_email(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    body: SubmittedRecord,
) -> ApiResult<HttpResponse> {
    let email = EmailUpdate::from_record(body.as_record())?;
    let changes = match VoterId::parse(&path) {
        Some(id) => state
            .voters
            .update_email(id, email.as_str())
            .await
            .map_err(|err| err.into_write_error())?,
        None => 0,
    };
    if changes == 0 {
        return Ok(HttpResponse::Ok().json(Envelope::<()>::message(NOT_FOUND)));
    }
    Ok(HttpResponse::Ok().json(Envelope::success(body.into_inner()).with_changes(changes)))
}

/// Delete a voter.
#[utoipa::path(
    delete,
    path = "/api/voter/{id}",
    params(("id" = String, Path, description = "Voter identifier")),
    responses(
        (status = 200, description = "Deleted, or `Voter not found`", body = EnvelopeSchema),
        (status = 400, description = "Storage failure", body = ErrorSchema)
    ),
    tags = ["voters"],
    operation_id = "deleteVoter"
)]
#[delete("/voter/{id}")]
pub async fn delete_voter(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let raw_id = path.into_inner();
    let changes = match VoterId::parse(&raw_id) {
        Some(id) => state
            .voters
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
