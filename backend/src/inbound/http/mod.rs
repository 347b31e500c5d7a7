//! HTTP inbound adapter exposing the election REST API.

pub mod candidates;
pub mod envelope;
pub mod error;
pub mod health;
pub mod payload;
pub mod schemas;
pub mod state;
pub mod voters;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::NormalizePath;
use actix_web::{App, HttpResponse, web};

pub use error::ApiResult;
pub use state::HttpState;

use crate::middleware::Trace;

/// Register every `/api` route on `cfg`.
pub fn configure_api(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(candidates::list_candidates)
            .service(candidates::get_candidate)
            .service(candidates::create_candidate)
            .service(candidates::assign_party)
            .service(candidates::delete_candidate)
            .service(voters::list_voters)
            .service(voters::get_voter)
            .service(voters::create_voter)
            .service(voters::update_email)
            .service(voters::delete_voter),
    );
}

/// Unmatched routes answer 404 with an empty body.
pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().finish()
}

/// Application with the API routes, trace middleware and 404 fallback.
///
/// A trailing slash is ignored, so `/api/voters/` lists voters.
///
/// The server adds health probes and Swagger UI on top; tests use it as is.
///
/// # Examples
/// ```ignore
/// use std::sync::Arc;
/// use actix_web::web;
/// use election_backend::inbound::http::{HttpState, api_app};
/// use election_backend::test_support::{InMemoryCandidateRepository, InMemoryVoterRepository};
///
/// let state = HttpState::new(
///     Arc::new(InMemoryCandidateRepository::default()),
///     Arc::new(InMemoryVoterRepository::default()),
/// );
/// let _app = api_app(web::Data::new(state));
/// ```
pub fn api_app(
    state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(Trace)
        .wrap(NormalizePath::trim())
        .configure(configure_api)
        .default_service(web::to(not_found))
}
