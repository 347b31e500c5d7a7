//! OpenAPI documentation for the election API.
//!
//! [`ApiDoc`] collects every handler annotation plus the schema wrappers in
//! [`crate::inbound::http::schemas`]. Swagger UI serves it in debug builds
//! and `cargo run --bin openapi-dump` prints it for external tooling.

use utoipa::OpenApi;

use crate::inbound::http::schemas::{
    CandidateSchema, CandidateWithPartySchema, EmailUpdateSchema, EnvelopeSchema, ErrorSchema,
    NewCandidateSchema, NewVoterSchema, PartyAssignmentSchema, VoterSchema,
};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Election API",
        description = "Manage election candidates and voters."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::candidates::list_candidates,
        crate::inbound::http::candidates::get_candidate,
        crate::inbound::http::candidates::create_candidate,
        crate::inbound::http::candidates::assign_party,
        crate::inbound::http::candidates::delete_candidate,
        crate::inbound::http::voters::list_voters,
        crate::inbound::http::voters::get_voter,
        crate::inbound::http::voters::create_voter,
        crate::inbound::http::voters::update_email,
        crate::inbound::http::voters::delete_voter,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        CandidateSchema,
        CandidateWithPartySchema,
        NewCandidateSchema,
        PartyAssignmentSchema,
        VoterSchema,
        NewVoterSchema,
        EmailUpdateSchema,
        EnvelopeSchema,
        ErrorSchema,
    )),
    tags(
        (name = "candidates", description = "People standing for election"),
        (name = "voters", description = "Registered voters"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use utoipa::openapi::path::HttpMethod;

    #[rstest]
    #[case("/api/candidates", HttpMethod::Get)]
    #[case("/api/candidate/{id}", HttpMethod::Get)]
    #[case("/api/candidate", HttpMethod::Post)]
    #[case("/api/candidate/{id}", HttpMethod::Put)]
    #[case("/api/candidate/{id}", HttpMethod::Delete)]
    #[case("/api/voters", HttpMethod::Get)]
    #[case("/api/voter/{id}", HttpMethod::Get)]
    #[case("/api/voter", HttpMethod::Post)]
    #[case("/api/voter/{id}", HttpMethod::Put)]
    #[case("/api/voter/{id}", HttpMethod::Delete)]
    #[case("/health/ready", HttpMethod::Get)]
    fn every_route_is_documented(#[case] path: &str, #[case] method: HttpMethod) {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get(path).expect("path documented");
        let operation = match method {
            HttpMethod::Get => item.get.as_ref(),
            HttpMethod::Post => item.post.as_ref(),
            HttpMethod::Put => item.put.as_ref(),
            HttpMethod::Delete => item.delete.as_ref(),
            _ => None,
        };
        assert!(operation.is_some(), "operation on {path} missing");
    }

    #[rstest]
    #[case("/api/candidate", HttpMethod::Post)]
    #[case("/api/candidate/{id}", HttpMethod::Put)]
    #[case("/api/voter", HttpMethod::Post)]
    #[case("/api/voter/{id}", HttpMethod::Put)]
    fn write_routes_accept_json_and_forms(#[case] path: &str, #[case] method: HttpMethod) {
        let doc = ApiDoc::openapi();
        let item = doc.paths.paths.get(path).expect("path documented");
        let operation = match method {
            HttpMethod::Post => item.post.as_ref(),
            _ => item.put.as_ref(),
        }
        .expect("operation documented");
        let body = operation.request_body.as_ref().expect("request body");
        assert!(body.content.contains_key("application/json"));
        assert!(body.content.contains_key("application/x-www-form-urlencoded"));
    }

    #[rstest]
    #[case("Candidate")]
    #[case("CandidateWithParty")]
    #[case("Voter")]
    #[case("Envelope")]
    #[case("ErrorBody")]
    fn schemas_are_registered(#[case] name: &str) {
        let doc = ApiDoc::openapi();
        let schemas = &doc.components.as_ref().expect("components").schemas;
        assert!(schemas.contains_key(name), "schema {name} missing");
    }
}
