//! Server construction and middleware wiring.

mod config;

pub use config::{ServerConfig, ServerSettings};

use std::future::Future;
use std::sync::Arc;

use actix_web::dev::{Server, ServerHandle, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

#[cfg(debug_assertions)]
use election_backend::doc::ApiDoc;
use election_backend::inbound::http::health::{HealthState, live, ready};
use election_backend::inbound::http::{HttpState, api_app};
use election_backend::outbound::persistence::{
    DbPool, DieselCandidateRepository, DieselVoterRepository,
};
#[cfg(debug_assertions)]
use utoipa::OpenApi;
#[cfg(debug_assertions)]
use utoipa_swagger_ui::SwaggerUi;

fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    web::Data::new(HttpState::new(
        Arc::new(DieselCandidateRepository::new(pool.clone())),
        Arc::new(DieselVoterRepository::new(pool.clone())),
    ))
}

fn build_app(
    health_state: web::Data<HealthState>,
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let app = api_app(http_state)
        .app_data(health_state)
        .service(ready)
        .service(live);

    #[cfg(debug_assertions)]
    let app = app.service(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()));

    app
}

/// Fail liveness once `shutdown` resolves, then drain in-flight requests.
async fn drain_on<F>(shutdown: F, health_state: web::Data<HealthState>, handle: ServerHandle)
where
    F: Future<Output = ()>,
{
    shutdown.await;
    health_state.mark_unhealthy();
    info!("shutdown requested, draining");
    handle.stop(true).await;
}

async fn ctrl_c() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        warn!(%error, "cannot listen for ctrl-c; liveness will not drain");
        std::future::pending::<()>().await;
    }
}

/// Bind the listener and return the running server.
///
/// Readiness flips to healthy once the socket is bound; liveness fails once
/// ctrl-c starts a graceful shutdown.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(
    health_state: web::Data<HealthState>,
    config: ServerConfig,
) -> std::io::Result<Server> {
    let ServerConfig { bind_addr, db_pool } = config;
    let http_state = build_http_state(&db_pool);
    let server_health_state = health_state.clone();

    let server =
        HttpServer::new(move || build_app(server_health_state.clone(), http_state.clone()))
            .bind(bind_addr)?
            .run();

    actix_web::rt::spawn(drain_on(ctrl_c(), health_state.clone(), server.handle()));
    health_state.mark_ready();
    info!(%bind_addr, "listening");
    Ok(server)
}
