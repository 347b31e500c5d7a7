//! Election API entry point.

mod server;

use actix_web::web;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use election_backend::inbound::http::health::HealthState;
use election_backend::outbound::persistence::DbPool;
use ortho_config::OrthoConfig;
use server::{ServerConfig, ServerSettings, create_server};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = ServerSettings::load()
        .map_err(|e| std::io::Error::other(format!("failed to load configuration: {e}")))?;

    let pool = DbPool::new(settings.pool_config())
        .await
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    info!(max_connections = settings.pool_config().max_size(), "database pool ready");

    let health_state = web::Data::new(HealthState::new());
    let server = create_server(
        health_state,
        ServerConfig::new(settings.bind_addr(), pool),
    )?;
    server.await
}
