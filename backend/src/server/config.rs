//! Server settings loaded via OrthoConfig, and the resolved server config.

use std::net::{Ipv4Addr, SocketAddr};

use election_backend::outbound::persistence::{DbPool, PoolConfig};
use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/election";

/// Settings layered from CLI flags, environment (`PORT`, `DATABASE_URL`,
/// `DB_MAX_CONNECTIONS`) and defaults.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
pub struct ServerSettings {
    /// TCP port to listen on.
    #[ortho_config(default = 3001)]
    pub port: u16,
    /// PostgreSQL connection string.
    pub database_url: Option<String>,
    /// Upper bound on pooled connections.
    pub db_max_connections: Option<u32>,
}

impl ServerSettings {
    pub fn database_url(&self) -> &str {
        self.database_url.as_deref().unwrap_or(DEFAULT_DATABASE_URL)
    }

    /// Listen on every interface.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    pub fn pool_config(&self) -> PoolConfig {
        let config = PoolConfig::new(self.database_url());
        match self.db_max_connections {
            Some(max) => config.with_max_size(max),
            None => config,
        }
    }
}

/// Everything [`super::create_server`] needs.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) db_pool: DbPool,
}

impl ServerConfig {
    #[must_use]
    pub fn new(bind_addr: SocketAddr, db_pool: DbPool) -> Self {
        Self { bind_addr, db_pool }
    }
}
