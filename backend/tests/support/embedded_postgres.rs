//! Database provisioning on an embedded cluster.
//!
//! Database creation goes through `postgres` because `CREATE DATABASE`
//! cannot run inside a transaction. The schema comes from the embedded
//! Diesel migrations so tests never drift from `backend/migrations`.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use pg_embedded_setup_unpriv::TestCluster;
use postgres::{Client, NoTls};
use uuid::Uuid;

use super::format_postgres_error;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Create a fresh, migrated database and return its URL.
pub fn provision_database(cluster: &TestCluster) -> Result<String, String> {
    let name = format!("election_{}", Uuid::new_v4().simple());
    let admin_url = cluster.connection().database_url("postgres");
    let mut client = Client::connect(&admin_url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .batch_execute(&format!("CREATE DATABASE \"{name}\";"))
        .map_err(|err| format_postgres_error(&err))?;

    let url = cluster.connection().database_url(&name);
    migrate_schema(&url)?;
    Ok(url)
}

/// Run every pending migration against `url`.
pub fn migrate_schema(url: &str) -> Result<(), String> {
    let mut conn = PgConnection::establish(url).map_err(|err| format!("{err:?}"))?;
    conn.run_pending_migrations(MIGRATIONS)
        .map_err(|err| format!("migration: {err:?}"))?;
    Ok(())
}

/// Insert party rows directly; the API never writes them.
pub fn seed_parties(url: &str, names: &[&str]) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    for name in names {
        client
            .execute("INSERT INTO parties (name) VALUES ($1)", &[name])
            .map_err(|err| format_postgres_error(&err))?;
    }
    Ok(())
}

/// Delete a party row, exercising `ON DELETE SET NULL`.
pub fn delete_party(url: &str, id: i32) -> Result<(), String> {
    let mut client = Client::connect(url, NoTls).map_err(|err| format_postgres_error(&err))?;
    client
        .execute("DELETE FROM parties WHERE id = $1", &[&id])
        .map_err(|err| format_postgres_error(&err))?;
    Ok(())
}
