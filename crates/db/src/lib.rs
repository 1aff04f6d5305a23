//! Database access layer: pool construction, migrations and per-entity
//! repositories.

use sqlx::migrate::Migrator;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Embedded migrations from `crates/db/migrations`.
pub static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Create a connection pool from a database URL.
///
/// TLS behaviour is whatever the URL's `sslmode` parameter says (sqlx
/// defaults to `prefer`).
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let opts: PgConnectOptions = database_url.parse()?;
    connect(opts).await
}

/// Create a connection pool, forcing TLS without certificate verification.
///
/// `sslmode=require` encrypts the connection but skips CA verification.
/// Only use this against databases whose certificate chain cannot be
/// verified (e.g. some hosted Postgres providers); prefer `create_pool`
/// with `sslmode=verify-full` in the URL otherwise.
pub async fn create_pool_insecure_tls(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let opts: PgConnectOptions = database_url.parse()?;
    connect(opts.ssl_mode(PgSslMode::Require)).await
}

async fn connect(opts: PgConnectOptions) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect_with(opts)
        .await
}

/// Verify the database is reachable with a trivial round trip.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await?;
    Ok(())
}

/// Apply any pending migrations. Idempotent; safe to run on every startup.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    MIGRATOR.run(pool).await
}

/// Destructively rebuild the schema: drop all entity tables (and the
/// migration bookkeeping table) and re-run every migration from scratch.
///
/// This is an explicit, opt-in operation. It is never part of normal
/// startup; callers reach it via `RESET_SCHEMA_ON_STARTUP`.
pub async fn reset_schema(pool: &DbPool) -> Result<(), sqlx::Error> {
    tracing::warn!("Resetting database schema: all rows will be dropped");
    sqlx::query("DROP TABLE IF EXISTS enrollments CASCADE")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS courses CASCADE")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS students CASCADE")
        .execute(pool)
        .await?;
    sqlx::query("DROP TABLE IF EXISTS _sqlx_migrations")
        .execute(pool)
        .await?;
    run_migrations(pool).await?;
    Ok(())
}
