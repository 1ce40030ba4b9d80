//! Persistence backends and database bootstrap.
//!
//! Two [`crate::domain::repositories::UrlRepository`] implementations live
//! here: [`PgUrlRepository`] backed by PostgreSQL and [`MemoryUrlRepository`]
//! backed by a process-local map. Both enforce alias uniqueness atomically.

pub mod memory_url_repository;
pub mod pg_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use pg_url_repository::PgUrlRepository;

use crate::config::Config;
use anyhow::Result;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

/// Opens a PostgreSQL connection pool using the configured tuning values.
///
/// # Errors
///
/// Returns an error if the database is unreachable or refuses the connection.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await?;

    tracing::info!("Connected to database");

    Ok(pool)
}

/// Applies the embedded migrations, creating the `urls` table and its
/// alias uniqueness constraint.
///
/// # Errors
///
/// Returns an error if a migration fails to apply.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations").run(pool).await?;

    tracing::info!("Migrations applied");

    Ok(())
}
