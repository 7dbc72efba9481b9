//! Storage layer: models, repositories, and the [`Store`] seam.
//!
//! The HTTP layer depends only on the [`Store`] trait; [`PgStore`] is the
//! production Postgres implementation and [`MemoryStore`] backs tests and
//! store-less local runs.

pub mod memory;
pub mod models;
pub mod repositories;
pub mod store;

pub use memory::MemoryStore;
pub use store::{PgStore, Store, StoreError};

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Alias for the connection pool type used throughout the workspace.
pub type DbPool = PgPool;

/// Create a connection pool for the given database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database is reachable with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
