//! Storage layer for the leadlink backend.
//!
//! The [`store::Store`] trait is the seam to the storage collaborator: four
//! logical collections (projects, secrets, per-project leads), each keyed by
//! an opaque generated id. [`pg::PgStore`] is the production PostgreSQL
//! backend; [`mem::MemStore`] backs tests and local development.
//!
//! On top of the trait sit the access model ([`access`]: identity resolver
//! and authorization gate), the operation facade ([`ops`]), and the
//! stateful client [`session::Session`] with its optimistic local mirror.

pub mod access;
pub mod mem;
pub mod models;
pub mod ops;
pub mod pg;
pub mod session;
pub mod store;

pub use store::{Store, StoreError};

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply embedded migrations.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
