//! Database connection pool and migration management.
//!
//! Shops, users, profiles and transaction records all live in PostgreSQL.
//! Money columns are `NUMERIC(12, 2)` and decode into `rust_decimal::Decimal`.

use sqlx::{Pool, Postgres};

/// Type alias for PostgreSQL connection pool.
pub type DbPool = Pool<Postgres>;

/// Create a new PostgreSQL connection pool.
///
/// # Configuration
///
/// - Maximum connections: 5
/// - Connections are created lazily as needed and reused across requests
///
/// # Errors
///
/// Returns an error if the connection string is invalid or the server
/// cannot be reached or rejects the credentials.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await
}

/// Run the SQL migrations embedded from the `migrations/` directory.
///
/// Applied migrations are tracked in `_sqlx_migrations`, so each file runs once.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
