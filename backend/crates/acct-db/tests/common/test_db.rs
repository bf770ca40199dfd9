use acct_db::ConnectionManager;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    ConnectionManager::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

/// Creates a file-backed pool with several connections, for tests that need
/// real concurrent writers. Keep the `TempDir` alive for the test's duration.
pub async fn create_file_pool(max_connections: u32) -> (TempDir, SqlitePool) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let pool = ConnectionManager::new(temp.path().join("accounts.db"))
        .max_connections(max_connections)
        .connect()
        .await
        .expect("Failed to open file database");

    (temp, pool)
}

/// Number of rows stored for a provider-local id
pub async fn count_users_with_auth0_id(pool: &SqlitePool, auth0_id: &str) -> i64 {
    // Use sqlx::query_scalar (not query!) to avoid offline mode issues in tests
    sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE auth0id = ?")
        .bind(auth0_id)
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}

pub async fn count_users(pool: &SqlitePool) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM users")
        .fetch_one(pool)
        .await
        .expect("Failed to count users")
}
