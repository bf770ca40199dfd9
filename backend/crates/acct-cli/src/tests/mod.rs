mod commands;

use acct_db::{ConnectionManager, UserRepository};

use tempfile::TempDir;

/// Repository over a fresh file database. Keep the `TempDir` alive.
pub(crate) async fn test_repository() -> (TempDir, UserRepository) {
    let temp = TempDir::new().unwrap();
    let pool = ConnectionManager::new(temp.path().join("accounts.db"))
        .connect()
        .await
        .unwrap();
    (temp, UserRepository::new(pool))
}
