// Allow dead_code because these helpers are used across different test files
// which are compiled separately
#![allow(dead_code)]

use std::sync::Arc;

use anyhow::Result;
use saldo::application::{AccountService, LedgerService};
use saldo::auth::{Argon2Hasher, JwtIssuer};
use saldo::domain::User;
use saldo::storage::{MemoryStore, SqliteStore};
use tempfile::TempDir;

pub const TEST_TOKEN_SECRET: &str = "test-secret";

/// Helper to build services backed by a fresh in-memory store.
pub fn memory_services() -> (LedgerService, AccountService) {
    let store = Arc::new(MemoryStore::new());
    let ledger = LedgerService::new(store.clone(), store.clone());
    let accounts = AccountService::new(
        store,
        Arc::new(Argon2Hasher),
        Arc::new(JwtIssuer::new(TEST_TOKEN_SECRET)),
    );
    (ledger, accounts)
}

/// Helper to build services backed by a temporary SQLite database.
/// Returns the database path so tests can reconnect to the same file.
pub async fn sqlite_services() -> Result<(LedgerService, AccountService, TempDir, String)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite:{}?mode=rwc", db_path.display());

    let store = Arc::new(SqliteStore::init(&db_url).await?);
    let ledger = LedgerService::new(store.clone(), store.clone());
    let accounts = AccountService::new(
        store,
        Arc::new(Argon2Hasher),
        Arc::new(JwtIssuer::new(TEST_TOKEN_SECRET)),
    );

    Ok((ledger, accounts, temp_dir, db_url))
}

/// Register the standard test user.
pub async fn create_test_user(accounts: &AccountService) -> Result<User> {
    let user = accounts
        .create_user("User Test", "test@example.com", "test")
        .await?;
    Ok(user)
}
