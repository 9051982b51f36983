use anyhow::Result;
use async_trait::async_trait;

use crate::domain::{Statement, StatementId, User, UserId};

/// Store of user identity records.
///
/// Implementations must keep both `id` and `email` unique across all users.
/// Email lookup is exact and case-sensitive.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Save a new user.
    async fn save_user(&self, user: &User) -> Result<()>;

    /// Get a user by ID.
    async fn get_user(&self, id: UserId) -> Result<Option<User>>;

    /// Get a user by email.
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
}

/// Append-only store of statement records, partitioned by user.
///
/// The store never rejects an append on the basis of ledger state; solvency
/// is enforced by the calling service. Records are immutable once saved.
#[async_trait]
pub trait StatementRepository: Send + Sync {
    /// Save a new statement to the ledger.
    /// Automatically assigns the next sequence number.
    async fn save_statement(&self, statement: &mut Statement) -> Result<()>;

    /// Get a statement by ID.
    async fn get_statement(&self, id: StatementId) -> Result<Option<Statement>>;

    /// List a user's statements in insertion order.
    /// Re-querying yields the same sequence until a new append occurs.
    async fn list_statements_for_user(&self, user_id: UserId) -> Result<Vec<Statement>>;
}
