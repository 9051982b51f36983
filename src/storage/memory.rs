use std::collections::HashMap;
use std::sync::RwLock;

use anyhow::{Result, anyhow};
use async_trait::async_trait;

use crate::domain::{Statement, StatementId, User, UserId};

use super::{StatementRepository, UserRepository};

/// In-memory store implementing both repositories.
///
/// Intended for tests/dev. Not optimized for performance.
#[derive(Debug, Default)]
pub struct MemoryStore {
    users: RwLock<HashMap<UserId, User>>,
    statements: RwLock<Vec<Statement>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn next_sequence(statements: &[Statement]) -> i64 {
        statements.last().map(|s| s.sequence).unwrap_or(0) + 1
    }
}

#[async_trait]
impl UserRepository for MemoryStore {
    async fn save_user(&self, user: &User) -> Result<()> {
        let mut users = self.users.write().map_err(|_| anyhow!("lock poisoned"))?;
        users.insert(user.id, user.clone());
        Ok(())
    }

    async fn get_user(&self, id: UserId) -> Result<Option<User>> {
        let users = self.users.read().map_err(|_| anyhow!("lock poisoned"))?;
        Ok(users.get(&id).cloned())
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let users = self.users.read().map_err(|_| anyhow!("lock poisoned"))?;
        Ok(users.values().find(|u| u.email == email).cloned())
    }
}

#[async_trait]
impl StatementRepository for MemoryStore {
    async fn save_statement(&self, statement: &mut Statement) -> Result<()> {
        let mut statements = self
            .statements
            .write()
            .map_err(|_| anyhow!("lock poisoned"))?;
        statement.sequence = Self::next_sequence(&statements);
        statements.push(statement.clone());
        Ok(())
    }

    async fn get_statement(&self, id: StatementId) -> Result<Option<Statement>> {
        let statements = self
            .statements
            .read()
            .map_err(|_| anyhow!("lock poisoned"))?;
        Ok(statements.iter().find(|s| s.id == id).cloned())
    }

    async fn list_statements_for_user(&self, user_id: UserId) -> Result<Vec<Statement>> {
        let statements = self
            .statements
            .read()
            .map_err(|_| anyhow!("lock poisoned"))?;
        Ok(statements
            .iter()
            .filter(|s| s.user_id == user_id)
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use uuid::Uuid;

    use super::*;
    use crate::domain::OperationType;

    #[tokio::test]
    async fn test_save_statement_assigns_increasing_sequence() -> Result<()> {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();

        let mut first = Statement::new(user, OperationType::Deposit, 100, "a");
        let mut second = Statement::new(user, OperationType::Deposit, 200, "b");
        store.save_statement(&mut first).await?;
        store.save_statement(&mut second).await?;

        assert_eq!(first.sequence, 1);
        assert_eq!(second.sequence, 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_statements_preserves_insertion_order() -> Result<()> {
        let store = MemoryStore::new();
        let user = Uuid::new_v4();
        let other = Uuid::new_v4();

        for (owner, amount) in [(user, 100), (other, 900), (user, 200), (user, 300)] {
            let mut statement = Statement::new(owner, OperationType::Deposit, amount, "x");
            store.save_statement(&mut statement).await?;
        }

        let listed = store.list_statements_for_user(user).await?;
        let amounts: Vec<_> = listed.iter().map(|s| s.amount_cents).collect();
        assert_eq!(amounts, vec![100, 200, 300]);
        Ok(())
    }

    #[tokio::test]
    async fn test_get_user_by_email_is_case_sensitive() -> Result<()> {
        let store = MemoryStore::new();
        let user = User::new("User Test", "test@example.com", "hash");
        store.save_user(&user).await?;

        assert!(store.get_user_by_email("test@example.com").await?.is_some());
        assert!(store.get_user_by_email("Test@example.com").await?.is_none());
        Ok(())
    }
}
