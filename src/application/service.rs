use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use anyhow::anyhow;
use tokio::sync::Mutex as AsyncMutex;

use crate::domain::{
    Cents, OperationType, Statement, StatementId, UserId, compute_balance, format_cents,
};
use crate::storage::{StatementRepository, UserRepository};

use super::AppError;

/// Application service providing the ledger operations.
/// This is the primary interface for any client (HTTP, CLI, TUI, etc.).
pub struct LedgerService {
    users: Arc<dyn UserRepository>,
    statements: Arc<dyn StatementRepository>,
    /// One lock per user. Serializes check-then-append so that concurrent
    /// withdrawals cannot both pass the funds check against a stale balance;
    /// operations for different users proceed in parallel.
    account_locks: Mutex<HashMap<UserId, Arc<AsyncMutex<()>>>>,
}

/// Result of a balance query: the derived balance plus the full history
/// backing it.
pub struct BalanceSheet {
    pub balance: Cents,
    pub statements: Vec<Statement>,
}

impl LedgerService {
    /// Create a new ledger service with the given stores.
    pub fn new(users: Arc<dyn UserRepository>, statements: Arc<dyn StatementRepository>) -> Self {
        Self {
            users,
            statements,
            account_locks: Mutex::new(HashMap::new()),
        }
    }

    fn account_lock(&self, user_id: UserId) -> Result<Arc<AsyncMutex<()>>, AppError> {
        let mut locks = self
            .account_locks
            .lock()
            .map_err(|_| anyhow!("account lock map poisoned"))?;
        Ok(locks.entry(user_id).or_default().clone())
    }

    /// Record a deposit or withdrawal against a user's balance.
    ///
    /// Withdrawals are checked against the current balance: withdrawing
    /// exactly the balance is allowed and leaves it at zero, withdrawing more
    /// fails with `InsufficientFunds` and leaves the ledger untouched. The
    /// user-existence check always runs before the funds check.
    pub async fn create_statement(
        &self,
        user_id: UserId,
        operation: OperationType,
        amount_cents: Cents,
        description: impl Into<String>,
    ) -> Result<Statement, AppError> {
        if amount_cents < 0 {
            return Err(AppError::InvalidAmount(
                "Amount must not be negative".to_string(),
            ));
        }

        self.users
            .get_user(user_id)
            .await?
            .ok_or(AppError::UserNotFound(user_id))?;

        let lock = self.account_lock(user_id)?;
        let _guard = lock.lock().await;

        if operation == OperationType::Withdraw {
            let history = self.statements.list_statements_for_user(user_id).await?;
            let balance = compute_balance(&history);
            if amount_cents > balance {
                return Err(AppError::InsufficientFunds {
                    balance,
                    requested: amount_cents,
                });
            }
        }

        let mut statement = Statement::new(user_id, operation, amount_cents, description);
        self.statements.save_statement(&mut statement).await?;

        tracing::info!(
            user_id = %user_id,
            statement_id = %statement.id,
            operation = %operation,
            amount = %format_cents(amount_cents),
            "statement recorded"
        );

        Ok(statement)
    }

    /// Get a user's current balance together with the full statement history
    /// it is derived from.
    pub async fn get_balance(&self, user_id: UserId) -> Result<BalanceSheet, AppError> {
        self.users
            .get_user(user_id)
            .await?
            .ok_or(AppError::UserNotFound(user_id))?;

        let statements = self.statements.list_statements_for_user(user_id).await?;
        let balance = compute_balance(&statements);

        Ok(BalanceSheet {
            balance,
            statements,
        })
    }

    /// Fetch a single statement, verifying it belongs to the requesting user.
    ///
    /// A statement owned by another user is reported as not found, so foreign
    /// statement IDs leak nothing about other accounts.
    pub async fn get_statement_operation(
        &self,
        user_id: UserId,
        statement_id: StatementId,
    ) -> Result<Statement, AppError> {
        self.users
            .get_user(user_id)
            .await?
            .ok_or(AppError::UserNotFound(user_id))?;

        let statement = self
            .statements
            .get_statement(statement_id)
            .await?
            .ok_or(AppError::StatementNotFound(statement_id))?;

        if statement.user_id != user_id {
            return Err(AppError::StatementNotFound(statement_id));
        }

        Ok(statement)
    }
}
