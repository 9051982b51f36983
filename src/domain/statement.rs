use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cents, UserId};

pub type StatementId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    /// Money entering the user's balance
    Deposit,
    /// Money leaving the user's balance
    Withdraw,
}

impl OperationType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Deposit => "deposit",
            OperationType::Withdraw => "withdraw",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "deposit" => Some(OperationType::Deposit),
            "withdraw" => Some(OperationType::Withdraw),
            _ => None,
        }
    }
}

impl std::fmt::Display for OperationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A statement records one deposit or withdrawal against a user's balance.
/// Statements are immutable - there is no update or delete; corrections are
/// made by recording further operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Statement {
    pub id: StatementId,
    /// Monotonically increasing sequence number for ordering
    pub sequence: i64,
    /// Owning user (lookup key, not lifecycle ownership)
    pub user_id: UserId,
    pub operation: OperationType,
    /// Amount in cents (never negative)
    pub amount_cents: Cents,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

impl Statement {
    /// Create a new statement. Sequence number must be assigned by the repository.
    pub fn new(
        user_id: UserId,
        operation: OperationType,
        amount_cents: Cents,
        description: impl Into<String>,
    ) -> Self {
        assert!(amount_cents >= 0, "Statement amount must not be negative");
        Self {
            id: Uuid::new_v4(),
            sequence: 0, // Will be set by repository
            user_id,
            operation,
            amount_cents,
            description: description.into(),
            created_at: Utc::now(),
        }
    }

    pub fn is_deposit(&self) -> bool {
        self.operation == OperationType::Deposit
    }

    /// Signed effect of this statement on the owner's balance.
    pub fn signed_amount(&self) -> Cents {
        match self.operation {
            OperationType::Deposit => self.amount_cents,
            OperationType::Withdraw => -self.amount_cents,
        }
    }
}
