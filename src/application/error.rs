use thiserror::Error;

use crate::domain::{Cents, StatementId, UserId};

#[derive(Error, Debug)]
pub enum AppError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Email already registered: {0}")]
    EmailAlreadyRegistered(String),

    #[error("Statement not found: {0}")]
    StatementNotFound(StatementId),

    #[error("Insufficient funds: balance {balance}, requested {requested}")]
    InsufficientFunds { balance: Cents, requested: Cents },

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Incorrect email or password")]
    IncorrectEmailOrPassword,

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}
