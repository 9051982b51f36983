use std::sync::Arc;

use crate::auth::{PasswordHasher, TokenIssuer};
use crate::domain::{User, UserId};
use crate::storage::UserRepository;

use super::AppError;

/// Account registration, authentication and profile lookup.
///
/// Password hashing and token issuance are pluggable capabilities; this
/// service never sees hashing algorithms or token formats directly.
pub struct AccountService {
    users: Arc<dyn UserRepository>,
    hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

/// Result of a successful authentication.
pub struct AuthenticatedUser {
    pub user: User,
    pub token: String,
}

impl AccountService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// Register a new user. The email must not already be registered.
    pub async fn create_user(
        &self,
        name: impl Into<String>,
        email: impl Into<String>,
        password: &str,
    ) -> Result<User, AppError> {
        let email = email.into();
        if self.users.get_user_by_email(&email).await?.is_some() {
            return Err(AppError::EmailAlreadyRegistered(email));
        }

        let password_hash = self.hasher.hash(password)?;
        let user = User::new(name, email, password_hash);
        self.users.save_user(&user).await?;

        tracing::info!(user_id = %user.id, "user created");

        Ok(user)
    }

    /// Authenticate by email and password, issuing an access token.
    ///
    /// Unknown email and wrong password map to the same error so a caller
    /// cannot probe which addresses are registered.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<AuthenticatedUser, AppError> {
        let user = self
            .users
            .get_user_by_email(email)
            .await?
            .ok_or(AppError::IncorrectEmailOrPassword)?;

        if !self.hasher.verify(password, &user.password)? {
            return Err(AppError::IncorrectEmailOrPassword);
        }

        let token = self.tokens.issue(&user)?;

        Ok(AuthenticatedUser { user, token })
    }

    /// Fetch a user's profile by ID.
    pub async fn show_profile(&self, user_id: UserId) -> Result<User, AppError> {
        self.users
            .get_user(user_id)
            .await?
            .ok_or(AppError::UserNotFound(user_id))
    }
}
