//! Domain service for authentication and account registration.

use thiserror::Error;

use crate::models::{NewUser, RegistrationOutcome, UserProfile};

/// Errors specific to authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Password hashing failed: {0}")]
    Hashing(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<sea_orm::DbErr> for AuthError {
    fn from(err: sea_orm::DbErr) -> Self {
        Self::Database(err.to_string())
    }
}

/// Domain service trait for authentication.
#[async_trait::async_trait]
pub trait AuthService: Send + Sync {
    /// Verifies credentials and returns the user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::InvalidCredentials`] for an unknown email, a wrong
    /// password, or an unreadable stored hash.
    async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AuthError>;

    /// Creates a new account.
    ///
    /// A duplicate email is not an error: it yields an outcome without a
    /// `user_id`. So does any other database failure during the insert.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Validation`] for missing fields and
    /// [`AuthError::Hashing`] if the password cannot be hashed.
    async fn register(&self, user: NewUser) -> Result<RegistrationOutcome, AuthError>;
}

pub(crate) fn validate_new_user(user: &NewUser) -> Result<(), AuthError> {
    if user.email.trim().is_empty() {
        return Err(AuthError::Validation("Email is required".to_string()));
    }
    if user.password.is_empty() {
        return Err(AuthError::Validation("Password is required".to_string()));
    }
    Ok(())
}
