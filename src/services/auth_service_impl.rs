//! `SeaORM` implementation of the `AuthService` trait.

use async_trait::async_trait;
use sea_orm::SqlErr;
use tokio::task;
use tracing::{error, info, warn};

use crate::config::SecurityConfig;
use crate::db::Store;
use crate::entities::users;
use crate::models::{NewUser, RegistrationOutcome, UserProfile};
use crate::services::auth_service::{AuthError, AuthService, validate_new_user};
use crate::services::password::{hash_password, verify_password};

pub struct SeaOrmAuthService {
    store: Store,
    security: SecurityConfig,
}

impl SeaOrmAuthService {
    #[must_use]
    pub const fn new(store: Store, security: SecurityConfig) -> Self {
        Self { store, security }
    }
}

#[async_trait]
impl AuthService for SeaOrmAuthService {
    async fn login(&self, email: &str, password: &str) -> Result<UserProfile, AuthError> {
        let Some(stored_hash) = self.store.get_password_hash(email).await? else {
            info!("Login failed: no user for the given email");
            return Err(AuthError::InvalidCredentials);
        };

        let password = password.to_string();
        let verified = task::spawn_blocking(move || verify_password(&password, &stored_hash))
            .await
            .map_err(|e| AuthError::Internal(format!("Password verification task panicked: {e}")))?;

        match verified {
            Ok(true) => {}
            Ok(false) => {
                info!("Login failed: wrong password");
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => {
                warn!("Login failed: {e}");
                return Err(AuthError::InvalidCredentials);
            }
        }

        let user = self
            .store
            .get_user_by_email(email)
            .await?
            .ok_or(AuthError::InvalidCredentials)?;

        info!(user_id = %user.user_id, "Authentication successful");
        Ok(UserProfile::from(user))
    }

    async fn register(&self, user: NewUser) -> Result<RegistrationOutcome, AuthError> {
        validate_new_user(&user)?;

        let password = user.password.clone();
        let security = self.security.clone();
        let password_hash = task::spawn_blocking(move || hash_password(&password, &security))
            .await
            .map_err(|e| AuthError::Internal(format!("Password hashing task panicked: {e}")))??;

        let user_id = uuid::Uuid::new_v4().to_string();
        let email = user.email.clone();

        let model = users::Model {
            user_id: user_id.clone(),
            last_name: user.last_name,
            first_name: user.first_name,
            last_name_kana: user.last_name_kana,
            first_name_kana: user.first_name_kana,
            email: user.email,
            phone_number: user.phone_number,
            password_hash,
        };

        match self.store.insert_user(model).await {
            Ok(()) => {
                info!(%user_id, "User registered");
                Ok(RegistrationOutcome::registered(user_id))
            }
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                info!("Registration rejected: {email} is already registered");
                Ok(RegistrationOutcome::already_registered(&email))
            }
            Err(e) => {
                // Clients only ever see the duplicate-email message.
                error!("Registration failed for {email}: {e}");
                Ok(RegistrationOutcome::already_registered(&email))
            }
        }
    }
}
