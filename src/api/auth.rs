use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::{ApiError, AppState, LoginRequest};
use crate::models::{NewUser, RegistrationOutcome};
use crate::services::AuthError;

/// POST /login
///
/// Answers with the user's profile, or `false` when the credentials do not
/// match (or cannot be checked). Blank credentials are simply wrong ones.
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, ApiError> {
    match state
        .auth_service()
        .login(&payload.email, &payload.password)
        .await
    {
        Ok(profile) => Ok(Json(profile).into_response()),
        Err(AuthError::InvalidCredentials) => Ok(Json(false).into_response()),
        Err(AuthError::Database(e)) => {
            tracing::error!("Database error during login: {e}");
            Ok(Json(false).into_response())
        }
        Err(e) => Err(e.into()),
    }
}

/// POST /register
pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewUser>,
) -> Result<Json<RegistrationOutcome>, ApiError> {
    let outcome = state.auth_service().register(payload).await?;
    Ok(Json(outcome))
}
