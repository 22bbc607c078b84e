//! Services, statuses and a user's registrations.

use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::validate_id;
use super::{ApiError, AppState};
use crate::models::{RegistrationWithStatus, ServiceRecord, StatusWithService};

/// `GET /getservice/{service_id}`
pub async fn get_service(
    State(state): State<Arc<AppState>>,
    Path(service_id): Path<String>,
) -> Result<Json<Option<ServiceRecord>>, ApiError> {
    let service_id = validate_id("service_id", &service_id)?;
    let service = state.portal_service().service(service_id).await;
    Ok(Json(service.into_option()))
}

/// `GET /getstatus/{status_id}`
///
/// The status joined with its service's name, or `null`.
pub async fn get_status(
    State(state): State<Arc<AppState>>,
    Path(status_id): Path<String>,
) -> Result<Json<Option<StatusWithService>>, ApiError> {
    let status_id = validate_id("status_id", &status_id)?;
    let status = state.portal_service().status_with_service(status_id).await;
    Ok(Json(status.into_option()))
}

/// `GET /getuserstatus/{user_id}`
pub async fn get_user_status(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<String>,
) -> Result<Json<Option<Vec<RegistrationWithStatus>>>, ApiError> {
    let user_id = validate_id("user_id", &user_id)?;
    let registrations = state.portal_service().user_registrations(user_id).await;
    Ok(Json(registrations.into_option()))
}
