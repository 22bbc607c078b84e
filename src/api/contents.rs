use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::validate_id;
use super::{ApiError, AppState};
use crate::models::ContentRecord;

/// `GET /getcontents/{service_id}`
///
/// Durations are whole minutes, rounded up.
pub async fn get_contents(
    State(state): State<Arc<AppState>>,
    Path(service_id): Path<String>,
) -> Result<Json<Option<Vec<ContentRecord>>>, ApiError> {
    let service_id = validate_id("service_id", &service_id)?;
    let contents = state.portal_service().contents(service_id).await;
    Ok(Json(contents.into_option()))
}
