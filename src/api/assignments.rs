use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::validate_id;
use super::{ApiError, AppState};
use crate::models::{AssignmentRecord, DeadlineFilter};

/// `GET /getmyassignment/{group_id}`
pub async fn get_my_assignments(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<AssignmentRecord>>, ApiError> {
    let group_id = validate_id("group_id", &group_id)?;
    let assignments = state
        .portal_service()
        .assignments_with_content(group_id, DeadlineFilter::All)
        .await;
    Ok(Json(assignments))
}

/// `GET /getmyassignment-deadline/{group_id}`
///
/// Only assignments whose deadline has not passed, or that have none.
pub async fn get_my_open_assignments(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
) -> Result<Json<Vec<AssignmentRecord>>, ApiError> {
    let group_id = validate_id("group_id", &group_id)?;
    let assignments = state
        .portal_service()
        .assignments_with_content(group_id, DeadlineFilter::Open)
        .await;
    Ok(Json(assignments))
}
