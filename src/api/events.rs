use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::validation::validate_id;
use super::{ApiError, AppState};
use crate::models::DeadlineFilter;

/// `GET /geteventdate/{id}`
///
/// Deployed clients read open assignments of group `id` from this route, so
/// that is what it serves unless `compat.event_route_serves_assignments` is
/// turned off. Then `id` is a service id and the service's calendar entries
/// are returned.
pub async fn get_event_date(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let id = validate_id("id", &id)?;

    if state.config().compat.event_route_serves_assignments {
        let assignments = state
            .portal_service()
            .assignments_with_content(id, DeadlineFilter::Open)
            .await;
        return Ok(Json(assignments).into_response());
    }

    let events = state.portal_service().events(id).await;
    Ok(Json(events.into_option()).into_response())
}
