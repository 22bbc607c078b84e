use axum::{Json, extract::State};
use std::sync::Arc;

use super::validation::validate_id;
use super::{ApiError, AppState, MyGroupRequest};
use crate::shaping::GroupSummary;

/// `POST /mygroup`
///
/// The groups the user belongs to within a service, each listing the other
/// members' names. `null` when the user shares no group with anyone.
pub async fn my_groups(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<MyGroupRequest>,
) -> Result<Json<Option<Vec<GroupSummary>>>, ApiError> {
    let user_id = validate_id("user_id", &payload.user_id)?;
    let service_id = validate_id("service_id", &payload.service_id)?;

    let groups = state.portal_service().my_groups(service_id, user_id).await;
    Ok(Json(groups.into_option()))
}
