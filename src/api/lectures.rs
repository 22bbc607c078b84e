use axum::{
    Json,
    extract::{Path, State},
};
use std::sync::Arc;

use super::validation::validate_id;
use super::{ApiError, AppState};
use crate::models::{AssignedVideos, VideoRecord};

/// `GET /getlecturedata/{service_id}`
pub async fn get_lecture_data(
    State(state): State<Arc<AppState>>,
    Path(service_id): Path<String>,
) -> Result<Json<Option<Vec<VideoRecord>>>, ApiError> {
    let service_id = validate_id("service_id", &service_id)?;
    let videos = state.portal_service().lectures(service_id).await;
    Ok(Json(videos.into_option()))
}

/// `GET /getmylecture/{group_id}`
///
/// Answers `{"video_id": null}` when nothing has been distributed to the group.
pub async fn get_my_lecture(
    State(state): State<Arc<AppState>>,
    Path(group_id): Path<String>,
) -> Result<Json<Option<AssignedVideos>>, ApiError> {
    let group_id = validate_id("group_id", &group_id)?;
    let videos = state.portal_service().assigned_videos(group_id).await;
    Ok(Json(videos.into_option()))
}
