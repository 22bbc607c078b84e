//! Liveness and database health endpoints.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::sync::Arc;

use super::{ApiResponse, AppState};

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DatabaseHealthResponse {
    pub status: &'static str,
    pub uptime_seconds: u64,
}

/// `GET /health`
///
/// Never touches the database.
pub async fn health() -> Json<ApiResponse<HealthResponse>> {
    Json(ApiResponse::success(HealthResponse { status: "ok" }))
}

/// `GET /health/db`
///
/// Opens a connection, runs `SELECT 1` and closes it again. Answers 503 when
/// that fails.
pub async fn health_db(State(state): State<Arc<AppState>>) -> Response {
    let uptime_seconds = state.start_time.elapsed().as_secs();

    match state.store().ping().await {
        Ok(()) => Json(ApiResponse::success(DatabaseHealthResponse {
            status: "ok",
            uptime_seconds,
        }))
        .into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "Database health check failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(ApiResponse {
                    success: false,
                    data: Some(DatabaseHealthResponse {
                        status: "unavailable",
                        uptime_seconds,
                    }),
                    error: Some("Database unreachable".to_string()),
                }),
            )
                .into_response()
        }
    }
}
