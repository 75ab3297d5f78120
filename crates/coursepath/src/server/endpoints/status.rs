use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;

use crate::types::AppState;

/// GET /health
///
/// Basic liveness probe with catalog counts.
pub async fn get_health(State(s): State<Arc<AppState>>) -> Response {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "courses": s.catalogs.course_count(),
            "majors": s.catalogs.major_count(),
        })),
    )
        .into_response()
}
