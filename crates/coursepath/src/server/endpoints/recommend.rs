//! The recommendation endpoint.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

use crate::recommend::{RecommendError, RecommendOptions};
use crate::server::types::ApiErrorType;
use crate::types::AppState;

/// Bounds for the requested result count.
const MIN_RESULTS: usize = 1;
const MAX_RESULTS: usize = 20;

/// Request body for POST /recommend.
#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    pub major_name: String,
    #[serde(default)]
    pub completed_courses: Vec<String>,
    #[serde(default = "default_max_results")]
    pub max_results: usize,
    #[serde(default = "default_true")]
    pub include_semester_plan: bool,
    /// Surface courses whose prerequisites are not yet met
    #[serde(default)]
    pub include_locked: bool,
    /// Do not suppress courses above the student's level
    #[serde(default)]
    pub allow_advanced: bool,
}

fn default_max_results() -> usize {
    5
}

fn default_true() -> bool {
    true
}

/// POST /recommend
///
/// Returns ranked course recommendations for a major and completed-course
/// set, with degree progress and an optional semester plan.
pub async fn post_recommend(
    State(s): State<Arc<AppState>>,
    Json(body): Json<RecommendRequest>,
) -> Response {
    info!(
        "POST /recommend - major='{}', {} completed courses, max_results={}",
        body.major_name,
        body.completed_courses.len(),
        body.max_results
    );

    if !(MIN_RESULTS..=MAX_RESULTS).contains(&body.max_results) {
        return ApiErrorType::from((
            StatusCode::BAD_REQUEST,
            "Invalid request",
            Some(format!(
                "max_results must be between {MIN_RESULTS} and {MAX_RESULTS}"
            )),
        ))
        .into_response();
    }

    let options = RecommendOptions {
        max_results: body.max_results,
        include_semester_plan: body.include_semester_plan,
        include_locked: body.include_locked,
        allow_advanced: body.allow_advanced,
    };

    match s
        .recommender
        .recommend(&body.major_name, &body.completed_courses, &options)
    {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e @ RecommendError::MajorNotFound { .. }) => {
            ApiErrorType::from((StatusCode::NOT_FOUND, "Major not found", Some(e.to_string())))
                .into_response()
        }
        Err(e) => {
            error!("Failed to compute recommendations: {}", e);
            ApiErrorType::from((
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to compute recommendations",
                Some(e.to_string()),
            ))
            .into_response()
        }
    }
}
