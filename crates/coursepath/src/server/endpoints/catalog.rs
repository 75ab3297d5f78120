//! Catalog browsing endpoints: majors, major courses, course details.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::recommend::prereq;
use crate::server::types::ApiErrorType;
use crate::types::AppState;

/// GET /majors
///
/// Returns the names of all loaded majors.
pub async fn get_majors(State(s): State<Arc<AppState>>) -> Response {
    info!("GET /majors");

    let majors = s.catalogs.major_names();
    (StatusCode::OK, Json(json!({ "majors": majors }))).into_response()
}

/// GET /majors/:major_name/courses
///
/// Returns a major's courses split into required, elective, and
/// focus-area buckets.
pub async fn get_major_courses(
    Path(major_name): Path<String>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /majors/{}/courses", major_name);

    match s.recommender.major_courses(&major_name) {
        Ok(courses) => (StatusCode::OK, Json(courses)).into_response(),
        Err(e) => ApiErrorType::from((
            StatusCode::NOT_FOUND,
            "Major not found",
            Some(e.to_string()),
        ))
        .into_response(),
    }
}

/// GET /courses/:course_code
///
/// Returns the full catalog record for a course.
pub async fn get_course(
    Path(course_code): Path<String>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /courses/{}", course_code);

    match s.catalogs.course(&course_code) {
        Some(course) => (StatusCode::OK, Json(course)).into_response(),
        None => ApiErrorType::from((
            StatusCode::NOT_FOUND,
            "Course not found",
            Some(format!("No course with code: {course_code}")),
        ))
        .into_response(),
    }
}

/// GET /courses/:course_code/prerequisites
///
/// Returns a course's prerequisite expression plus whether it is open to a
/// student with no completed courses.
pub async fn get_course_prerequisites(
    Path(course_code): Path<String>,
    State(s): State<Arc<AppState>>,
) -> Response {
    info!("GET /courses/{}/prerequisites", course_code);

    let Some(course) = s.catalogs.course(&course_code) else {
        return ApiErrorType::from((
            StatusCode::NOT_FOUND,
            "Course not found",
            Some(format!("No course with code: {course_code}")),
        ))
        .into_response();
    };

    let from_scratch = prereq::evaluate(course.prerequisite.as_ref(), &Default::default());

    (
        StatusCode::OK,
        Json(json!({
            "course": course.identifier,
            "prerequisite": course.prerequisite,
            "open_to_new_students": from_scratch.satisfied,
            "missing_for_new_students": from_scratch.missing,
        })),
    )
        .into_response()
}
