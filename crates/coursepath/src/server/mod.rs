use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;

use crate::server::endpoints::{catalog, recommend, status};
use crate::types::AppState;

mod endpoints;
mod types;

/// Creates a router that can be used by `axum`.
///
/// # Parameters
/// - `app_state`: The app server state.
///
/// # Returns
/// The router.
pub fn create_router(app_state: Arc<AppState>) -> Router {
    // Catalog browsing endpoints
    let catalog_router = Router::new()
        .route("/majors", get(catalog::get_majors))
        .route("/majors/:major_name/courses", get(catalog::get_major_courses))
        .route("/courses/:course_code", get(catalog::get_course))
        .route(
            "/courses/:course_code/prerequisites",
            get(catalog::get_course_prerequisites),
        );

    Router::new()
        .route("/health", get(status::get_health))
        .route("/recommend", post(recommend::post_recommend))
        .merge(catalog_router)
        .with_state(app_state)
}
