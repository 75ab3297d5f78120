/// Shared response types for the API server
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// JSON error envelope returned by every failing endpoint.
pub struct ApiErrorType {
    pub status: StatusCode,
    pub error: String,
    pub detail: Option<String>,
}

impl From<(StatusCode, &str, Option<String>)> for ApiErrorType {
    fn from((status, error, detail): (StatusCode, &str, Option<String>)) -> Self {
        Self {
            status,
            error: error.to_string(),
            detail,
        }
    }
}

impl From<(StatusCode, &str)> for ApiErrorType {
    fn from((status, error): (StatusCode, &str)) -> Self {
        Self {
            status,
            error: error.to_string(),
            detail: None,
        }
    }
}

impl IntoResponse for ApiErrorType {
    fn into_response(self) -> Response {
        (
            self.status,
            Json(json!({
                "error": self.error,
                "detail": self.detail,
            })),
        )
            .into_response()
    }
}
