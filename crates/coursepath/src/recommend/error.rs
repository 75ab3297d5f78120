//! Error types for the recommendation subsystem.

use thiserror::Error;

/// Errors that can occur while computing recommendations.
///
/// Only caller mistakes surface as errors; messy-but-recoverable data
/// (unknown prerequisite references, malformed expressions) is absorbed
/// with permissive defaults inside the engine.
#[derive(Debug, Error, Clone)]
pub enum RecommendError {
    /// The requested major is not in the catalog
    #[error("Major not found: {name}")]
    MajorNotFound { name: String },

    /// The requested course is not in the catalog
    #[error("Course not found: {code}")]
    CourseNotFound { code: String },

    /// The request itself is malformed (e.g. out-of-range result count)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },
}

impl RecommendError {
    /// Returns true if this error maps to a "not found" condition.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RecommendError::MajorNotFound { .. } | RecommendError::CourseNotFound { .. }
        )
    }
}
