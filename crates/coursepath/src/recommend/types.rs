/// Output types for the recommendation engine
use crate::catalog::{Semester, StudentYear};
use serde::{Deserialize, Serialize};

/// Caller-tunable knobs for a recommendation request.
#[derive(Debug, Clone)]
pub struct RecommendOptions {
    /// Maximum number of recommendations to return
    pub max_results: usize,
    /// Whether to partition results into a fall/spring plan
    pub include_semester_plan: bool,
    /// Surface "almost eligible" courses whose prerequisites are unmet
    pub include_locked: bool,
    /// Disable the level-appropriateness filter
    pub allow_advanced: bool,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            max_results: 5,
            include_semester_plan: true,
            include_locked: false,
            allow_advanced: false,
        }
    }
}

/// The single canonical recommendation record.
///
/// Every code path produces this exact shape; the presentation layer never
/// has to branch on alternative field names.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub course: String,
    pub name: String,
    /// Display credit value, e.g. "3" or "3-4"
    pub credits: String,
    pub reason: String,
    pub prerequisites_met: bool,
    pub missing_prerequisites: Vec<String>,
    pub sequence_aligned: bool,
    pub semester: Option<Semester>,
}

/// Degree progress over a major's required (non-elective) courses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percentage: f32,
}

/// One semester bucket of a plan: ordered courses plus summed credit hours.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SemesterBucket {
    pub courses: Vec<Recommendation>,
    pub total_credits: f32,
}

/// Recommendations partitioned by sample-sequence placement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterPlan {
    pub fall: SemesterBucket,
    pub spring: SemesterBucket,
    /// Courses not placed in the classified year's sequence
    pub other: SemesterBucket,
    pub student_year: StudentYear,
}

/// Full result of one recommendation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommendations: Vec<Recommendation>,
    pub progress: Progress,
    pub semester_plan: Option<SemesterPlan>,
    pub student_year: StudentYear,
}

/// Summary of one course for major course listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseSummary {
    pub course: String,
    pub name: String,
    pub credits: String,
}

/// A named focus area (concentration/track) within a major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusArea {
    pub name: String,
    pub courses: Vec<CourseSummary>,
}

/// A major's courses split into required, elective, and focus-area buckets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorCourses {
    pub required: Vec<CourseSummary>,
    pub electives: Vec<CourseSummary>,
    pub focus_areas: Vec<FocusArea>,
}
