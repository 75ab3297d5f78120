/// Recommendation orchestration: candidate collection, filtering, ranking
use super::error::RecommendError;
use super::prereq;
use super::types::*;
use super::year;
use crate::catalog::{
    normalize_code, Catalogs, Course, GroupKind, RequirementEntry, Semester, StudentYear,
};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::sync::Arc;
use tracing::warn;

/// Sort position for candidates whose level cannot be parsed.
const UNKNOWN_LEVEL: u8 = 5;

/// Group-name keywords that mark a focus area / concentration.
const FOCUS_KEYWORDS: [&str; 4] = ["focus", "concentration", "track", "specialization"];

/// The rule-based course recommendation engine.
///
/// Stateless per request: every call is an independent computation over the
/// immutable catalogs, so any number of requests may run concurrently.
pub struct Recommender {
    catalogs: Arc<Catalogs>,
}

/// One surviving candidate with everything the ranking needs.
struct Candidate<'a> {
    course: &'a Course,
    required: bool,
    met: bool,
    missing: Vec<String>,
    semester: Option<Semester>,
    level: u8,
    postreq_count: usize,
}

impl Recommender {
    /// Creates an engine over the given catalogs.
    pub fn new(catalogs: Arc<Catalogs>) -> Self {
        Self { catalogs }
    }

    /// Gets the underlying catalogs.
    pub fn catalogs(&self) -> &Catalogs {
        &self.catalogs
    }

    /// Generates course recommendations for a student.
    ///
    /// # Arguments
    /// * `major_name` - Name of the major (must exist in the catalog)
    /// * `completed_courses` - Completed course identifiers, any casing
    /// * `options` - Result count, plan/locked/advanced knobs
    ///
    /// # Returns
    /// * `Ok(RecommendationResult)` - Ranked recommendations with progress
    /// * `Err(RecommendError::MajorNotFound)` - If the major is unrecognized
    pub fn recommend(
        &self,
        major_name: &str,
        completed_courses: &[String],
        options: &RecommendOptions,
    ) -> Result<RecommendationResult, RecommendError> {
        // Malformed entries (empty after trimming) are dropped, not fatal.
        let completed: HashSet<String> = completed_courses
            .iter()
            .filter_map(|c| normalize_code(c))
            .collect();

        let major = self
            .catalogs
            .major(major_name)
            .ok_or_else(|| RecommendError::MajorNotFound {
                name: major_name.to_string(),
            })?;

        let student_year = year::classify(&completed, self.catalogs.milestones_for(major_name));
        let sequence = major.sample_sequence.as_ref();

        // Identifiers appearing in any required group, used both for the
        // ranking and to decide which completed courses count as progress.
        let required_codes: HashSet<&str> = major
            .groups
            .iter()
            .filter(|g| g.kind == GroupKind::Required)
            .flat_map(|g| g.entries.iter())
            .flat_map(|e| e.course_ids())
            .map(String::as_str)
            .collect();

        let mut candidates = Vec::new();
        let mut seen: HashSet<&str> = HashSet::new();

        for group in &major.groups {
            for entry in &group.entries {
                for code in entry.course_ids() {
                    if completed.contains(code) || !seen.insert(code.as_str()) {
                        continue;
                    }

                    let Some(course) = self.catalogs.course(code) else {
                        // Dangling reference in the major data; skip the
                        // candidate rather than aborting the request.
                        warn!(
                            "Major '{}' references unknown course '{}'",
                            major.major_name, code
                        );
                        continue;
                    };

                    let evaluation = prereq::evaluate(course.prerequisite.as_ref(), &completed);
                    if !evaluation.satisfied && !options.include_locked {
                        continue;
                    }

                    let semester =
                        sequence.and_then(|seq| seq.semester_of(student_year, &course.identifier));

                    candidates.push(Candidate {
                        course,
                        required: required_codes.contains(code.as_str()),
                        met: evaluation.satisfied,
                        missing: evaluation.missing,
                        semester,
                        level: course.level().unwrap_or(UNKNOWN_LEVEL),
                        postreq_count: course.postrequisites.len(),
                    });
                }
            }
        }

        // Eligible first, then sequence-aligned, required, lower level,
        // higher downstream impact; identifier order makes ties deterministic.
        candidates.sort_by(|a, b| {
            (
                !a.met,
                a.semester.is_none(),
                !a.required,
                a.level,
                Reverse(a.postreq_count),
                a.course.identifier.as_str(),
            )
                .cmp(&(
                    !b.met,
                    b.semester.is_none(),
                    !b.required,
                    b.level,
                    Reverse(b.postreq_count),
                    b.course.identifier.as_str(),
                ))
        });

        if !options.allow_advanced {
            let ceiling = student_year.index() + 2;
            candidates.retain(|c| c.level <= ceiling || c.level == UNKNOWN_LEVEL);
        }

        candidates.truncate(options.max_results);

        let recommendations: Vec<Recommendation> = candidates
            .iter()
            .map(|c| self.build_recommendation(c, &major.major_name))
            .collect();

        let progress = compute_progress(major, &completed);

        let semester_plan = if options.include_semester_plan && sequence.is_some() {
            Some(self.build_semester_plan(&recommendations, student_year))
        } else {
            None
        };

        Ok(RecommendationResult {
            recommendations,
            progress,
            semester_plan,
            student_year,
        })
    }

    /// Splits a major's courses into required/elective/focus-area buckets.
    pub fn major_courses(&self, major_name: &str) -> Result<MajorCourses, RecommendError> {
        let major = self
            .catalogs
            .major(major_name)
            .ok_or_else(|| RecommendError::MajorNotFound {
                name: major_name.to_string(),
            })?;

        let mut result = MajorCourses {
            required: Vec::new(),
            electives: Vec::new(),
            focus_areas: Vec::new(),
        };

        for group in &major.groups {
            let summaries = self.summarize_group(group.entries.iter());

            let group_name = group.name.as_deref().unwrap_or("");
            let lowered = group_name.to_lowercase();
            if FOCUS_KEYWORDS.iter().any(|k| lowered.contains(k)) {
                result.focus_areas.push(FocusArea {
                    name: group_name.to_string(),
                    courses: summaries,
                });
            } else if group.kind == GroupKind::Required {
                result.required.extend(summaries);
            } else {
                result.electives.extend(summaries);
            }
        }

        Ok(result)
    }

    fn summarize_group<'a>(
        &self,
        entries: impl Iterator<Item = &'a RequirementEntry>,
    ) -> Vec<CourseSummary> {
        entries
            .flat_map(|e| e.course_ids())
            .filter_map(|code| {
                let Some(course) = self.catalogs.course(code) else {
                    warn!("Skipping unknown course '{}' in major listing", code);
                    return None;
                };
                Some(CourseSummary {
                    course: course.identifier.clone(),
                    name: course.name.clone(),
                    credits: course.credits_display(),
                })
            })
            .collect()
    }

    fn build_recommendation(&self, candidate: &Candidate<'_>, major_name: &str) -> Recommendation {
        let reason = if !candidate.met {
            format!(
                "Missing prerequisites: {}",
                candidate.missing.join(", ")
            )
        } else if let Some(semester) = candidate.semester {
            format!(
                "Recommended for {} semester (sample sequence)",
                semester.label()
            )
        } else if candidate.required {
            format!("Required for the {major_name} major")
        } else if candidate.postreq_count > 0 {
            format!(
                "Prerequisite for {} advanced course(s)",
                candidate.postreq_count
            )
        } else {
            "Elective course".to_string()
        };

        Recommendation {
            course: candidate.course.identifier.clone(),
            name: candidate.course.name.clone(),
            credits: candidate.course.credits_display(),
            reason,
            prerequisites_met: candidate.met,
            missing_prerequisites: candidate.missing.clone(),
            sequence_aligned: candidate.semester.is_some(),
            semester: candidate.semester,
        }
    }

    fn build_semester_plan(
        &self,
        recommendations: &[Recommendation],
        student_year: StudentYear,
    ) -> SemesterPlan {
        SemesterPlan {
            fall: self.build_bucket(recommendations, Some(Semester::Fall)),
            spring: self.build_bucket(recommendations, Some(Semester::Spring)),
            other: self.build_bucket(recommendations, None),
            student_year,
        }
    }

    fn build_bucket(
        &self,
        recommendations: &[Recommendation],
        semester: Option<Semester>,
    ) -> SemesterBucket {
        let courses: Vec<Recommendation> = recommendations
            .iter()
            .filter(|r| r.semester == semester)
            .cloned()
            .collect();

        let total_credits = courses
            .iter()
            .filter_map(|r| self.catalogs.course(&r.course))
            .map(|c| c.credits_min)
            .sum();

        SemesterBucket {
            courses,
            total_credits,
        }
    }
}

/// Degree progress over required entries only.
///
/// A choice entry counts once (satisfied by any option); a sequence entry
/// counts each member. Elective pools stay out of the denominator.
fn compute_progress(
    major: &crate::catalog::MajorRequirements,
    completed: &HashSet<String>,
) -> Progress {
    let mut total = 0usize;
    let mut done = 0usize;

    for group in &major.groups {
        if group.kind != GroupKind::Required {
            continue;
        }
        for entry in &group.entries {
            match entry {
                RequirementEntry::Course { course } => {
                    total += 1;
                    if completed.contains(course) {
                        done += 1;
                    }
                }
                RequirementEntry::Choice { choice } => {
                    if choice.is_empty() {
                        continue;
                    }
                    total += 1;
                    if choice.iter().any(|c| completed.contains(c)) {
                        done += 1;
                    }
                }
                RequirementEntry::Sequence { sequence } => {
                    total += sequence.len();
                    done += sequence.iter().filter(|c| completed.contains(*c)).count();
                }
            }
        }
    }

    let percentage = if total > 0 {
        done as f32 / total as f32 * 100.0
    } else {
        0.0
    };

    Progress {
        completed: done,
        total,
        percentage,
    }
}
