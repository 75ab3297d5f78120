/// Types for course and major catalog data
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::LazyLock;

static CODE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Z]{2,4})\s*([0-9]{3}[A-Z]?)$").unwrap());

static LEVEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2,4}\s*([0-9])[0-9]{2}[A-Z]?$").unwrap());

/// Normalizes a course identifier to the canonical "DEPT 123" form.
///
/// Uppercases the department code and inserts a single space before the
/// course number (e.g. "cs124" -> "CS 124"). Identifiers that do not match
/// the expected shape are passed through uppercased rather than rejected,
/// so unknown codes simply fail to match anything in the catalog.
///
/// Returns `None` only for entries that are empty after trimming.
pub fn normalize_code(raw: &str) -> Option<String> {
    let cleaned = raw.trim().to_uppercase();
    if cleaned.is_empty() {
        return None;
    }

    match CODE_RE.captures(&cleaned) {
        Some(caps) => Some(format!("{} {}", &caps[1], &caps[2])),
        None => Some(cleaned),
    }
}

/// Extracts the course level (leading digit of the course number).
///
/// "CS 124" -> 1, "CS 374" -> 3. Returns `None` for identifiers whose
/// number cannot be parsed.
pub fn course_level(code: &str) -> Option<u8> {
    LEVEL_RE
        .captures(code)
        .and_then(|caps| caps[1].parse::<u8>().ok())
}

/// A prerequisite expression attached to a course.
///
/// The wire format is either a single requirement unit
/// (`{"course": "CS 124"}` or `{"any_of": ["CS 124", "CS 125"]}`) or a JSON
/// array of units, which is satisfied only when every unit is satisfied.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrereqExpr {
    /// A single required course.
    Course { course: String },
    /// An OR-group: any one member satisfies the requirement.
    AnyOf { any_of: Vec<String> },
    /// AND of the contained units.
    All(Vec<PrereqExpr>),
}

/// An immutable course record from the course catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Canonical identifier, e.g. "CS 225"
    pub identifier: String,
    pub name: String,
    #[serde(default)]
    pub credits_min: f32,
    #[serde(default)]
    pub credits_max: f32,
    #[serde(default)]
    pub prerequisite: Option<PrereqExpr>,
    /// Courses that list this one as a prerequisite (precomputed reverse edge)
    #[serde(default)]
    pub postrequisites: Vec<String>,
}

impl Course {
    /// Level (leading digit) of this course's number, if parseable.
    pub fn level(&self) -> Option<u8> {
        course_level(&self.identifier)
    }

    /// Human-readable credit value, e.g. "3" or "3-4".
    pub fn credits_display(&self) -> String {
        if (self.credits_max - self.credits_min).abs() < f32::EPSILON {
            fmt_credits(self.credits_min)
        } else {
            format!(
                "{}-{}",
                fmt_credits(self.credits_min),
                fmt_credits(self.credits_max)
            )
        }
    }
}

/// Formats a credit value without a trailing ".0" for whole numbers.
pub fn fmt_credits(value: f32) -> String {
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}

/// Whether a requirement group is mandatory or an elective pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupKind {
    Required,
    Elective,
}

/// A single entry inside a requirement group.
///
/// `Choice` means "pick exactly one of these options"; `Sequence` means
/// "all of these are taken together" (e.g. a lecture + lab pair). The two
/// are distinct variants so intent never has to be inferred from field
/// presence at read time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequirementEntry {
    Course { course: String },
    Choice { choice: Vec<String> },
    Sequence { sequence: Vec<String> },
}

impl RequirementEntry {
    /// All course identifiers this entry can contribute as candidates.
    pub fn course_ids(&self) -> &[String] {
        match self {
            RequirementEntry::Course { course } => std::slice::from_ref(course),
            RequirementEntry::Choice { choice } => choice,
            RequirementEntry::Sequence { sequence } => sequence,
        }
    }
}

/// A group of requirement entries within a major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequirementGroup {
    pub kind: GroupKind,
    /// Display name of the group, e.g. "Core Curriculum" or "Systems Track"
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub entries: Vec<RequirementEntry>,
}

/// Coarse academic-year bucket inferred from completed courses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StudentYear {
    FirstYear,
    SecondYear,
    ThirdYear,
    FourthYear,
}

impl StudentYear {
    /// 1-based year index (first_year -> 1, fourth_year -> 4).
    pub fn index(self) -> u8 {
        match self {
            StudentYear::FirstYear => 1,
            StudentYear::SecondYear => 2,
            StudentYear::ThirdYear => 3,
            StudentYear::FourthYear => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            StudentYear::FirstYear => "first_year",
            StudentYear::SecondYear => "second_year",
            StudentYear::ThirdYear => "third_year",
            StudentYear::FourthYear => "fourth_year",
        }
    }
}

impl std::fmt::Display for StudentYear {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Semester {
    Fall,
    Spring,
}

impl Semester {
    pub fn as_str(self) -> &'static str {
        match self {
            Semester::Fall => "fall",
            Semester::Spring => "spring",
        }
    }

    /// Capitalized label for display text.
    pub fn label(self) -> &'static str {
        match self {
            Semester::Fall => "Fall",
            Semester::Spring => "Spring",
        }
    }
}

impl std::fmt::Display for Semester {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One (course, credits) slot in a sample sequence semester.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SequenceSlot {
    pub course: String,
    #[serde(default)]
    pub credits: f32,
}

/// The fall/spring course lists for one year of a sample sequence.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct YearPlan {
    #[serde(default)]
    pub fall: Vec<SequenceSlot>,
    #[serde(default)]
    pub spring: Vec<SequenceSlot>,
}

/// An official 4-year x 2-semester sample plan for a major.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SampleSequence(pub HashMap<StudentYear, YearPlan>);

impl SampleSequence {
    pub fn year(&self, year: StudentYear) -> Option<&YearPlan> {
        self.0.get(&year)
    }

    /// Which semester of the given year a course is placed in, if any.
    pub fn semester_of(&self, year: StudentYear, code: &str) -> Option<Semester> {
        let plan = self.year(year)?;
        let matches = |slot: &SequenceSlot| {
            normalize_code(&slot.course).as_deref() == Some(code)
        };

        if plan.fall.iter().any(matches) {
            Some(Semester::Fall)
        } else if plan.spring.iter().any(matches) {
            Some(Semester::Spring)
        } else {
            None
        }
    }

    /// True if the course appears anywhere in the given year's plan.
    pub fn contains(&self, year: StudentYear, code: &str) -> bool {
        self.semester_of(year, code).is_some()
    }
}

/// The full requirement set for one major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MajorRequirements {
    pub major_name: String,
    #[serde(default)]
    pub groups: Vec<RequirementGroup>,
    #[serde(default)]
    pub sample_sequence: Option<SampleSequence>,
}
