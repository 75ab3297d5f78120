/// Catalog loading and lookup for course and major data
mod milestones;
mod types;

pub use milestones::{MilestoneSettings, MilestoneTiers};
pub use types::*;

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading catalog data.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Data directory not found: {0}")]
    MissingDataDir(PathBuf),

    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// The immutable lookup context for one loaded data set.
///
/// Holds both catalogs plus the year-classifier milestone configuration.
/// Loaded once at startup and shared read-only across requests; the engine
/// takes this as an explicit value rather than reaching for global state.
pub struct Catalogs {
    courses: HashMap<String, Course>,
    majors: HashMap<String, MajorRequirements>,
    milestones: MilestoneSettings,
}

impl Catalogs {
    /// Builds the lookup context from already-deserialized records.
    ///
    /// Identifiers are normalized on the way in: course identifiers and
    /// postrequisite lists, and every course reference inside requirement
    /// groups. Courses with an empty identifier are dropped with a warning,
    /// and inverted credit ranges are repaired.
    pub fn new(
        courses: Vec<Course>,
        majors: Vec<MajorRequirements>,
        milestones: MilestoneSettings,
    ) -> Self {
        let mut course_map = HashMap::new();
        for mut course in courses {
            let Some(code) = normalize_code(&course.identifier) else {
                warn!("Skipping course record with empty identifier");
                continue;
            };
            course.identifier = code.clone();
            course.postrequisites = course
                .postrequisites
                .iter()
                .filter_map(|p| normalize_code(p))
                .collect();
            if course.credits_max < course.credits_min {
                course.credits_max = course.credits_min;
            }
            course_map.insert(code, course);
        }

        let mut major_map = HashMap::new();
        for mut major in majors {
            for group in &mut major.groups {
                for entry in &mut group.entries {
                    normalize_entry(entry);
                }
            }
            major_map.insert(major.major_name.clone(), major);
        }

        Self {
            courses: course_map,
            majors: major_map,
            milestones,
        }
    }

    /// Creates an empty context (useful for tests).
    pub fn empty() -> Self {
        Self {
            courses: HashMap::new(),
            majors: HashMap::new(),
            milestones: MilestoneSettings::default(),
        }
    }

    /// Loads all catalog files from a data directory.
    ///
    /// Expects `courses.json` (array of course records) and `majors.json`
    /// (array of major requirement records). `milestones.json` is optional;
    /// the built-in default tier table is used when absent.
    pub fn load_from_directory(data_dir: &Path) -> Result<Self, CatalogError> {
        if !data_dir.is_dir() {
            return Err(CatalogError::MissingDataDir(data_dir.to_path_buf()));
        }

        let courses: Vec<Course> = read_json(&data_dir.join("courses.json"))?;
        let majors: Vec<MajorRequirements> = read_json(&data_dir.join("majors.json"))?;

        let milestones_path = data_dir.join("milestones.json");
        let milestones = if milestones_path.exists() {
            read_json(&milestones_path)?
        } else {
            MilestoneSettings::default()
        };

        let catalogs = Self::new(courses, majors, milestones);
        info!(
            "Loaded {} courses and {} majors from {}",
            catalogs.course_count(),
            catalogs.major_count(),
            data_dir.display()
        );

        Ok(catalogs)
    }

    /// Looks up a course by identifier (normalized before lookup).
    pub fn course(&self, code: &str) -> Option<&Course> {
        let code = normalize_code(code)?;
        self.courses.get(&code)
    }

    /// Looks up a major's requirement set by name.
    pub fn major(&self, major_name: &str) -> Option<&MajorRequirements> {
        self.majors.get(major_name)
    }

    /// Names of all loaded majors, sorted for stable output.
    pub fn major_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.majors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Milestone tiers for a major (generic fallback when unconfigured).
    pub fn milestones_for(&self, major_name: &str) -> &MilestoneTiers {
        self.milestones.for_major(major_name)
    }

    pub fn course_count(&self) -> usize {
        self.courses.len()
    }

    pub fn major_count(&self) -> usize {
        self.majors.len()
    }
}

fn normalize_entry(entry: &mut RequirementEntry) {
    match entry {
        RequirementEntry::Course { course } => {
            if let Some(code) = normalize_code(course) {
                *course = code;
            }
        }
        RequirementEntry::Choice { choice } => {
            *choice = choice.iter().filter_map(|c| normalize_code(c)).collect();
        }
        RequirementEntry::Sequence { sequence } => {
            *sequence = sequence.iter().filter_map(|c| normalize_code(c)).collect();
        }
    }
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T, CatalogError> {
    let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| CatalogError::Parse {
        path: path.to_path_buf(),
        source,
    })
}
