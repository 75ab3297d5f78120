//! Milestone-course configuration for the year classifier.
//!
//! Tier boundaries are deliberately configuration, not constants: the
//! reference table below is only validated for one major, so deployments
//! override it per major via `milestones.json`.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Four ordered tiers of milestone courses for one major.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneTiers {
    /// Tier 1: introductory courses
    #[serde(default)]
    pub introductory: Vec<String>,
    /// Tier 2: core sophomore courses
    #[serde(default)]
    pub sophomore_core: Vec<String>,
    /// Tier 3: junior-level core courses
    #[serde(default)]
    pub junior_core: Vec<String>,
    /// Tier 4: capstone/terminal marker courses
    #[serde(default)]
    pub capstone: Vec<String>,
}

impl Default for MilestoneTiers {
    /// Reference table for the one major the heuristic is validated against.
    fn default() -> Self {
        Self {
            introductory: vec![
                "CS 124".to_string(),
                "CS 128".to_string(),
                "CS 173".to_string(),
                "MATH 221".to_string(),
                "MATH 231".to_string(),
            ],
            sophomore_core: vec![
                "CS 222".to_string(),
                "CS 225".to_string(),
                "CS 233".to_string(),
                "CS 361".to_string(),
            ],
            junior_core: vec![
                "CS 341".to_string(),
                "CS 357".to_string(),
                "CS 374".to_string(),
            ],
            capstone: vec!["CS 421".to_string()],
        }
    }
}

/// Per-major milestone tables plus the generic fallback.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneSettings {
    #[serde(default)]
    pub default: MilestoneTiers,
    #[serde(default)]
    pub majors: HashMap<String, MilestoneTiers>,
}

impl MilestoneSettings {
    /// Tiers for a major, falling back to the default table.
    pub fn for_major(&self, major_name: &str) -> &MilestoneTiers {
        self.majors.get(major_name).unwrap_or(&self.default)
    }
}

impl Default for MilestoneSettings {
    fn default() -> Self {
        Self {
            default: MilestoneTiers::default(),
            majors: HashMap::new(),
        }
    }
}
