//! Academic-year classification from completed courses.
//!
//! A heuristic, not a credit-hour count: the presence of milestone courses
//! from configurable tiers places the student in one of four year buckets.
//! It never fails; an empty completed set or an empty tier table simply
//! classifies as first year.

use crate::catalog::{normalize_code, MilestoneTiers, StudentYear};
use std::collections::HashSet;

/// Classifies a student's academic year from their completed courses.
///
/// Thresholds, highest tier first:
/// - any capstone marker, or at least two junior-core milestones -> fourth year
/// - at least one junior-core, or at least two sophomore-core -> third year
/// - at least one sophomore-core -> second year
/// - otherwise -> first year
pub fn classify(completed: &HashSet<String>, tiers: &MilestoneTiers) -> StudentYear {
    let count = |milestones: &[String]| {
        milestones
            .iter()
            .filter_map(|m| normalize_code(m))
            .filter(|m| completed.contains(m))
            .count()
    };

    let capstone = count(&tiers.capstone);
    let junior = count(&tiers.junior_core);
    let sophomore = count(&tiers.sophomore_core);

    if capstone >= 1 || junior >= 2 {
        StudentYear::FourthYear
    } else if junior >= 1 || sophomore >= 2 {
        StudentYear::ThirdYear
    } else if sophomore >= 1 {
        StudentYear::SecondYear
    } else {
        StudentYear::FirstYear
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn completed(codes: &[&str]) -> HashSet<String> {
        codes.iter().map(|c| c.to_string()).collect()
    }

    fn tiers() -> MilestoneTiers {
        MilestoneTiers::default()
    }

    #[test]
    fn test_empty_set_is_first_year() {
        assert_eq!(classify(&completed(&[]), &tiers()), StudentYear::FirstYear);
    }

    #[test]
    fn test_introductory_courses_alone_stay_first_year() {
        let set = completed(&["CS 124", "CS 128", "MATH 221"]);
        assert_eq!(classify(&set, &tiers()), StudentYear::FirstYear);
    }

    #[test]
    fn test_one_sophomore_milestone_is_second_year() {
        let set = completed(&["CS 124", "CS 225"]);
        assert_eq!(classify(&set, &tiers()), StudentYear::SecondYear);
    }

    #[test]
    fn test_two_sophomore_milestones_is_third_year() {
        let set = completed(&["CS 225", "CS 233"]);
        assert_eq!(classify(&set, &tiers()), StudentYear::ThirdYear);
    }

    #[test]
    fn test_one_junior_milestone_is_third_year() {
        let set = completed(&["CS 374"]);
        assert_eq!(classify(&set, &tiers()), StudentYear::ThirdYear);
    }

    #[test]
    fn test_two_junior_milestones_is_fourth_year() {
        let set = completed(&["CS 341", "CS 374"]);
        assert_eq!(classify(&set, &tiers()), StudentYear::FourthYear);
    }

    #[test]
    fn test_capstone_marker_is_fourth_year() {
        let set = completed(&["CS 421"]);
        assert_eq!(classify(&set, &tiers()), StudentYear::FourthYear);
    }

    #[test]
    fn test_empty_tier_table_degrades_to_first_year() {
        let empty = MilestoneTiers {
            introductory: vec![],
            sophomore_core: vec![],
            junior_core: vec![],
            capstone: vec![],
        };
        let set = completed(&["CS 421", "CS 374"]);
        assert_eq!(classify(&set, &empty), StudentYear::FirstYear);
    }
}
