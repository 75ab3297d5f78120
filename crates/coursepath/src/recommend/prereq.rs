//! Prerequisite satisfaction checking.
//!
//! Pure functions over a course's prerequisite expression and a set of
//! completed (normalized) course identifiers. The evaluator fails open:
//! malformed expressions and unknown identifiers never block a course from
//! being recommended, they just fail to satisfy anything.

use crate::catalog::{normalize_code, PrereqExpr};
use std::collections::HashSet;

/// Result of evaluating a prerequisite expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub satisfied: bool,
    /// Identifiers still needed. For an unsatisfied OR-group, the whole
    /// group is listed so the caller can display "you need A or B".
    pub missing: Vec<String>,
}

impl Evaluation {
    fn satisfied() -> Self {
        Self {
            satisfied: true,
            missing: Vec::new(),
        }
    }
}

/// Evaluates a prerequisite expression against a completed-course set.
///
/// An absent expression is trivially satisfied. Satisfaction is the AND
/// across all top-level units; a unit is a single course or an OR-group.
pub fn evaluate(expr: Option<&PrereqExpr>, completed: &HashSet<String>) -> Evaluation {
    let Some(expr) = expr else {
        return Evaluation::satisfied();
    };

    let mut missing = Vec::new();
    let satisfied = eval_unit(expr, completed, &mut missing);

    Evaluation { satisfied, missing }
}

fn eval_unit(expr: &PrereqExpr, completed: &HashSet<String>, missing: &mut Vec<String>) -> bool {
    match expr {
        PrereqExpr::Course { course } => {
            let Some(code) = normalize_code(course) else {
                // Blank requirement: degrade to "no prerequisite".
                return true;
            };
            if completed.contains(&code) {
                true
            } else {
                missing.push(code);
                false
            }
        }
        PrereqExpr::AnyOf { any_of } => {
            let codes: Vec<String> = any_of.iter().filter_map(|c| normalize_code(c)).collect();
            if codes.is_empty() {
                // Malformed OR-group: fail open rather than starving the
                // course of ever being recommended.
                return true;
            }
            if codes.iter().any(|c| completed.contains(c)) {
                true
            } else {
                missing.extend(codes);
                false
            }
        }
        PrereqExpr::All(units) => {
            let mut all_ok = true;
            for unit in units {
                if !eval_unit(unit, completed, missing) {
                    all_ok = false;
                }
            }
            all_ok
        }
    }
}
