//! coursepath: a rule-based course recommendation engine and API.
//!
//! Given a student's completed courses and a target major, the engine
//! filters eligible courses by prerequisite satisfaction (including
//! OR-logic), infers the student's academic year from milestone courses,
//! aligns candidates to the major's official sample sequence, ranks them,
//! and optionally partitions the result into a fall/spring semester plan
//! with degree-progress statistics.
//!
//! The catalogs (course graph and major requirements) are produced offline
//! by an external pipeline and loaded once from static JSON at startup.

pub mod catalog;
pub mod config;
pub mod recommend;
pub mod server;
pub mod types;
