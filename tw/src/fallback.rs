//! Fallback policy: degraded but well-formed defaults
//!
//! One definition of what each operation returns when the model call or its
//! parsing fails. No operation is permitted to propagate a raw failure to
//! its caller; every failure path terminates in one of these values.

use crate::domain::Subtask;

/// Hours returned when an estimate cannot be obtained
pub const DEFAULT_ESTIMATE_HOURS: f64 = 2.0;

/// Lower bound of a produced estimate, in hours
pub const MIN_ESTIMATE_HOURS: f64 = 0.5;

/// Upper bound of a produced estimate, in hours
pub const MAX_ESTIMATE_HOURS: f64 = 40.0;

/// Sentinel priority for tasks the ranking could not place; sorts last
pub const UNRANKED_PRIORITY: i32 = 999;

/// Title of the single subtask returned when decomposition fails entirely
pub const PLACEHOLDER_SUBTASK: &str = "Unable to generate subtasks";

/// Reply returned when a task question cannot be answered
pub const QUERY_FALLBACK: &str = "I couldn't process your query. Please try again.";

/// Clamp a parsed estimate into the allowed range
pub fn clamp_hours(hours: f64) -> f64 {
    hours.clamp(MIN_ESTIMATE_HOURS, MAX_ESTIMATE_HOURS)
}

/// The decompose fallback: a single placeholder entry, never an empty list
pub fn placeholder_subtasks() -> Vec<Subtask> {
    vec![Subtask {
        title: PLACEHOLDER_SUBTASK.to_string(),
        estimated_hours: DEFAULT_ESTIMATE_HOURS,
        priority: 0,
    }]
}
