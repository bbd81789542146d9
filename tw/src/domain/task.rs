//! Task and Subtask records
//!
//! Tasks are owned by the persistence collaborator; the planning core only
//! reads them and computes new `priority` / `estimated_hours` values. It never
//! decides completion or ownership.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task as seen by the planning core
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Identity assigned by the persistence layer
    pub id: Uuid,

    /// Non-empty title; ranking matches on this exact text
    pub title: String,

    pub description: Option<String>,

    /// Lower = more urgent. No uniqueness constraint.
    pub priority: i32,

    /// Positive, in hours, when an estimate exists
    pub estimated_hours: Option<f64>,

    pub due_date: Option<DateTime<Utc>>,

    pub completed: bool,
}

impl Task {
    /// Create a task with a fresh id and default fields
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            description: None,
            priority: 0,
            estimated_hours: None,
            due_date: None,
            completed: false,
        }
    }

    /// Builder-style due date assignment
    pub fn with_due_date(mut self, due: DateTime<Utc>) -> Self {
        self.due_date = Some(due);
        self
    }
}

/// A subtask produced by goal decomposition
///
/// Becomes a full Task once the persistence collaborator stores it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Subtask {
    pub title: String,

    /// Always populated; the estimate fallback guarantees a value
    pub estimated_hours: f64,

    /// 0-based position within the decomposition
    pub priority: i32,
}
