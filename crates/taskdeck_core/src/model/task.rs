//! Task domain model.
//!
//! # Responsibility
//! - Define the unit of work owned by a project.
//! - Provide the display summary used by presentation callers.
//!
//! # Invariants
//! - `id` is unique within the owning project and immutable after creation.
//! - All other fields are plain mutable data; callers are trusted for field
//!   updates (validation happens at the service boundary).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier for a task, unique within its owning project.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type TaskId = u64;

/// Workflow state of a task.
///
/// There is no enforced transition graph: any status may replace any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created but not started.
    Todo,
    /// Work is in progress.
    InProgress,
    /// Completed.
    Done,
}

/// Urgency classification of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

/// A unit of work belonging to one project.
///
/// The id is private so it cannot be rewritten after construction; every
/// other field is public and mutable in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    /// Display title. Required non-blank at the service boundary.
    pub title: String,
    /// Free text, may be empty.
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    /// Deadline as a calendar date, no time component.
    pub due_date: NaiveDate,
}

impl Task {
    /// Creates a task with all fields set.
    ///
    /// Task ids are normally allocated by the owning project
    /// (`Project::allocate_task_id`); this constructor also accepts
    /// caller-provided ids for pre-built inserts.
    pub fn new(
        id: TaskId,
        title: impl Into<String>,
        description: impl Into<String>,
        status: TaskStatus,
        priority: TaskPriority,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            description: description.into(),
            status,
            priority,
            due_date,
        }
    }

    /// Returns the immutable task id.
    pub fn id(&self) -> TaskId {
        self.id
    }
}

impl Display for TaskStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::Done => "done",
        };
        f.write_str(label)
    }
}

impl Display for TaskPriority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        };
        f.write_str(label)
    }
}

impl Display for Task {
    /// Human-readable summary for display and logging, not for parsing.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Id: {}, Title: {}, Description: {}, Status: {}, Priority: {}, Deadline: {}",
            self.id, self.title, self.description, self.status, self.priority, self.due_date
        )
    }
}
