//! Project domain model.
//!
//! # Responsibility
//! - Own an ordered collection of tasks and the task-id allocator.
//! - Expose task management primitives the service layer builds on.
//!
//! # Invariants
//! - `id` is unique across all projects and immutable after creation.
//! - Task insertion order is preserved; queries never reorder stored tasks.
//! - `next_task_id` stays strictly greater than every id the allocator has
//!   handed out, so auto-allocated ids never collide.

use crate::model::task::{Task, TaskId};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Identifier for a project, unique across the whole store.
pub type ProjectId = u64;

/// A named container owning an ordered collection of tasks.
///
/// Tasks are reachable only through the read-only `tasks()` view or the
/// mutation methods below; external code cannot reorder or replace the
/// underlying sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    pub name: String,
    pub description: String,
    tasks: Vec<Task>,
    next_task_id: TaskId,
}

impl Project {
    /// Creates an empty project. Ids are normally assigned by the store.
    pub fn new(id: ProjectId, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            tasks: Vec::new(),
            next_task_id: 1,
        }
    }

    /// Returns the immutable project id.
    pub fn id(&self) -> ProjectId {
        self.id
    }

    /// Read-only view of the owned tasks, in insertion order.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Appends a pre-built task to the end of the sequence.
    ///
    /// Duplicate task ids are not rejected (caller responsibility), but the
    /// internal allocator is advanced past the inserted id so future
    /// auto-allocated ids cannot collide with it.
    pub fn add_task(&mut self, task: Task) {
        if task.id() >= self.next_task_id {
            self.next_task_id = task.id() + 1;
        }
        self.tasks.push(task);
    }

    /// Removes every task with the given id. Silent no-op when none match.
    pub fn remove_task_by_id(&mut self, task_id: TaskId) {
        self.tasks.retain(|task| task.id() != task_id);
    }

    /// Hands out the next task id and advances the counter.
    ///
    /// Single authority for task identity within this project.
    pub fn allocate_task_id(&mut self) -> TaskId {
        let id = self.next_task_id;
        self.next_task_id += 1;
        id
    }

    /// Mutable access to one task by id, first match wins.
    pub(crate) fn task_by_id_mut(&mut self, task_id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|task| task.id() == task_id)
    }
}

impl Display for Project {
    /// Human-readable summary for display and logging, not for parsing.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Id: {}, Name: {}, Number of tasks: {}",
            self.id,
            self.name,
            self.tasks.len()
        )
    }
}
