//! Task query and mutation service.
//!
//! # Responsibility
//! - Provide stateless query/mutation operations over one project's tasks.
//! - Own the task creation path, including id allocation and title checks.
//!
//! # Invariants
//! - Query results preserve the project's insertion order unless the
//!   operation is explicitly a sort.
//! - No operation here mutates the project's stored task order.
//! - "Today" for overdue detection is resolved exactly once per call.

use crate::model::project::Project;
use crate::model::task::{Task, TaskId, TaskPriority, TaskStatus};
use chrono::{Local, NaiveDate};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from task service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskServiceError {
    /// Task title is blank after trim.
    InvalidTitle,
}

impl Display for TaskServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidTitle => write!(f, "task title must not be blank"),
        }
    }
}

impl Error for TaskServiceError {}

/// Request model for creating a task through the service.
///
/// The id is deliberately absent: the owning project allocates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    /// Free text, may be empty.
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub due_date: NaiveDate,
}

/// Creates a task in the given project with an auto-allocated id.
///
/// # Contract
/// - The project is the single authority for task identity; callers never
///   pick ids on this path.
/// - Returns the allocated task id.
///
/// # Errors
/// - `InvalidTitle` when the title is empty or whitespace-only; the project
///   is left unchanged.
pub fn create_task(project: &mut Project, new_task: NewTask) -> Result<TaskId, TaskServiceError> {
    let title = new_task.title.trim();
    if title.is_empty() {
        return Err(TaskServiceError::InvalidTitle);
    }

    let id = project.allocate_task_id();
    let task = Task::new(
        id,
        title,
        new_task.description,
        new_task.status,
        new_task.priority,
        new_task.due_date,
    );
    info!(
        "event=task_created module=service status=ok project_id={} task_id={id}",
        project.id()
    );
    project.add_task(task);
    Ok(id)
}

/// Appends a pre-built task to the project.
///
/// Duplicate ids are not rejected (caller responsibility); the project's
/// allocator is advanced past the inserted id.
pub fn add_task_to_project(project: &mut Project, task: Task) {
    project.add_task(task);
}

/// Looks up one task by id. Linear scan, first match wins.
pub fn find_task_by_id(project: &Project, task_id: TaskId) -> Option<&Task> {
    project.tasks().iter().find(|task| task.id() == task_id)
}

/// Mutable handle to one task, for in-place field edits.
pub fn find_task_by_id_mut(project: &mut Project, task_id: TaskId) -> Option<&mut Task> {
    project.task_by_id_mut(task_id)
}

/// Sets the task's status to `Done` unconditionally.
///
/// Any prior status is accepted; repeated calls are idempotent.
pub fn mark_task_as_done(task: &mut Task) {
    task.status = TaskStatus::Done;
}

/// All tasks with the given status, original order preserved.
pub fn filter_by_status(project: &Project, status: TaskStatus) -> Vec<&Task> {
    project
        .tasks()
        .iter()
        .filter(|task| task.status == status)
        .collect()
}

/// All tasks with the given priority, original order preserved.
pub fn filter_by_priority(project: &Project, priority: TaskPriority) -> Vec<&Task> {
    project
        .tasks()
        .iter()
        .filter(|task| task.priority == priority)
        .collect()
}

/// Tasks due strictly before today and not yet done.
///
/// "Today" is the local calendar date at call time, resolved once so the
/// result is consistent even if the call spans a date boundary.
pub fn overdue_tasks(project: &Project) -> Vec<&Task> {
    overdue_tasks_at(project, Local::now().date_naive())
}

/// Overdue detection against an explicit reference date.
pub fn overdue_tasks_at(project: &Project, today: NaiveDate) -> Vec<&Task> {
    project
        .tasks()
        .iter()
        .filter(|task| task.due_date < today && task.status != TaskStatus::Done)
        .collect()
}

/// New sequence of the project's tasks, stable-sorted ascending by due date.
///
/// The stored task order is untouched; tasks with equal due dates keep
/// their original relative order.
pub fn sort_tasks_by_deadline(project: &Project) -> Vec<Task> {
    let mut sorted = project.tasks().to_vec();
    sorted.sort_by_key(|task| task.due_date);
    sorted
}
