//! Core domain logic for TaskDeck, an in-memory project/task tracker.
//! This crate is the single source of truth for business invariants.
//!
//! State is memory-resident only and lost on process exit; the design
//! assumes one caller at a time (no internal locking).

pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use logging::{default_log_level, init_logging, logging_status};
pub use model::project::{Project, ProjectId};
pub use model::task::{Task, TaskId, TaskPriority, TaskStatus};
pub use service::project_service::{ProjectService, ProjectServiceError};
pub use service::task_service::{self, NewTask, TaskServiceError};
pub use store::project_store::{ProjectStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
