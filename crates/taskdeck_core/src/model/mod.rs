//! Domain model for project/task tracking.
//!
//! # Responsibility
//! - Define the canonical entities used by core business logic.
//! - Keep entity-level invariants (id immutability, task ownership) local.
//!
//! # Invariants
//! - Every entity is identified by an integer id that never changes after
//!   construction.
//! - A `Task` belongs to exactly one `Project`; tasks are never shared.

pub mod project;
pub mod task;
