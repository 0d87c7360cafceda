//! In-memory storage layer.
//!
//! # Responsibility
//! - Keep the full registry of projects and the project-id allocator.
//! - Return semantic errors (`DuplicateId`) for structural violations.
//!
//! # Invariants
//! - Absence ("no match") is represented as `None`/empty, never as an error.

pub mod project_store;
