//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate store calls into use-case level APIs.
//! - Validate required input at the boundary before touching entities.
//! - Keep presentation callers decoupled from storage details.

pub mod project_service;
pub mod task_service;
