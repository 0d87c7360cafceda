//! In-memory project registry.
//!
//! # Responsibility
//! - Own every project as an arena indexed by id, insertion order preserved.
//! - Allocate project ids and guard id uniqueness on explicit inserts.
//!
//! # Invariants
//! - `next_project_id` is strictly greater than every id currently in the
//!   store that was seen by `create_project` or `add_project`, so
//!   auto-allocated ids never collide with manually inserted ones.
//! - Project ids are unique across the store; `add_project` enforces this,
//!   `create_project` cannot violate it.

use crate::model::project::{Project, ProjectId};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Structural error from project registry operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// A project with this id already exists in the store.
    DuplicateId(ProjectId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "a project with id {id} already exists"),
        }
    }
}

impl Error for StoreError {}

/// In-memory registry of projects.
///
/// Single-threaded by design: callers in a multi-threaded environment must
/// add their own exclusive lock around the whole store.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
    next_project_id: ProjectId,
}

impl ProjectStore {
    /// Creates an empty store. The first auto-allocated project id is 1.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            next_project_id: 1,
        }
    }

    /// Creates a project with an auto-allocated id and returns a reference
    /// to the stored entity. Never fails.
    pub fn create_project(
        &mut self,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> &Project {
        let id = self.next_project_id;
        self.next_project_id += 1;

        let project = Project::new(id, name, description);
        info!(
            "event=project_created module=store status=ok id={} name={}",
            id, project.name
        );
        self.projects.push(project);
        &self.projects[self.projects.len() - 1]
    }

    /// Inserts a pre-built project with an explicit id.
    ///
    /// # Errors
    /// - `StoreError::DuplicateId` when the id already exists; the store is
    ///   left unchanged.
    pub fn add_project(&mut self, project: Project) -> StoreResult<()> {
        let id = project.id();
        if self.find_project_by_id(id).is_some() {
            info!("event=project_insert module=store status=rejected id={id} reason=duplicate");
            return Err(StoreError::DuplicateId(id));
        }

        // Keep future auto-ids ahead of any manually chosen id.
        if id >= self.next_project_id {
            self.next_project_id = id + 1;
        }
        info!(
            "event=project_insert module=store status=ok id={} name={}",
            id, project.name
        );
        self.projects.push(project);
        Ok(())
    }

    /// Snapshot copy of all projects, in insertion order.
    ///
    /// The returned vector is independent of internal storage: mutating it
    /// does not affect the store, and later store mutations do not affect a
    /// previously taken snapshot.
    pub fn all_projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    /// Looks up one project by id. Linear scan, first match.
    pub fn find_project_by_id(&self, project_id: ProjectId) -> Option<&Project> {
        self.projects
            .iter()
            .find(|project| project.id() == project_id)
    }

    /// Mutable lookup by id, for task mutation through the arena.
    pub fn find_project_by_id_mut(&mut self, project_id: ProjectId) -> Option<&mut Project> {
        self.projects
            .iter_mut()
            .find(|project| project.id() == project_id)
    }

    /// Removes the project with the given id, reporting whether a removal
    /// occurred.
    pub fn remove_project_by_id(&mut self, project_id: ProjectId) -> bool {
        let before = self.projects.len();
        self.projects.retain(|project| project.id() != project_id);
        let removed = self.projects.len() < before;
        if removed {
            info!("event=project_removed module=store status=ok id={project_id}");
        }
        removed
    }

    /// Case-insensitive substring search over project names.
    ///
    /// A blank search term yields an empty result, not "match all", so an
    /// accidental empty query never dumps the whole store.
    pub fn find_projects_by_name(&self, term: &str) -> Vec<&Project> {
        let trimmed = term.trim();
        if trimmed.is_empty() {
            return Vec::new();
        }

        let needle = trimmed.to_lowercase();
        self.projects
            .iter()
            .filter(|project| project.name.to_lowercase().contains(&needle))
            .collect()
    }

    /// Number of projects currently stored.
    pub fn len(&self) -> usize {
        self.projects.len()
    }

    /// Returns whether the store holds no projects.
    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
