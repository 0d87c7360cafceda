//! Project use-case service.
//!
//! # Responsibility
//! - Provide the validated project API presentation callers use.
//! - Delegate storage to `ProjectStore`.
//!
//! # Invariants
//! - Project names created through this service are never blank.
//! - Absence (`find_*` misses, empty search results) is a normal outcome,
//!   never an error.

use crate::model::project::{Project, ProjectId};
use crate::store::project_store::{ProjectStore, StoreError};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from project service operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectServiceError {
    /// Project name is blank after trim.
    InvalidName,
    /// A project with this id already exists in the store.
    DuplicateId(ProjectId),
}

impl Display for ProjectServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidName => write!(f, "project name must not be blank"),
            Self::DuplicateId(id) => write!(f, "a project with id {id} already exists"),
        }
    }
}

impl Error for ProjectServiceError {}

impl From<StoreError> for ProjectServiceError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::DuplicateId(id) => Self::DuplicateId(id),
        }
    }
}

/// Use-case facade over the in-memory project registry.
pub struct ProjectService {
    store: ProjectStore,
}

impl Default for ProjectService {
    fn default() -> Self {
        Self::new()
    }
}

impl ProjectService {
    /// Creates a service backed by an empty store.
    pub fn new() -> Self {
        Self {
            store: ProjectStore::new(),
        }
    }

    /// Creates a service over an existing store (import/test paths).
    pub fn with_store(store: ProjectStore) -> Self {
        Self { store }
    }

    /// Creates a project with an auto-allocated id.
    ///
    /// # Errors
    /// - `InvalidName` when the name is empty or whitespace-only.
    pub fn create_project(
        &mut self,
        name: &str,
        description: &str,
    ) -> Result<ProjectId, ProjectServiceError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ProjectServiceError::InvalidName);
        }
        Ok(self.store.create_project(name, description).id())
    }

    /// Inserts a pre-built project with an explicit id.
    ///
    /// # Errors
    /// - `DuplicateId` when the id already exists; the store is unchanged.
    pub fn add_project(&mut self, project: Project) -> Result<(), ProjectServiceError> {
        self.store.add_project(project).map_err(Into::into)
    }

    /// Snapshot copy of all projects, in insertion order.
    pub fn all_projects(&self) -> Vec<Project> {
        self.store.all_projects()
    }

    /// Looks up one project by id.
    pub fn find_project(&self, project_id: ProjectId) -> Option<&Project> {
        self.store.find_project_by_id(project_id)
    }

    /// Mutable handle to one project, for task operations.
    pub fn find_project_mut(&mut self, project_id: ProjectId) -> Option<&mut Project> {
        self.store.find_project_by_id_mut(project_id)
    }

    /// Removes the project with the given id, reporting whether a removal
    /// occurred.
    pub fn remove_project(&mut self, project_id: ProjectId) -> bool {
        self.store.remove_project_by_id(project_id)
    }

    /// Case-insensitive substring search over project names. A blank term
    /// yields an empty result.
    pub fn find_projects_by_name(&self, term: &str) -> Vec<&Project> {
        self.store.find_projects_by_name(term)
    }
}
