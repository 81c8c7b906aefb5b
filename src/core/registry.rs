//! Owned collection of projects with identity and existence checks.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::project::{Project, ProjectStatus};
use crate::errors::{LedgerError, LedgerResult};

/// Owns the project collection in insertion order.
///
/// Replaces the ambient shared state of the original application with an
/// explicit object initialized at application start and injected into the
/// components that need it. No two projects share an id at any time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectRegistry {
    #[serde(default)]
    projects: Vec<Project>,
}

impl ProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a new project and returns its identifier.
    pub fn add(&mut self, project: Project) -> LedgerResult<Uuid> {
        if self.contains(project.id) {
            return Err(LedgerError::DuplicateId(project.id));
        }
        let id = project.id;
        self.projects.push(project);
        Ok(id)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.projects.iter().any(|project| project.id == id)
    }

    pub fn get(&self, id: Uuid) -> LedgerResult<&Project> {
        self.projects
            .iter()
            .find(|project| project.id == id)
            .ok_or(LedgerError::NotFound(id))
    }

    /// Applies an in-place change under the identity of `id` and refreshes
    /// the project's `updated_at` stamp.
    pub fn update<F>(&mut self, id: Uuid, mutator: F) -> LedgerResult<()>
    where
        F: FnOnce(&mut Project),
    {
        let project = self
            .projects
            .iter_mut()
            .find(|project| project.id == id)
            .ok_or(LedgerError::NotFound(id))?;
        mutator(project);
        project.touch();
        Ok(())
    }

    /// Lazy, restartable view of the projects matching `status`, in
    /// insertion order.
    pub fn list_by_status(&self, status: ProjectStatus) -> impl Iterator<Item = &Project> {
        self.projects
            .iter()
            .filter(move |project| project.status == status)
    }

    pub fn projects(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter()
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }
}
