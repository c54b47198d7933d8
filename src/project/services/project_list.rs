//! Service backing the project list screen.

use crate::project::{
    domain::{Project, ProjectId, SearchMode, filter_projects_with},
    ports::{Navigator, ProjectRepository, ProjectRepositoryError},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Service-level errors for the project list.
#[derive(Debug, Error)]
pub enum ProjectListError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// The project is not part of the loaded list.
    #[error("project not found: {0}")]
    NotFound(ProjectId),
}

/// Result type for project list operations.
pub type ProjectListResult<T> = Result<T, ProjectListError>;

/// Holds the loaded projects and the current search query.
pub struct ProjectListService<R, N>
where
    R: ProjectRepository,
    N: Navigator,
{
    repository: Arc<R>,
    navigator: Arc<N>,
    search_mode: SearchMode,
    projects: Vec<Project>,
    query: String,
}

impl<R, N> ProjectListService<R, N>
where
    R: ProjectRepository,
    N: Navigator,
{
    /// Creates an empty list; call [`Self::refresh`] to load projects.
    #[must_use]
    pub const fn new(repository: Arc<R>, navigator: Arc<N>) -> Self {
        Self {
            repository,
            navigator,
            search_mode: SearchMode::CaseSensitive,
            projects: Vec::new(),
            query: String::new(),
        }
    }

    /// Sets how the search query is compared with project text.
    #[must_use]
    pub const fn with_search_mode(mut self, mode: SearchMode) -> Self {
        self.search_mode = mode;
        self
    }

    /// Reloads every project from the repository.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectListError::Repository`] when the fetch fails; the
    /// previously loaded list is kept in that case.
    pub async fn refresh(&mut self) -> ProjectListResult<&[Project]> {
        self.projects = self.repository.fetch_projects().await?;
        debug!(count = self.projects.len(), "project list refreshed");
        Ok(&self.projects)
    }

    /// Returns every loaded project, unfiltered.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Returns the current search query.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replaces the search query and returns the matching projects.
    pub fn search(&mut self, query: impl Into<String>) -> Vec<Project> {
        self.query = query.into();
        debug!(query = %self.query, "project search updated");
        self.visible_projects()
    }

    /// Returns the loaded projects matching the current query, in order.
    #[must_use]
    pub fn visible_projects(&self) -> Vec<Project> {
        filter_projects_with(&self.projects, &self.query, self.search_mode)
    }

    /// Deletes a project and its tasks, then reloads the list.
    ///
    /// The deleted project leaves the loaded list even when the reload
    /// fails; that failure is logged and the stale list is kept otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectListError::Repository`] when deletion fails.
    pub async fn delete_project(&mut self, id: ProjectId) -> ProjectListResult<()> {
        self.repository.delete(id).await?;
        info!(project_id = %id, "project deleted");
        self.projects.retain(|project| project.id() != id);
        if let Err(err) = self.refresh().await {
            warn!(project_id = %id, error = %err, "project list reload after delete failed");
        }
        Ok(())
    }

    /// Asks the navigator for the task list of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectListError::NotFound`] when the project is not loaded.
    pub fn open_task_list(&self, id: ProjectId) -> ProjectListResult<()> {
        let project = self.loaded(id)?;
        self.navigator.present_task_list(project);
        Ok(())
    }

    /// Asks the navigator for the edition screen of a project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectListError::NotFound`] when the project is not loaded.
    pub fn open_project_edition(&self, id: ProjectId, editable: bool) -> ProjectListResult<()> {
        let project = self.loaded(id)?;
        self.navigator.present_project_edition(project, editable);
        Ok(())
    }

    /// Asks the navigator for the project creation screen.
    pub fn open_project_creation(&self) {
        self.navigator.present_project_creation();
    }

    fn loaded(&self, id: ProjectId) -> ProjectListResult<&Project> {
        self.projects
            .iter()
            .find(|project| project.id() == id)
            .ok_or(ProjectListError::NotFound(id))
    }
}
