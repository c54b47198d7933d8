//! Service backing the project creation and edition screens.

use super::EditorPhase;
use crate::project::{
    domain::{Placeholders, Project, ProjectDomainError, ProjectDraft, ProjectId},
    ports::{ProjectRepository, ProjectRepositoryError, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for project editing.
#[derive(Debug, Error)]
pub enum ProjectEditorError {
    /// Draft validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] ProjectRepositoryError),
    /// Loading the project's tasks failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// The project to edit does not exist.
    #[error("project not found: {0}")]
    NotFound(ProjectId),
    /// The operation needs an open draft.
    #[error("no draft is being edited")]
    NotEditing,
    /// The operation needs a persisted project.
    #[error("project has not been created yet")]
    NotPersisted,
}

/// Result type for project editor operations.
pub type ProjectEditorResult<T> = Result<T, ProjectEditorError>;

enum Target {
    New(Placeholders),
    Existing(Project),
}

/// Draft-commit workflow for a single project.
///
/// Edits that move the schedule are checked against the project's stored
/// tasks, so no task ends up outside its project window.
pub struct ProjectEditor<R, T, C>
where
    R: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    tasks: Arc<T>,
    clock: Arc<C>,
    target: Target,
    draft: Option<ProjectDraft>,
}

impl<R, T, C> ProjectEditor<R, T, C>
where
    R: ProjectRepository,
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Opens an editor on an empty template for a new project.
    ///
    /// Blank names and descriptions are committed as `placeholders`.
    #[must_use]
    pub fn for_creation(
        repository: Arc<R>,
        tasks: Arc<T>,
        clock: Arc<C>,
        placeholders: Placeholders,
    ) -> Self {
        let draft = ProjectDraft::template(clock.utc());
        Self {
            repository,
            tasks,
            clock,
            target: Target::New(placeholders),
            draft: Some(draft),
        }
    }

    /// Opens an editor in read-only mode on a stored project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectEditorError::NotFound`] when the project does not
    /// exist, or [`ProjectEditorError::Repository`] when the lookup fails.
    pub async fn for_existing(
        repository: Arc<R>,
        tasks: Arc<T>,
        clock: Arc<C>,
        id: ProjectId,
    ) -> ProjectEditorResult<Self> {
        let project = repository
            .find_by_id(id)
            .await?
            .ok_or(ProjectEditorError::NotFound(id))?;
        Ok(Self {
            repository,
            tasks,
            clock,
            target: Target::Existing(project),
            draft: None,
        })
    }

    /// Returns the current workflow phase.
    #[must_use]
    pub const fn phase(&self) -> EditorPhase {
        if self.draft.is_some() {
            EditorPhase::Editing
        } else {
            EditorPhase::Viewing
        }
    }

    /// Returns the persisted project, if one exists yet.
    #[must_use]
    pub const fn project(&self) -> Option<&Project> {
        match &self.target {
            Target::New(_) => None,
            Target::Existing(project) => Some(project),
        }
    }

    /// Returns the open draft, if any.
    #[must_use]
    pub const fn draft(&self) -> Option<&ProjectDraft> {
        self.draft.as_ref()
    }

    /// Returns the open draft for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectEditorError::NotEditing`] while viewing.
    pub fn draft_mut(&mut self) -> ProjectEditorResult<&mut ProjectDraft> {
        self.draft.as_mut().ok_or(ProjectEditorError::NotEditing)
    }

    /// Enters editing, seeding the draft from the persisted project.
    ///
    /// An already open draft is returned unchanged.
    pub fn begin_editing(&mut self) -> &mut ProjectDraft {
        self.draft.get_or_insert_with(|| match &self.target {
            Target::New(_) => ProjectDraft::template(self.clock.utc()),
            Target::Existing(project) => ProjectDraft::from_project(project),
        })
    }

    /// Discards the draft and returns to viewing.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Validates and persists the draft.
    ///
    /// On success the editor returns to viewing the committed project. On
    /// failure nothing is written and the draft stays open.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectEditorError::NotEditing`] without an open draft,
    /// [`ProjectEditorError::Domain`] when validation fails (including a
    /// schedule that would leave stored tasks outside it), or a repository
    /// error when loading tasks or persisting fails.
    pub async fn commit(&mut self) -> ProjectEditorResult<Project> {
        let draft = self
            .draft
            .clone()
            .ok_or(ProjectEditorError::NotEditing)?;

        let project = self.validate(draft).await.inspect_err(|err| {
            warn!(error = %err, "project commit rejected");
        })?;

        match self.target {
            Target::New(_) => self.repository.store(&project).await?,
            Target::Existing(_) => self.repository.update(&project).await?,
        }
        info!(project_id = %project.id(), "project committed");

        self.target = Target::Existing(project.clone());
        self.draft = None;
        Ok(project)
    }

    async fn validate(&self, draft: ProjectDraft) -> ProjectEditorResult<Project> {
        match &self.target {
            Target::New(placeholders) => Ok(Project::create(draft, placeholders, &*self.clock)?),
            Target::Existing(persisted) => {
                let mut updated = persisted.clone();
                updated.apply(draft, &*self.clock)?;
                let tasks = self.tasks.tasks_for_project(updated.id()).await?;
                updated.ensure_covers(&tasks)?;
                Ok(updated)
            }
        }
    }

    /// Deletes the persisted project and its tasks.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectEditorError::NotPersisted`] before the first commit,
    /// or [`ProjectEditorError::Repository`] when deletion fails.
    pub async fn delete(self) -> ProjectEditorResult<ProjectId> {
        let Target::Existing(project) = &self.target else {
            return Err(ProjectEditorError::NotPersisted);
        };
        let id = project.id();
        self.repository.delete(id).await?;
        info!(project_id = %id, "project deleted");
        Ok(id)
    }
}
