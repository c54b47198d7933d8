//! Service backing the task creation and edition screens.

use super::EditorPhase;
use crate::project::{
    domain::{Placeholders, Project, ProjectDomainError, ProjectId, Task, TaskDraft, TaskId},
    ports::{ProjectRepository, ProjectRepositoryError, TaskRepository, TaskRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::{info, warn};

/// Service-level errors for task editing.
#[derive(Debug, Error)]
pub enum TaskEditorError {
    /// Draft validation failed.
    #[error(transparent)]
    Domain(#[from] ProjectDomainError),
    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Project repository operation failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// The task to edit does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The owning project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
    /// The operation needs an open draft.
    #[error("no draft is being edited")]
    NotEditing,
}

/// Result type for task editor operations.
pub type TaskEditorResult<T> = Result<T, TaskEditorError>;

enum Target {
    New(Placeholders),
    Existing(Task),
}

/// Draft-commit workflow for a single task of a project.
pub struct TaskEditor<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    clock: Arc<C>,
    project: Project,
    target: Target,
    draft: Option<TaskDraft>,
}

impl<T, C> TaskEditor<T, C>
where
    T: TaskRepository,
    C: Clock + Send + Sync,
{
    /// Opens an editor on an empty template for a new task of `project_id`.
    ///
    /// Blank names and descriptions are committed as `placeholders`.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::ProjectNotFound`] when the project does not
    /// exist, or [`TaskEditorError::Projects`] when the lookup fails.
    pub async fn for_creation<P: ProjectRepository>(
        tasks: Arc<T>,
        projects: &P,
        clock: Arc<C>,
        placeholders: Placeholders,
        project_id: ProjectId,
    ) -> TaskEditorResult<Self> {
        let project = load_project(projects, project_id).await?;
        let draft = TaskDraft::template(&project, clock.utc());
        Ok(Self {
            tasks,
            clock,
            project,
            target: Target::New(placeholders),
            draft: Some(draft),
        })
    }

    /// Opens an editor in read-only mode on a stored task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::TaskNotFound`] or
    /// [`TaskEditorError::ProjectNotFound`] when either record is missing,
    /// or a repository error when a lookup fails.
    pub async fn for_existing<P: ProjectRepository>(
        tasks: Arc<T>,
        projects: &P,
        clock: Arc<C>,
        task_id: TaskId,
    ) -> TaskEditorResult<Self> {
        let task = tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskEditorError::TaskNotFound(task_id))?;
        let project = load_project(projects, task.project_id()).await?;
        Ok(Self {
            tasks,
            clock,
            project,
            target: Target::Existing(task),
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

    /// Returns the owning project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the persisted task, if one exists yet.
    #[must_use]
    pub const fn task(&self) -> Option<&Task> {
        match &self.target {
            Target::New(_) => None,
            Target::Existing(task) => Some(task),
        }
    }

    /// Returns the open draft, if any.
    #[must_use]
    pub const fn draft(&self) -> Option<&TaskDraft> {
        self.draft.as_ref()
    }

    /// Returns the open draft for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::NotEditing`] while viewing.
    pub fn draft_mut(&mut self) -> TaskEditorResult<&mut TaskDraft> {
        self.draft.as_mut().ok_or(TaskEditorError::NotEditing)
    }

    /// Enters editing, seeding the draft from the persisted task.
    ///
    /// An already open draft is returned unchanged.
    pub fn begin_editing(&mut self) -> &mut TaskDraft {
        self.draft.get_or_insert_with(|| match &self.target {
            Target::New(_) => TaskDraft::template(&self.project, self.clock.utc()),
            Target::Existing(task) => TaskDraft::from_task(task),
        })
    }

    /// Discards the draft and returns to viewing.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    /// Validates and persists the draft.
    ///
    /// On success the editor returns to viewing the committed task. On
    /// failure nothing is written and the draft stays open.
    ///
    /// # Errors
    ///
    /// Returns [`TaskEditorError::NotEditing`] without an open draft,
    /// [`TaskEditorError::Domain`] when validation fails, or
    /// [`TaskEditorError::Tasks`] when persistence fails.
    pub async fn commit(&mut self) -> TaskEditorResult<Task> {
        let draft = self.draft.clone().ok_or(TaskEditorError::NotEditing)?;

        let validated = match &self.target {
            Target::New(placeholders) => {
                Task::create(&self.project, draft, placeholders, &*self.clock)
            }
            Target::Existing(persisted) => {
                let mut updated = persisted.clone();
                updated
                    .apply(&self.project, draft, &*self.clock)
                    .map(|()| updated)
            }
        };
        let task = validated.inspect_err(|err| {
            warn!(project_id = %self.project.id(), error = %err, "task commit rejected");
        })?;

        match self.target {
            Target::New(_) => self.tasks.store(&task).await?,
            Target::Existing(_) => self.tasks.update(&task).await?,
        }
        info!(project_id = %self.project.id(), task_id = %task.id(), "task committed");

        self.target = Target::Existing(task.clone());
        self.draft = None;
        Ok(task)
    }
}

async fn load_project<P: ProjectRepository>(
    projects: &P,
    project_id: ProjectId,
) -> TaskEditorResult<Project> {
    projects
        .find_by_id(project_id)
        .await?
        .ok_or(TaskEditorError::ProjectNotFound(project_id))
}
