//! Service backing the task list of a project.

use crate::project::{
    domain::{Project, ProjectId, Task, TaskId},
    ports::{
        Navigator, ProjectRepository, ProjectRepositoryError, TaskRepository, TaskRepositoryError,
    },
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Service-level errors for the task list.
#[derive(Debug, Error)]
pub enum TaskListError {
    /// Task repository operation failed.
    #[error(transparent)]
    Tasks(#[from] TaskRepositoryError),
    /// Project repository operation failed.
    #[error(transparent)]
    Projects(#[from] ProjectRepositoryError),
    /// The task does not exist.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The project does not exist.
    #[error("project not found: {0}")]
    ProjectNotFound(ProjectId),
}

/// Result type for task list operations.
pub type TaskListResult<T> = Result<T, TaskListError>;

/// Lists, checks off and removes the tasks of projects.
pub struct TaskListService<T, P, N, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    N: Navigator,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    projects: Arc<P>,
    navigator: Arc<N>,
    clock: Arc<C>,
}

impl<T, P, N, C> TaskListService<T, P, N, C>
where
    T: TaskRepository,
    P: ProjectRepository,
    N: Navigator,
    C: Clock + Send + Sync,
{
    /// Creates a new task list service.
    #[must_use]
    pub const fn new(tasks: Arc<T>, projects: Arc<P>, navigator: Arc<N>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            projects,
            navigator,
            clock,
        }
    }

    /// Returns the tasks of a project in creation order.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::ProjectNotFound`] when the project does not
    /// exist, or a repository error when a lookup fails.
    pub async fn tasks(&self, project_id: ProjectId) -> TaskListResult<Vec<Task>> {
        let project = self.project(project_id).await?;
        Ok(self.tasks.tasks_for_project(project.id()).await?)
    }

    /// Flips the completion checkbox of a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::TaskNotFound`] when the task does not exist,
    /// or [`TaskListError::Tasks`] when persistence fails.
    pub async fn toggle_done(&self, task_id: TaskId) -> TaskListResult<Task> {
        let mut task = self
            .tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskListError::TaskNotFound(task_id))?;
        task.toggle_done(&*self.clock);
        self.tasks.update(&task).await?;
        info!(task_id = %task_id, done = task.is_done(), "task completion toggled");
        Ok(task)
    }

    /// Deletes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::TaskNotFound`] when the task does not exist,
    /// or [`TaskListError::Tasks`] when deletion fails.
    pub async fn delete_task(&self, task_id: TaskId) -> TaskListResult<()> {
        match self.tasks.delete(task_id).await {
            Ok(()) => {
                info!(task_id = %task_id, "task deleted");
                Ok(())
            }
            Err(TaskRepositoryError::NotFound(id)) => Err(TaskListError::TaskNotFound(id)),
            Err(err) => Err(err.into()),
        }
    }

    /// Asks the navigator for the task creation screen of a project.
    ///
    /// # Errors
    ///
    /// Returns [`TaskListError::ProjectNotFound`] when the project does not
    /// exist, or [`TaskListError::Projects`] when the lookup fails.
    pub async fn open_task_creation(&self, project_id: ProjectId) -> TaskListResult<()> {
        let project = self.project(project_id).await?;
        self.navigator.present_task_creation(&project);
        Ok(())
    }

    async fn project(&self, project_id: ProjectId) -> TaskListResult<Project> {
        self.projects
            .find_by_id(project_id)
            .await?
            .ok_or(TaskListError::ProjectNotFound(project_id))
    }
}
