//! In-memory store backing both project and task repositories.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::project::{
    domain::{Project, ProjectId, Task, TaskId},
    ports::{
        ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, TaskRepository,
        TaskRepositoryError, TaskRepositoryResult,
    },
};

/// Thread-safe in-memory project and task store.
///
/// Clones share the same state, so one clone can be handed to the project
/// services and another to the task services.
#[derive(Debug, Clone, Default)]
pub struct InMemoryProjectStore {
    state: Arc<RwLock<InMemoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryState {
    projects: HashMap<ProjectId, Project>,
    project_order: Vec<ProjectId>,
    tasks: HashMap<TaskId, Task>,
    task_order: Vec<TaskId>,
}

impl InMemoryProjectStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, InMemoryState>, std::io::Error> {
        self.state
            .read()
            .map_err(|err| std::io::Error::other(err.to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, InMemoryState>, std::io::Error> {
        self.state
            .write()
            .map_err(|err| std::io::Error::other(err.to_string()))
    }
}

impl InMemoryState {
    fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let removed = self.tasks.remove(&id)?;
        self.task_order.retain(|task_id| *task_id != id);
        Some(removed)
    }
}

#[async_trait]
impl ProjectRepository for InMemoryProjectStore {
    async fn fetch_projects(&self) -> ProjectRepositoryResult<Vec<Project>> {
        let state = self.read().map_err(ProjectRepositoryError::persistence)?;
        Ok(state
            .project_order
            .iter()
            .filter_map(|id| state.projects.get(id).cloned())
            .collect())
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        let state = self.read().map_err(ProjectRepositoryError::persistence)?;
        Ok(state.projects.get(&id).cloned())
    }

    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.write().map_err(ProjectRepositoryError::persistence)?;
        if state.projects.contains_key(&project.id()) {
            return Err(ProjectRepositoryError::DuplicateProject(project.id()));
        }
        state.project_order.push(project.id());
        state.projects.insert(project.id(), project.clone());
        Ok(())
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let mut state = self.write().map_err(ProjectRepositoryError::persistence)?;
        let slot = state
            .projects
            .get_mut(&project.id())
            .ok_or(ProjectRepositoryError::NotFound(project.id()))?;
        *slot = project.clone();
        Ok(())
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        let mut state = self.write().map_err(ProjectRepositoryError::persistence)?;
        if state.projects.remove(&id).is_none() {
            return Err(ProjectRepositoryError::NotFound(id));
        }
        state.project_order.retain(|project_id| *project_id != id);

        let InMemoryState {
            tasks, task_order, ..
        } = &mut *state;
        tasks.retain(|_, task| task.project_id() != id);
        task_order.retain(|task_id| tasks.contains_key(task_id));
        Ok(())
    }
}

#[async_trait]
impl TaskRepository for InMemoryProjectStore {
    async fn tasks_for_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        let state = self.read().map_err(TaskRepositoryError::persistence)?;
        Ok(state
            .task_order
            .iter()
            .filter_map(|id| state.tasks.get(id))
            .filter(|task| task.project_id() == project_id)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        let state = self.read().map_err(TaskRepositoryError::persistence)?;
        Ok(state.tasks.get(&id).cloned())
    }

    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write().map_err(TaskRepositoryError::persistence)?;
        if state.tasks.contains_key(&task.id()) {
            return Err(TaskRepositoryError::DuplicateTask(task.id()));
        }
        if !state.projects.contains_key(&task.project_id()) {
            return Err(TaskRepositoryError::MissingProject(task.project_id()));
        }
        state.task_order.push(task.id());
        state.tasks.insert(task.id(), task.clone());
        Ok(())
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let mut state = self.write().map_err(TaskRepositoryError::persistence)?;
        let slot = state
            .tasks
            .get_mut(&task.id())
            .ok_or(TaskRepositoryError::NotFound(task.id()))?;
        *slot = task.clone();
        Ok(())
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        let mut state = self.write().map_err(TaskRepositoryError::persistence)?;
        state
            .remove_task(id)
            .map(|_| ())
            .ok_or(TaskRepositoryError::NotFound(id))
    }
}
