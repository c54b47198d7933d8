//! `PostgreSQL` store implementing both project and task repositories.

use super::{
    models::{NewProjectRow, NewTaskRow, ProjectRow, TaskRow},
    schema::{projects, tasks},
};
use crate::project::{
    domain::{
        DateRange, IconName, Methodology, PersistedProjectData, PersistedTaskData, Priority,
        Project, ProjectId, Rgb, Task, TaskId,
    },
    ports::{
        ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, TaskRepository,
        TaskRepositoryError, TaskRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by the project store.
pub type ProjectPgPool = Pool<ConnectionManager<PgConnection>>;

/// Builds a connection pool for `database_url`.
///
/// # Errors
///
/// Returns [`ProjectRepositoryError::Persistence`] when the pool cannot
/// open its initial connections.
pub fn build_pool(database_url: &str) -> ProjectRepositoryResult<ProjectPgPool> {
    Pool::builder()
        .build(ConnectionManager::<PgConnection>::new(database_url))
        .map_err(ProjectRepositoryError::persistence)
}

/// `PostgreSQL`-backed project and task store.
#[derive(Debug, Clone)]
pub struct PostgresProjectStore {
    pool: ProjectPgPool,
}

/// Repository errors that can wrap an infrastructure failure.
trait PersistenceFailure: Send + 'static {
    fn from_failure(err: impl std::error::Error + Send + Sync + 'static) -> Self;
}

impl PersistenceFailure for ProjectRepositoryError {
    fn from_failure(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

impl PersistenceFailure for TaskRepositoryError {
    fn from_failure(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::persistence(err)
    }
}

impl PostgresProjectStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ProjectPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T, E>(&self, f: F) -> Result<T, E>
    where
        F: FnOnce(&mut PgConnection) -> Result<T, E> + Send + 'static,
        T: Send + 'static,
        E: PersistenceFailure,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(E::from_failure)?;
            f(&mut connection)
        })
        .await
        .map_err(E::from_failure)?
    }
}

#[async_trait]
impl ProjectRepository for PostgresProjectStore {
    async fn fetch_projects(&self) -> ProjectRepositoryResult<Vec<Project>> {
        self.run_blocking(|connection| {
            let rows = projects::table
                .order((projects::created_at.asc(), projects::id.asc()))
                .select(ProjectRow::as_select())
                .load::<ProjectRow>(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            rows.into_iter().map(row_to_project).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>> {
        self.run_blocking(move |connection| {
            let row = projects::table
                .find(id.into_inner())
                .select(ProjectRow::as_select())
                .first::<ProjectRow>(connection)
                .optional()
                .map_err(ProjectRepositoryError::persistence)?;
            row.map(row_to_project).transpose()
        })
        .await
    }

    async fn store(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let new_row = to_new_project_row(project);
        self.run_blocking(move |connection| {
            diesel::insert_into(projects::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        ProjectRepositoryError::DuplicateProject(project_id)
                    }
                    _ => ProjectRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, project: &Project) -> ProjectRepositoryResult<()> {
        let project_id = project.id();
        let row = to_new_project_row(project);
        self.run_blocking(move |connection| {
            let affected = diesel::update(projects::table.find(project_id.into_inner()))
                .set(&row)
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            if affected == 0 {
                return Err(ProjectRepositoryError::NotFound(project_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: ProjectId) -> ProjectRepositoryResult<()> {
        self.run_blocking(move |connection| {
            // Tasks go with the project through `ON DELETE CASCADE`.
            let affected = diesel::delete(projects::table.find(id.into_inner()))
                .execute(connection)
                .map_err(ProjectRepositoryError::persistence)?;
            if affected == 0 {
                return Err(ProjectRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

#[async_trait]
impl TaskRepository for PostgresProjectStore {
    async fn tasks_for_project(&self, project_id: ProjectId) -> TaskRepositoryResult<Vec<Task>> {
        self.run_blocking(move |connection| {
            let rows = tasks::table
                .filter(tasks::project_id.eq(project_id.into_inner()))
                .order((tasks::created_at.asc(), tasks::id.asc()))
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(TaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> TaskRepositoryResult<Option<Task>> {
        self.run_blocking(move |connection| {
            let row = tasks::table
                .find(id.into_inner())
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn store(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let project_id = task.project_id();
        let new_row = to_new_task_row(task)?;
        self.run_blocking(move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        TaskRepositoryError::DuplicateTask(task_id)
                    }
                    DieselError::DatabaseError(DatabaseErrorKind::ForeignKeyViolation, _) => {
                        TaskRepositoryError::MissingProject(project_id)
                    }
                    _ => TaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> TaskRepositoryResult<()> {
        let task_id = task.id();
        let row = to_new_task_row(task)?;
        self.run_blocking(move |connection| {
            let affected = diesel::update(tasks::table.find(task_id.into_inner()))
                .set(&row)
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> TaskRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(tasks::table.find(id.into_inner()))
                .execute(connection)
                .map_err(TaskRepositoryError::persistence)?;
            if affected == 0 {
                return Err(TaskRepositoryError::NotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn to_new_project_row(project: &Project) -> NewProjectRow {
    let color = project.color();
    let schedule = project.schedule();
    NewProjectRow {
        id: project.id().into_inner(),
        name: project.name().to_owned(),
        description: project.description().to_owned(),
        red: color.red(),
        green: color.green(),
        blue: color.blue(),
        icon: project.icon().as_str().to_owned(),
        methodology: project.methodology().as_str().to_owned(),
        start_at: schedule.start(),
        end_at: schedule.end(),
        created_at: project.created_at(),
        updated_at: project.updated_at(),
    }
}

fn row_to_project(row: ProjectRow) -> ProjectRepositoryResult<Project> {
    let ProjectRow {
        id,
        name,
        description,
        red,
        green,
        blue,
        icon,
        methodology,
        start_at,
        end_at,
        created_at,
        updated_at,
    } = row;

    let data = PersistedProjectData {
        id: ProjectId::from_uuid(id),
        name,
        description,
        color: Rgb::new(red, green, blue).map_err(ProjectRepositoryError::persistence)?,
        icon: IconName::new(icon).map_err(ProjectRepositoryError::persistence)?,
        methodology: Methodology::try_from(methodology.as_str())
            .map_err(ProjectRepositoryError::persistence)?,
        schedule: DateRange::new(start_at, end_at).map_err(ProjectRepositoryError::persistence)?,
        created_at,
        updated_at,
    };
    Ok(Project::from_persisted(data))
}

fn to_new_task_row(task: &Task) -> TaskRepositoryResult<NewTaskRow> {
    let color = task.color();
    let schedule = task.schedule();
    let subtasks =
        serde_json::to_value(task.subtasks()).map_err(TaskRepositoryError::persistence)?;
    Ok(NewTaskRow {
        id: task.id().into_inner(),
        project_id: task.project_id().into_inner(),
        name: task.name().to_owned(),
        description: task.description().to_owned(),
        red: color.red(),
        green: color.green(),
        blue: color.blue(),
        icon: task.icon().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        start_at: schedule.start(),
        end_at: schedule.end(),
        subtasks,
        done: task.is_done(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    })
}

fn row_to_task(row: TaskRow) -> TaskRepositoryResult<Task> {
    let TaskRow {
        id,
        project_id,
        name,
        description,
        red,
        green,
        blue,
        icon,
        priority,
        start_at,
        end_at,
        subtasks,
        done,
        created_at,
        updated_at,
    } = row;

    let data = PersistedTaskData {
        id: TaskId::from_uuid(id),
        project_id: ProjectId::from_uuid(project_id),
        name,
        description,
        color: Rgb::new(red, green, blue).map_err(TaskRepositoryError::persistence)?,
        icon: IconName::new(icon).map_err(TaskRepositoryError::persistence)?,
        priority: Priority::try_from(priority.as_str())
            .map_err(TaskRepositoryError::persistence)?,
        schedule: DateRange::new(start_at, end_at).map_err(TaskRepositoryError::persistence)?,
        subtasks: serde_json::from_value::<Vec<String>>(subtasks)
            .map_err(TaskRepositoryError::persistence)?,
        done,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
