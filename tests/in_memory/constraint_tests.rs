//! In-memory integration tests for store constraints.

use std::sync::Arc;

use super::helpers::{kickoff, project_draft, seed_project, store};
use dailytask::project::{
    adapters::memory::InMemoryProjectStore,
    domain::{Placeholders, Project, Task, TaskDraft},
    ports::{ProjectRepository, ProjectRepositoryError, TaskRepository, TaskRepositoryError},
};
use mockable::DefaultClock;
use rstest::rstest;

fn unsaved_task(project: &Project) -> Task {
    Task::create(
        project,
        TaskDraft::template(project, kickoff()),
        &Placeholders::default(),
        &DefaultClock,
    )
    .expect("valid task draft")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storing_a_project_twice_is_rejected(store: Arc<InMemoryProjectStore>) {
    let project = seed_project(&store, "Thesis", "Final chapters").await;

    let result = ProjectRepository::store(&*store, &project).await;

    assert!(matches!(
        result,
        Err(ProjectRepositoryError::DuplicateProject(id)) if id == project.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn updating_an_unknown_project_is_rejected(store: Arc<InMemoryProjectStore>) {
    let project = Project::create(
        project_draft("Ghost", "Never stored"),
        &Placeholders::default(),
        &DefaultClock,
    )
    .expect("valid project draft");

    let update = ProjectRepository::update(&*store, &project).await;
    let delete = ProjectRepository::delete(&*store, project.id()).await;

    assert!(matches!(update, Err(ProjectRepositoryError::NotFound(_))));
    assert!(matches!(delete, Err(ProjectRepositoryError::NotFound(_))));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_for_unstored_project_is_rejected(store: Arc<InMemoryProjectStore>) {
    let project = Project::create(
        project_draft("Ghost", "Never stored"),
        &Placeholders::default(),
        &DefaultClock,
    )
    .expect("valid project draft");
    let task = unsaved_task(&project);

    let result = TaskRepository::store(&*store, &task).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::MissingProject(id)) if id == project.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn storing_a_task_twice_is_rejected(store: Arc<InMemoryProjectStore>) {
    let project = seed_project(&store, "Thesis", "Final chapters").await;
    let task = unsaved_task(&project);
    TaskRepository::store(&*store, &task)
        .await
        .expect("first store succeeds");

    let result = TaskRepository::store(&*store, &task).await;

    assert!(matches!(
        result,
        Err(TaskRepositoryError::DuplicateTask(id)) if id == task.id()
    ));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_state(store: Arc<InMemoryProjectStore>) {
    let twin = (*store).clone();
    let project = seed_project(&twin, "Thesis", "Final chapters").await;

    let found = ProjectRepository::find_by_id(&*store, project.id())
        .await
        .expect("lookup succeeds");

    assert_eq!(found, Some(project));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn cascade_delete_keeps_other_projects_tasks_in_order(store: Arc<InMemoryProjectStore>) {
    let doomed = seed_project(&store, "Thesis", "Final chapters").await;
    let kept = seed_project(&store, "Garden", "Tomatoes").await;
    let mut kept_tasks = Vec::new();
    for _ in 0..3 {
        for project in [&doomed, &kept] {
            let task = unsaved_task(project);
            TaskRepository::store(&*store, &task)
                .await
                .expect("store succeeds");
            if project.id() == kept.id() {
                kept_tasks.push(task);
            }
        }
    }

    ProjectRepository::delete(&*store, doomed.id())
        .await
        .expect("delete succeeds");

    let remaining = store
        .tasks_for_project(kept.id())
        .await
        .expect("listing succeeds");
    assert_eq!(remaining, kept_tasks);
    assert!(
        store
            .tasks_for_project(doomed.id())
            .await
            .expect("listing succeeds")
            .is_empty()
    );
}
