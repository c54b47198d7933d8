//! In-memory integration tests for the task screens.

use std::sync::Arc;

use super::helpers::{RecordingNavigator, Screen, kickoff, seed_project, store};
use chrono::Duration;
use dailytask::project::{
    adapters::memory::InMemoryProjectStore,
    domain::{Placeholders, Priority, Project, ProjectDomainError, Task},
    ports::TaskRepository,
    services::{ProjectListService, TaskEditor, TaskEditorError, TaskListService},
};
use mockable::DefaultClock;
use rstest::rstest;

type TestTaskList =
    TaskListService<InMemoryProjectStore, InMemoryProjectStore, RecordingNavigator, DefaultClock>;

fn task_list(
    store: &Arc<InMemoryProjectStore>,
    navigator: &Arc<RecordingNavigator>,
) -> TestTaskList {
    TaskListService::new(
        Arc::clone(store),
        Arc::clone(store),
        Arc::clone(navigator),
        Arc::new(DefaultClock),
    )
}

async fn commit_task(
    store: &Arc<InMemoryProjectStore>,
    project: &Project,
    name: &str,
    subtasks: &[&str],
) -> Task {
    let mut editor = TaskEditor::for_creation(
        Arc::clone(store),
        &**store,
        Arc::new(DefaultClock),
        Placeholders::default(),
        project.id(),
    )
    .await
    .expect("project exists");
    {
        let draft = editor.draft_mut().expect("draft is open");
        draft.name = name.to_owned();
        draft.start = kickoff() + Duration::days(1);
        draft.end = kickoff() + Duration::days(3);
        for subtask in subtasks {
            draft.push_subtask(*subtask);
        }
    }
    editor.commit().await.expect("valid draft commits")
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_are_created_listed_and_checked_off(store: Arc<InMemoryProjectStore>) {
    let project = seed_project(&store, "Thesis", "Final chapters").await;
    let navigator = Arc::new(RecordingNavigator::default());
    let tasks = task_list(&store, &navigator);
    tasks
        .open_task_creation(project.id())
        .await
        .expect("project exists");

    let outline = commit_task(&store, &project, "Outline", &["intro", "method", "results"]).await;
    let draft = commit_task(&store, &project, "Draft", &[]).await;
    let checked = tasks.toggle_done(outline.id()).await.expect("toggle succeeds");

    assert_eq!(navigator.screens(), vec![Screen::TaskCreation(project.id())]);
    assert!(checked.is_done());
    let listed = tasks.tasks(project.id()).await.expect("listing succeeds");
    assert_eq!(listed, vec![checked, draft]);
    let first = listed.first().expect("two tasks listed");
    assert_eq!(first.subtasks(), ["intro", "method", "results"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn editing_a_task_reorders_its_subtasks(store: Arc<InMemoryProjectStore>) {
    let project = seed_project(&store, "Thesis", "Final chapters").await;
    let created = commit_task(&store, &project, "Outline", &["a", "b", "c"]).await;

    let mut editor = TaskEditor::for_existing(
        Arc::clone(&store),
        &*store,
        Arc::new(DefaultClock),
        created.id(),
    )
    .await
    .expect("task exists");
    {
        let draft = editor.begin_editing();
        let moved = draft.remove_subtask(0).expect("index exists");
        draft.push_subtask(moved);
        draft.priority = Priority::Medium;
    }
    let updated = editor.commit().await.expect("edit commits");

    assert_eq!(updated.subtasks(), ["b", "c", "a"]);
    let stored = TaskRepository::find_by_id(&*store, created.id())
        .await
        .expect("lookup succeeds")
        .expect("task stored");
    assert_eq!(stored.subtasks(), ["b", "c", "a"]);
    assert_eq!(stored.priority(), Priority::Medium);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_before_project_start_is_rejected(store: Arc<InMemoryProjectStore>) {
    let project = seed_project(&store, "Thesis", "Final chapters").await;
    let mut editor = TaskEditor::for_creation(
        Arc::clone(&store),
        &*store,
        Arc::new(DefaultClock),
        Placeholders::default(),
        project.id(),
    )
    .await
    .expect("project exists");
    let too_early = kickoff() - Duration::days(1);
    editor.draft_mut().expect("draft is open").start = too_early;

    let result = editor.commit().await;

    assert!(matches!(
        result,
        Err(TaskEditorError::Domain(ProjectDomainError::TaskOutsideProject))
    ));
    assert!(
        store
            .tasks_for_project(project.id())
            .await
            .expect("listing succeeds")
            .is_empty()
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn deleting_a_project_from_the_list_drops_its_tasks(store: Arc<InMemoryProjectStore>) {
    let project = seed_project(&store, "Thesis", "Final chapters").await;
    let task = commit_task(&store, &project, "Outline", &[]).await;
    let navigator = Arc::new(RecordingNavigator::default());
    let mut list = ProjectListService::new(Arc::clone(&store), Arc::clone(&navigator));
    list.refresh().await.expect("refresh succeeds");

    list.delete_project(project.id())
        .await
        .expect("delete succeeds");

    assert!(list.projects().is_empty());
    let orphan = TaskRepository::find_by_id(&*store, task.id())
        .await
        .expect("lookup succeeds");
    assert!(orphan.is_none());
    assert!(task_list(&store, &navigator).tasks(project.id()).await.is_err());
}
