//! In-memory integration tests for the project screens.

use std::sync::Arc;

use super::helpers::{RecordingNavigator, Screen, project_draft, seed_project, store};
use dailytask::{
    config::DailyTaskConfig,
    project::{
        adapters::memory::InMemoryProjectStore,
        domain::{Methodology, Placeholders, ProjectDomainError, Swatch},
        ports::ProjectRepository,
        services::{EditorPhase, ProjectEditor, ProjectEditorError, ProjectListService},
    },
};
use mockable::DefaultClock;
use rstest::rstest;

fn creation_editor(
    store: &Arc<InMemoryProjectStore>,
) -> ProjectEditor<InMemoryProjectStore, InMemoryProjectStore, DefaultClock> {
    ProjectEditor::for_creation(
        Arc::clone(store),
        Arc::clone(store),
        Arc::new(DefaultClock),
        Placeholders::default(),
    )
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn created_project_appears_in_list_and_search(store: Arc<InMemoryProjectStore>) {
    let mut editor = creation_editor(&store);
    *editor.draft_mut().expect("draft is open") = project_draft("Thesis", "Final chapters");
    editor
        .draft_mut()
        .expect("draft is open")
        .select_icon("graduationcap")
        .expect("catalog icon");
    let created = editor.commit().await.expect("valid draft commits");
    seed_project(&store, "Garden", "Tomatoes").await;

    let navigator = Arc::new(RecordingNavigator::default());
    let mut list = ProjectListService::new(Arc::clone(&store), Arc::clone(&navigator));
    let loaded = list.refresh().await.expect("refresh succeeds").len();

    assert_eq!(loaded, 2);
    assert_eq!(list.search("chapters"), vec![created.clone()]);
    assert!(list.search("Chapters").is_empty());
    list.open_task_list(created.id()).expect("project is loaded");
    assert_eq!(navigator.screens(), vec![Screen::TaskList(created.id())]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn configured_placeholders_and_search_mode_apply(store: Arc<InMemoryProjectStore>) {
    let config = DailyTaskConfig::from_toml_str(
        r#"
[placeholders]
no_name = "Sem nome"

[search]
case_sensitive = false
"#,
    )
    .expect("config parses");

    let mut editor = ProjectEditor::for_creation(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::new(DefaultClock),
        config.placeholders.clone(),
    );
    let created = editor.commit().await.expect("template commits");
    let mut list = ProjectListService::new(
        Arc::clone(&store),
        Arc::new(RecordingNavigator::default()),
    )
    .with_search_mode(config.search_mode());
    list.refresh().await.expect("refresh succeeds");

    assert_eq!(created.name(), "Sem nome");
    assert_eq!(created.description(), "No description");
    assert_eq!(list.search("SEM"), vec![created]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn viewing_then_editing_an_existing_project(store: Arc<InMemoryProjectStore>) {
    let project = seed_project(&store, "Thesis", "Final chapters").await;
    let navigator = Arc::new(RecordingNavigator::default());
    let mut list = ProjectListService::new(Arc::clone(&store), Arc::clone(&navigator));
    list.refresh().await.expect("refresh succeeds");
    list.open_project_edition(project.id(), false)
        .expect("project is loaded");
    list.open_project_creation();

    let mut editor = ProjectEditor::for_existing(
        Arc::clone(&store),
        Arc::clone(&store),
        Arc::new(DefaultClock),
        project.id(),
    )
    .await
    .expect("project exists");
    assert_eq!(editor.phase(), EditorPhase::Viewing);
    {
        let draft = editor.begin_editing();
        draft.methodology = Methodology::Scrum;
        draft.select_swatch(Swatch::Purple);
    }
    let updated = editor.commit().await.expect("edit commits");

    assert_eq!(
        navigator.screens(),
        vec![
            Screen::ProjectEdition {
                project: project.id(),
                editable: false,
            },
            Screen::ProjectCreation,
        ]
    );
    assert_eq!(updated.name(), "Thesis");
    assert_eq!(updated.methodology(), Methodology::Scrum);
    assert_eq!(updated.color(), Swatch::Purple.rgb());
    let stored = ProjectRepository::find_by_id(&*store, project.id())
        .await
        .expect("lookup succeeds");
    assert_eq!(stored, Some(updated));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unknown_icon_selection_leaves_draft_unchanged(store: Arc<InMemoryProjectStore>) {
    let mut editor = creation_editor(&store);
    let draft = editor.draft_mut().expect("draft is open");

    let result = draft.select_icon("rocket");

    assert_eq!(
        result,
        Err(ProjectDomainError::UnknownIcon("rocket".to_owned()))
    );
    assert_eq!(draft.icon.as_str(), "pencil.tip");
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn overlong_name_is_rejected_on_commit(store: Arc<InMemoryProjectStore>) {
    let mut editor = creation_editor(&store);
    editor.draft_mut().expect("draft is open").name = "n".repeat(51);

    let result = editor.commit().await;

    assert!(matches!(
        result,
        Err(ProjectEditorError::Domain(
            ProjectDomainError::NameTooLong { length: 51, max: 50 }
        ))
    ));
    assert!(store.fetch_projects().await.expect("fetch succeeds").is_empty());
}
