//! Shared test helpers for in-memory store integration tests.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, TimeZone, Utc};
use dailytask::project::{
    adapters::memory::InMemoryProjectStore,
    domain::{Placeholders, Project, ProjectDraft, ProjectId},
    ports::{Navigator, ProjectRepository},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Provides a fresh in-memory store for each test.
#[fixture]
pub fn store() -> Arc<InMemoryProjectStore> {
    Arc::new(InMemoryProjectStore::new())
}

/// Fixed project start used across tests.
#[must_use]
pub fn kickoff() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 2, 8, 30, 0)
        .single()
        .expect("valid calendar date")
}

/// Builds a draft spanning four weeks from [`kickoff`].
#[must_use]
pub fn project_draft(name: &str, description: &str) -> ProjectDraft {
    let mut draft = ProjectDraft::template(kickoff());
    draft.name = name.to_owned();
    draft.description = description.to_owned();
    draft.end = kickoff() + Duration::weeks(4);
    draft
}

/// Creates and stores a project built from [`project_draft`].
pub async fn seed_project(store: &InMemoryProjectStore, name: &str, description: &str) -> Project {
    let project = Project::create(
        project_draft(name, description),
        &Placeholders::default(),
        &DefaultClock,
    )
    .expect("valid project draft");
    ProjectRepository::store(store, &project)
        .await
        .expect("store project");
    project
}

/// Screen request captured by [`RecordingNavigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    ProjectCreation,
    ProjectEdition { project: ProjectId, editable: bool },
    TaskList(ProjectId),
    TaskCreation(ProjectId),
}

/// Navigator that records every requested screen in order.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    screens: Mutex<Vec<Screen>>,
}

impl RecordingNavigator {
    /// Returns the screens requested so far.
    #[must_use]
    pub fn screens(&self) -> Vec<Screen> {
        self.screens.lock().expect("navigator lock").clone()
    }

    fn record(&self, screen: Screen) {
        self.screens.lock().expect("navigator lock").push(screen);
    }
}

impl Navigator for RecordingNavigator {
    fn present_project_creation(&self) {
        self.record(Screen::ProjectCreation);
    }

    fn present_project_edition(&self, project: &Project, editable: bool) {
        self.record(Screen::ProjectEdition {
            project: project.id(),
            editable,
        });
    }

    fn present_task_list(&self, project: &Project) {
        self.record(Screen::TaskList(project.id()));
    }

    fn present_task_creation(&self, project: &Project) {
        self.record(Screen::TaskCreation(project.id()));
    }
}
