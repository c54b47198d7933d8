//! Shared world state for project draft-commit BDD scenarios.

use std::sync::Arc;

use dailytask::project::{
    adapters::memory::InMemoryProjectStore,
    domain::{Placeholders, Project},
    services::{ProjectEditor, ProjectEditorError},
};
use mockable::DefaultClock;
use rstest::fixture;

/// Editor type used by the BDD world.
pub type TestProjectEditor =
    ProjectEditor<InMemoryProjectStore, InMemoryProjectStore, DefaultClock>;

/// Scenario world for project draft-commit behaviour tests.
pub struct ProjectDraftWorld {
    pub store: Arc<InMemoryProjectStore>,
    pub editor: Option<TestProjectEditor>,
    pub last_commit: Option<Result<Project, ProjectEditorError>>,
}

impl ProjectDraftWorld {
    /// Creates a world with an empty store and no open editor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            store: Arc::new(InMemoryProjectStore::new()),
            editor: None,
            last_commit: None,
        }
    }

    /// Opens a creation editor on the shared store.
    pub fn open_creation(&mut self) -> &mut TestProjectEditor {
        self.editor.insert(ProjectEditor::for_creation(
            Arc::clone(&self.store),
            Arc::clone(&self.store),
            Arc::new(DefaultClock),
            Placeholders::default(),
        ))
    }

    /// Returns the open editor.
    ///
    /// # Errors
    ///
    /// Returns an error when no step has opened an editor yet.
    pub fn editor_mut(&mut self) -> Result<&mut TestProjectEditor, eyre::Report> {
        self.editor
            .as_mut()
            .ok_or_else(|| eyre::eyre!("missing project editor in scenario world"))
    }

    /// Returns the project produced by the last successful commit.
    ///
    /// # Errors
    ///
    /// Returns an error when nothing was committed or the commit failed.
    pub fn committed(&self) -> Result<&Project, eyre::Report> {
        match self.last_commit.as_ref() {
            Some(Ok(project)) => Ok(project),
            Some(Err(err)) => Err(eyre::eyre!("expected a successful commit, got {err}")),
            None => Err(eyre::eyre!("missing commit result in scenario world")),
        }
    }
}

impl Default for ProjectDraftWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> ProjectDraftWorld {
    ProjectDraftWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
