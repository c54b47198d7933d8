//! Navigation port through which services ask for screen changes.

use crate::project::domain::Project;

/// Screen coordinator used by the list and editor services.
///
/// Implementations own presentation; services only state which screen
/// should appear next.
#[cfg_attr(test, mockall::automock)]
pub trait Navigator: Send + Sync {
    /// Presents the project creation screen.
    fn present_project_creation(&self);

    /// Presents the project edition screen, read-only unless `editable`.
    fn present_project_edition(&self, project: &Project, editable: bool);

    /// Presents the task list of a project.
    fn present_task_list(&self, project: &Project);

    /// Presents the task creation screen for a project.
    fn present_task_creation(&self, project: &Project);
}
