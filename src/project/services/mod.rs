//! Application services for the project and task screens.

mod phase;
mod project_editor;
mod project_list;
mod task_editor;
mod task_list;

pub use phase::EditorPhase;
pub use project_editor::{ProjectEditor, ProjectEditorError, ProjectEditorResult};
pub use project_list::{ProjectListError, ProjectListResult, ProjectListService};
pub use task_editor::{TaskEditor, TaskEditorError, TaskEditorResult};
pub use task_list::{TaskListError, TaskListResult, TaskListService};
