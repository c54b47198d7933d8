//! Domain model for projects and their tasks.
//!
//! Holds the entities, the drafts used while editing them, and the pure
//! rules applied on commit: date ordering, name length, fallback text, and
//! list filtering. Nothing here touches storage.

mod appearance;
mod classification;
mod error;
mod filter;
mod ids;
mod project;
mod schedule;
mod task;
mod text;

pub use appearance::{DEFAULT_ICON, ICON_CATALOG, IconName, Rgb, Swatch, Tint};
pub use classification::{Methodology, Priority};
pub use error::{ParseMethodologyError, ParsePriorityError, ProjectDomainError};
pub use filter::{SearchMode, filter_projects, filter_projects_with};
pub use ids::{ProjectId, TaskId};
pub use project::{PersistedProjectData, Project, ProjectDraft};
pub use schedule::{DateRange, validate_date_order};
pub use task::{PersistedTaskData, Task, TaskDraft};
pub use text::{MAX_NAME_LENGTH, Placeholders};
