//! Port contracts for project and task management.
//!
//! Ports define infrastructure-agnostic interfaces used by the services.

pub mod navigation;
pub mod repository;

#[cfg(test)]
pub use navigation::MockNavigator;
pub use navigation::Navigator;
pub use repository::{
    ProjectRepository, ProjectRepositoryError, ProjectRepositoryResult, TaskRepository,
    TaskRepositoryError, TaskRepositoryResult,
};
