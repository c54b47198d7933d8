//! Diesel row models for project and task persistence.

use super::schema::{projects, tasks};
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for project records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = projects)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Red channel.
    pub red: f64,
    /// Green channel.
    pub green: f64,
    /// Blue channel.
    pub blue: f64,
    /// Symbol identifier.
    pub icon: String,
    /// Methodology storage string.
    pub methodology: String,
    /// Schedule start.
    pub start_at: DateTime<Utc>,
    /// Schedule end.
    pub end_at: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for project records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = projects)]
pub struct NewProjectRow {
    /// Project identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Red channel.
    pub red: f64,
    /// Green channel.
    pub green: f64,
    /// Blue channel.
    pub blue: f64,
    /// Symbol identifier.
    pub icon: String,
    /// Methodology storage string.
    pub methodology: String,
    /// Schedule start.
    pub start_at: DateTime<Utc>,
    /// Schedule end.
    pub end_at: DateTime<Utc>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Red channel.
    pub red: f64,
    /// Green channel.
    pub green: f64,
    /// Blue channel.
    pub blue: f64,
    /// Symbol identifier.
    pub icon: String,
    /// Priority storage string.
    pub priority: String,
    /// Schedule start.
    pub start_at: DateTime<Utc>,
    /// Schedule end.
    pub end_at: DateTime<Utc>,
    /// Subtask JSON array.
    pub subtasks: Value,
    /// Completion flag.
    pub done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert and update model for task records.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Owning project.
    pub project_id: uuid::Uuid,
    /// Display name.
    pub name: String,
    /// Description.
    pub description: String,
    /// Red channel.
    pub red: f64,
    /// Green channel.
    pub green: f64,
    /// Blue channel.
    pub blue: f64,
    /// Symbol identifier.
    pub icon: String,
    /// Priority storage string.
    pub priority: String,
    /// Schedule start.
    pub start_at: DateTime<Utc>,
    /// Schedule end.
    pub end_at: DateTime<Utc>,
    /// Subtask JSON array.
    pub subtasks: Value,
    /// Completion flag.
    pub done: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
