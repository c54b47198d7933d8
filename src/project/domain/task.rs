//! Task entity owned by a project, and its editable draft.

use super::{
    DateRange, IconName, Placeholders, Priority, Project, ProjectDomainError, ProjectId, Rgb,
    Swatch, TaskId,
    text::{check_name_length, or_fallback},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Mutable working copy of a task.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDraft {
    /// Task name; blank means "use the fallback".
    pub name: String,
    /// Task description; blank means "use the fallback".
    pub description: String,
    /// Accent colour.
    pub color: Rgb,
    /// Symbol identifier.
    pub icon: IconName,
    /// Chosen priority.
    pub priority: Priority,
    /// Requested start instant.
    pub start: DateTime<Utc>,
    /// Requested end instant.
    pub end: DateTime<Utc>,
    subtasks: Vec<String>,
}

impl TaskDraft {
    /// Creates an empty draft for a new task of `project`.
    ///
    /// Both dates default to `now`, pulled inside the project schedule.
    #[must_use]
    pub fn template(project: &Project, now: DateTime<Utc>) -> Self {
        let window = project.schedule();
        let at = now.clamp(window.start(), window.end());
        Self {
            name: String::new(),
            description: String::new(),
            color: Rgb::default(),
            icon: IconName::default(),
            priority: Priority::default(),
            start: at,
            end: at,
            subtasks: Vec::new(),
        }
    }

    /// Seeds a draft from a persisted task.
    #[must_use]
    pub fn from_task(task: &Task) -> Self {
        Self {
            name: task.name.clone(),
            description: task.description.clone(),
            color: task.color,
            icon: task.icon.clone(),
            priority: task.priority,
            start: task.schedule.start(),
            end: task.schedule.end(),
            subtasks: task.subtasks.clone(),
        }
    }

    /// Picks a palette colour.
    pub const fn select_swatch(&mut self, swatch: Swatch) {
        self.color = swatch.rgb();
    }

    /// Picks an icon from the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::UnknownIcon`] or
    /// [`ProjectDomainError::EmptyIcon`] when the icon cannot be selected.
    pub fn select_icon(&mut self, icon: &str) -> Result<(), ProjectDomainError> {
        self.icon = IconName::from_catalog(icon)?;
        Ok(())
    }

    /// Returns the subtasks in display order.
    #[must_use]
    pub fn subtasks(&self) -> &[String] {
        &self.subtasks
    }

    /// Appends a subtask and returns its position.
    pub fn push_subtask(&mut self, text: impl Into<String>) -> usize {
        self.subtasks.push(text.into());
        self.subtasks.len() - 1
    }

    /// Replaces the text of the subtask at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::SubtaskOutOfRange`] when `index` does
    /// not exist.
    pub fn set_subtask(
        &mut self,
        index: usize,
        text: impl Into<String>,
    ) -> Result<(), ProjectDomainError> {
        let len = self.subtasks.len();
        let slot = self
            .subtasks
            .get_mut(index)
            .ok_or(ProjectDomainError::SubtaskOutOfRange { index, len })?;
        *slot = text.into();
        Ok(())
    }

    /// Removes the subtask at `index`, shifting later ones up.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::SubtaskOutOfRange`] when `index` does
    /// not exist.
    pub fn remove_subtask(&mut self, index: usize) -> Result<String, ProjectDomainError> {
        let len = self.subtasks.len();
        if index >= len {
            return Err(ProjectDomainError::SubtaskOutOfRange { index, len });
        }
        Ok(self.subtasks.remove(index))
    }

    /// Validates the draft dates against each other and the parent project.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidDateRange`] when `end` is before
    /// `start`, or [`ProjectDomainError::TaskOutsideProject`] when the range
    /// leaves the project schedule.
    pub fn schedule_within(&self, project: &Project) -> Result<DateRange, ProjectDomainError> {
        let schedule = DateRange::new(self.start, self.end)?;
        if !project.schedule().contains(&schedule) {
            return Err(ProjectDomainError::TaskOutsideProject);
        }
        Ok(schedule)
    }
}

/// Task entity belonging to a project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    project_id: ProjectId,
    name: String,
    description: String,
    color: Rgb,
    icon: IconName,
    priority: Priority,
    schedule: DateRange,
    subtasks: Vec<String>,
    done: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Owning project.
    pub project_id: ProjectId,
    /// Persisted name.
    pub name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted colour.
    pub color: Rgb,
    /// Persisted icon.
    pub icon: IconName,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted deadline window.
    pub schedule: DateRange,
    /// Persisted subtasks in display order.
    pub subtasks: Vec<String>,
    /// Persisted completion flag.
    pub done: bool,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in `project` from a committed draft.
    ///
    /// Blank names and descriptions are replaced by `placeholders`.
    ///
    /// # Errors
    ///
    /// Returns a [`ProjectDomainError`] when the dates are out of order, the
    /// schedule leaves the project window, or the name is too long.
    pub fn create(
        project: &Project,
        draft: TaskDraft,
        placeholders: &Placeholders,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let schedule = draft.schedule_within(project)?;
        let name = or_fallback(draft.name, placeholders.no_name());
        check_name_length(&name)?;
        let timestamp = clock.utc();

        Ok(Self {
            id: TaskId::new(),
            project_id: project.id(),
            name,
            description: or_fallback(draft.description, placeholders.no_description()),
            color: draft.color,
            icon: draft.icon,
            priority: draft.priority,
            schedule,
            subtasks: draft.subtasks,
            done: false,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            project_id: data.project_id,
            name: data.name,
            description: data.description,
            color: data.color,
            icon: data.icon,
            priority: data.priority,
            schedule: data.schedule,
            subtasks: data.subtasks,
            done: data.done,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning project identifier.
    #[must_use]
    pub const fn project_id(&self) -> ProjectId {
        self.project_id
    }

    /// Returns the task name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the accent colour.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Returns the icon.
    #[must_use]
    pub const fn icon(&self) -> &IconName {
        &self.icon
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the deadline window.
    #[must_use]
    pub const fn schedule(&self) -> DateRange {
        self.schedule
    }

    /// Returns the subtasks in display order.
    #[must_use]
    pub fn subtasks(&self) -> &[String] {
        &self.subtasks
    }

    /// Returns `true` once the task has been checked off.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        self.done
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest modification timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Overwrites this task with an edited draft.
    ///
    /// Blank names and descriptions keep their current values. Nothing is
    /// changed when validation fails.
    ///
    /// # Errors
    ///
    /// Returns a [`ProjectDomainError`] when the dates are out of order, the
    /// schedule leaves the project window, or the name is too long.
    pub fn apply(
        &mut self,
        project: &Project,
        draft: TaskDraft,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        let schedule = draft.schedule_within(project)?;
        let name = or_fallback(draft.name, &self.name);
        check_name_length(&name)?;

        self.name = name;
        self.description = or_fallback(draft.description, &self.description);
        self.color = draft.color;
        self.icon = draft.icon;
        self.priority = draft.priority;
        self.schedule = schedule;
        self.subtasks = draft.subtasks;
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Flips the completion checkbox.
    pub fn toggle_done(&mut self, clock: &impl Clock) {
        self.done = !self.done;
        self.updated_at = clock.utc();
    }
}
