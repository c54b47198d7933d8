//! Project aggregate root and its editable draft.

use super::{
    DateRange, IconName, Methodology, Placeholders, ProjectDomainError, ProjectId, Rgb, Swatch,
    Task,
    text::{check_name_length, or_fallback},
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// Mutable working copy of a project.
///
/// Dates are stored unchecked so the user can move either end freely; the
/// ordering is enforced when the draft is committed.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectDraft {
    /// Project name; blank means "use the fallback".
    pub name: String,
    /// Project description; blank means "use the fallback".
    pub description: String,
    /// Background colour.
    pub color: Rgb,
    /// Symbol identifier.
    pub icon: IconName,
    /// Chosen methodology.
    pub methodology: Methodology,
    /// Requested start instant.
    pub start: DateTime<Utc>,
    /// Requested end instant.
    pub end: DateTime<Utc>,
}

impl ProjectDraft {
    /// Creates an empty draft for a new project, scheduled at `now`.
    #[must_use]
    pub fn template(now: DateTime<Utc>) -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            color: Rgb::default(),
            icon: IconName::default(),
            methodology: Methodology::default(),
            start: now,
            end: now,
        }
    }

    /// Seeds a draft from a persisted project.
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            color: project.color,
            icon: project.icon.clone(),
            methodology: project.methodology,
            start: project.schedule.start(),
            end: project.schedule.end(),
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

    /// Returns the validated schedule of the draft.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidDateRange`] when `end` is before
    /// `start`.
    pub fn schedule(&self) -> Result<DateRange, ProjectDomainError> {
        DateRange::new(self.start, self.end)
    }
}

/// Project aggregate root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    id: ProjectId,
    name: String,
    description: String,
    color: Rgb,
    icon: IconName,
    methodology: Methodology,
    schedule: DateRange,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted project.
#[derive(Debug, Clone, PartialEq)]
pub struct PersistedProjectData {
    /// Persisted project identifier.
    pub id: ProjectId,
    /// Persisted name.
    pub name: String,
    /// Persisted description.
    pub description: String,
    /// Persisted colour.
    pub color: Rgb,
    /// Persisted icon.
    pub icon: IconName,
    /// Persisted methodology.
    pub methodology: Methodology,
    /// Persisted deadline window.
    pub schedule: DateRange,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Creates a new project from a committed draft.
    ///
    /// Blank names and descriptions are replaced by `placeholders`.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidDateRange`] when the draft ends
    /// before it starts, or [`ProjectDomainError::NameTooLong`] when the name
    /// exceeds the length limit.
    pub fn create(
        draft: ProjectDraft,
        placeholders: &Placeholders,
        clock: &impl Clock,
    ) -> Result<Self, ProjectDomainError> {
        let schedule = draft.schedule()?;
        let name = or_fallback(draft.name, placeholders.no_name());
        check_name_length(&name)?;
        let timestamp = clock.utc();

        Ok(Self {
            id: ProjectId::new(),
            name,
            description: or_fallback(draft.description, placeholders.no_description()),
            color: draft.color,
            icon: draft.icon,
            methodology: draft.methodology,
            schedule,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a project from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProjectData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            color: data.color,
            icon: data.icon,
            methodology: data.methodology,
            schedule: data.schedule,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the project identifier.
    #[must_use]
    pub const fn id(&self) -> ProjectId {
        self.id
    }

    /// Returns the project name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the project description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the background colour.
    #[must_use]
    pub const fn color(&self) -> Rgb {
        self.color
    }

    /// Returns the icon.
    #[must_use]
    pub const fn icon(&self) -> &IconName {
        &self.icon
    }

    /// Returns the methodology.
    #[must_use]
    pub const fn methodology(&self) -> Methodology {
        self.methodology
    }

    /// Returns the deadline window.
    #[must_use]
    pub const fn schedule(&self) -> DateRange {
        self.schedule
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

    /// Overwrites this project with an edited draft.
    ///
    /// Blank names and descriptions keep their current values. Nothing is
    /// changed when validation fails.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidDateRange`] when the draft ends
    /// before it starts, or [`ProjectDomainError::NameTooLong`] when the name
    /// exceeds the length limit.
    pub fn apply(
        &mut self,
        draft: ProjectDraft,
        clock: &impl Clock,
    ) -> Result<(), ProjectDomainError> {
        let schedule = draft.schedule()?;
        let name = or_fallback(draft.name, &self.name);
        check_name_length(&name)?;

        self.name = name;
        self.description = or_fallback(draft.description, &self.description);
        self.color = draft.color;
        self.icon = draft.icon;
        self.methodology = draft.methodology;
        self.schedule = schedule;
        self.updated_at = clock.utc();
        Ok(())
    }

    /// Checks that every task of this project fits its schedule.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskOutsideProject`] when a task starts
    /// before or ends after the project window.
    pub fn ensure_covers(&self, tasks: &[Task]) -> Result<(), ProjectDomainError> {
        if tasks
            .iter()
            .any(|task| !self.schedule.contains(&task.schedule()))
        {
            return Err(ProjectDomainError::TaskOutsideProject);
        }
        Ok(())
    }
}
