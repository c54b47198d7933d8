//! Free-text rules shared by project and task drafts.

use super::ProjectDomainError;
use serde::{Deserialize, Serialize};

/// Longest accepted project or task name, in characters.
pub const MAX_NAME_LENGTH: usize = 50;

/// Localized fallback text used when a draft leaves a field empty.
///
/// Both texts are non-blank and the name fallback fits [`MAX_NAME_LENGTH`],
/// so a committed name or description is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawPlaceholders")]
pub struct Placeholders {
    no_name: String,
    no_description: String,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawPlaceholders {
    no_name: String,
    no_description: String,
}

impl Default for RawPlaceholders {
    fn default() -> Self {
        Self {
            no_name: "No name".to_owned(),
            no_description: "No description".to_owned(),
        }
    }
}

impl TryFrom<RawPlaceholders> for Placeholders {
    type Error = ProjectDomainError;

    fn try_from(raw: RawPlaceholders) -> Result<Self, Self::Error> {
        Self::new(raw.no_name, raw.no_description)
    }
}

impl Placeholders {
    /// Creates validated fallback texts.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::BlankPlaceholder`] when either text is
    /// blank, or [`ProjectDomainError::NameTooLong`] when the name fallback
    /// exceeds the length limit.
    pub fn new(
        no_name: impl Into<String>,
        no_description: impl Into<String>,
    ) -> Result<Self, ProjectDomainError> {
        let name = no_name.into();
        let description = no_description.into();
        if name.trim().is_empty() {
            return Err(ProjectDomainError::BlankPlaceholder("no_name"));
        }
        if description.trim().is_empty() {
            return Err(ProjectDomainError::BlankPlaceholder("no_description"));
        }
        check_name_length(&name)?;
        Ok(Self {
            no_name: name,
            no_description: description,
        })
    }

    /// Name stored when the user leaves the name blank.
    #[must_use]
    pub fn no_name(&self) -> &str {
        &self.no_name
    }

    /// Description stored when the user leaves the description blank.
    #[must_use]
    pub fn no_description(&self) -> &str {
        &self.no_description
    }
}

impl Default for Placeholders {
    fn default() -> Self {
        let raw = RawPlaceholders::default();
        Self {
            no_name: raw.no_name,
            no_description: raw.no_description,
        }
    }
}

pub(super) fn check_name_length(name: &str) -> Result<(), ProjectDomainError> {
    let length = name.chars().count();
    if length > MAX_NAME_LENGTH {
        return Err(ProjectDomainError::NameTooLong {
            length,
            max: MAX_NAME_LENGTH,
        });
    }
    Ok(())
}

/// Returns `value`, or `fallback` when `value` is blank.
///
/// Whitespace-only input counts as blank, not only the empty string.
pub(super) fn or_fallback(value: String, fallback: &str) -> String {
    if value.trim().is_empty() {
        fallback.to_owned()
    } else {
        value
    }
}
