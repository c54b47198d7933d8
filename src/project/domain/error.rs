//! Error types for project and task domain validation and parsing.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors returned while constructing or mutating project and task values.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ProjectDomainError {
    /// The end of a schedule falls before its start.
    #[error("end date {end} is before start date {start}")]
    InvalidDateRange {
        /// Requested start instant.
        start: DateTime<Utc>,
        /// Requested end instant.
        end: DateTime<Utc>,
    },

    /// A colour channel is not a finite value in `[0, 1]`.
    #[error("invalid {channel} component {value}, expected a value in [0, 1]")]
    InvalidColorComponent {
        /// Channel name (`red`, `green` or `blue`).
        channel: &'static str,
        /// Rejected value.
        value: f64,
    },

    /// The icon identifier is empty after trimming.
    #[error("icon name must not be empty")]
    EmptyIcon,

    /// The icon identifier is not part of the selectable catalog.
    #[error("unknown icon: {0}")]
    UnknownIcon(String),

    /// A name exceeds the maximum accepted length.
    #[error("name is {length} characters long, the limit is {max}")]
    NameTooLong {
        /// Length of the rejected name in characters.
        length: usize,
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// A configured fallback text is blank.
    #[error("placeholder {0} must not be blank")]
    BlankPlaceholder(&'static str),

    /// A task schedule does not fit inside its project's schedule.
    #[error("task schedule must lie within the project schedule")]
    TaskOutsideProject,

    /// A subtask position does not exist.
    #[error("subtask index {index} is out of range for {len} subtasks")]
    SubtaskOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of subtasks in the draft.
        len: usize,
    },
}

/// Error returned while parsing methodologies from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown methodology: {0}")]
pub struct ParseMethodologyError(pub String);

/// Error returned while parsing task priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
