//! Deadline windows shared by projects and tasks.

use super::ProjectDomainError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Returns `true` when `start` does not come after `end`.
///
/// Equal instants are accepted.
#[must_use]
pub fn validate_date_order(start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    start <= end
}

/// Validated start/end window with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unchecked wire form of [`DateRange`].
#[derive(Deserialize)]
struct RawDateRange {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = ProjectDomainError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        Self::new(raw.start, raw.end)
    }
}

impl DateRange {
    /// Creates a validated range.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::InvalidDateRange`] when `end` is before
    /// `start`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self, ProjectDomainError> {
        if !validate_date_order(start, end) {
            return Err(ProjectDomainError::InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates a zero-length range at the given instant.
    #[must_use]
    pub const fn instant(at: DateTime<Utc>) -> Self {
        Self { start: at, end: at }
    }

    /// Returns the start instant.
    #[must_use]
    pub const fn start(&self) -> DateTime<Utc> {
        self.start
    }

    /// Returns the end instant.
    #[must_use]
    pub const fn end(&self) -> DateTime<Utc> {
        self.end
    }

    /// Returns `true` when `other` lies entirely within this range.
    #[must_use]
    pub fn contains(&self, other: &Self) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}
