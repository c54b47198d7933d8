//! Enumerated tags attached to projects and tasks.

use super::{ParseMethodologyError, ParsePriorityError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Project-management style followed by a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Methodology {
    /// Challenge Based Learning.
    #[default]
    ChallengeBasedLearning,
    /// Scrum sprints.
    Scrum,
    /// Kanban board.
    Kanban,
    /// Sequential phases.
    Waterfall,
}

impl Methodology {
    /// Every methodology in menu order.
    pub const ALL: [Self; 4] = [
        Self::ChallengeBasedLearning,
        Self::Scrum,
        Self::Kanban,
        Self::Waterfall,
    ];

    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ChallengeBasedLearning => "challenge_based_learning",
            Self::Scrum => "scrum",
            Self::Kanban => "kanban",
            Self::Waterfall => "waterfall",
        }
    }

    /// Returns the human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ChallengeBasedLearning => "Challenge Based Learning (CBL)",
            Self::Scrum => "Scrum",
            Self::Kanban => "Kanban",
            Self::Waterfall => "Waterfall",
        }
    }
}

impl TryFrom<&str> for Methodology {
    type Error = ParseMethodologyError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "challenge_based_learning" | "cbl" => Ok(Self::ChallengeBasedLearning),
            "scrum" => Ok(Self::Scrum),
            "kanban" => Ok(Self::Kanban),
            "waterfall" => Ok(Self::Waterfall),
            _ => Err(ParseMethodologyError(value.to_owned())),
        }
    }
}

impl fmt::Display for Methodology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Task urgency chosen in the priority selector.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Low urgency.
    Low,
    /// Medium urgency.
    Medium,
    /// High urgency.
    High,
    /// No urgency chosen.
    #[default]
    NoPriority,
}

impl Priority {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::NoPriority => "no_priority",
        }
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParsePriorityError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "no_priority" => Ok(Self::NoPriority),
            _ => Err(ParsePriorityError(value.to_owned())),
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
