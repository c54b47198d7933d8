//! Search over the project list.

use super::Project;
use serde::{Deserialize, Serialize};

/// How the search query is compared with project text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Exact substring match.
    #[default]
    CaseSensitive,
    /// Substring match after lowercasing both sides.
    CaseInsensitive,
}

impl SearchMode {
    /// Returns `true` when `haystack` contains `query` under this mode.
    #[must_use]
    pub fn contains(self, haystack: &str, query: &str) -> bool {
        match self {
            Self::CaseSensitive => haystack.contains(query),
            Self::CaseInsensitive => haystack.to_lowercase().contains(&query.to_lowercase()),
        }
    }
}

/// Returns the projects whose name or description contains `query`.
///
/// The comparison is case-sensitive and the input order is kept. An empty
/// query returns every project.
#[must_use]
pub fn filter_projects(all: &[Project], query: &str) -> Vec<Project> {
    filter_projects_with(all, query, SearchMode::CaseSensitive)
}

/// Like [`filter_projects`], with an explicit comparison mode.
#[must_use]
pub fn filter_projects_with(all: &[Project], query: &str, mode: SearchMode) -> Vec<Project> {
    if query.is_empty() {
        return all.to_vec();
    }
    all.iter()
        .filter(|project| {
            mode.contains(project.name(), query) || mode.contains(project.description(), query)
        })
        .cloned()
        .collect()
}
