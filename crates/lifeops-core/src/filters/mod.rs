//! In-memory filtering and sorting for list screens.
//!
//! Repositories fetch rows in their default order; the types here narrow and
//! reorder them. All filters are plain data with `Default` = "show everything".

pub mod journal;
pub mod tag;
pub mod task;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

pub use journal::JournalFilter;
pub use tag::{TagSortField, TagStatsQuery};
pub use task::{DueWindow, TaskQuery, TaskSortField};

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Apply the direction to an ascending comparison.
    #[must_use]
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            Self::Asc => ordering,
            Self::Desc => ordering.reverse(),
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Completion state filter shared by tasks and todos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Completion {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl Completion {
    #[must_use]
    pub const fn matches(self, is_completed: bool) -> bool {
        match self {
            Self::All => true,
            Self::Completed => is_completed,
            Self::Incomplete => !is_completed,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Completed => "completed",
            Self::Incomplete => "incomplete",
        }
    }
}

impl fmt::Display for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Todo list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoFilter {
    pub completion: Completion,
}

/// Milestone list filter. `None` fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MilestoneFilter {
    pub status: Option<crate::enums::MilestoneStatus>,
    pub priority: Option<crate::enums::Priority>,
}

impl MilestoneFilter {
    #[must_use]
    pub fn matches(&self, milestone: &crate::entities::Milestone) -> bool {
        self.status.is_none_or(|s| s == milestone.status)
            && self.priority.is_none_or(|p| p == milestone.priority)
    }
}

/// Lowercased needle, or `None` when the search box is blank.
pub(crate) fn normalize_search(search: Option<&str>) -> Option<String> {
    search
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase)
}

/// Case-insensitive substring test against any of `haystacks`.
pub(crate) fn matches_search(needle: &str, haystacks: &[&str]) -> bool {
    haystacks.iter().any(|h| h.to_lowercase().contains(needle))
}

/// `true` when `carried` holds every id in `required`.
pub(crate) fn has_all_tags(carried: &[String], required: &[String]) -> bool {
    required.iter().all(|tag| carried.contains(tag))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion_matches() {
        assert!(Completion::All.matches(true));
        assert!(Completion::All.matches(false));
        assert!(Completion::Completed.matches(true));
        assert!(!Completion::Completed.matches(false));
        assert!(Completion::Incomplete.matches(false));
        assert!(!Completion::Incomplete.matches(true));
    }

    #[test]
    fn blank_search_is_off() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("   ")), None);
        assert_eq!(normalize_search(Some(" Rust ")), Some("rust".to_string()));
    }

    #[test]
    fn tag_requirement_is_all_of() {
        let carried = vec!["tag-a".to_string(), "tag-b".to_string()];
        assert!(has_all_tags(&carried, &[]));
        assert!(has_all_tags(&carried, &["tag-a".to_string()]));
        assert!(!has_all_tags(
            &carried,
            &["tag-a".to_string(), "tag-c".to_string()]
        ));
    }

    #[test]
    fn desc_reverses() {
        assert_eq!(SortOrder::Desc.apply(Ordering::Less), Ordering::Greater);
        assert_eq!(SortOrder::Asc.apply(Ordering::Less), Ordering::Less);
    }
}
