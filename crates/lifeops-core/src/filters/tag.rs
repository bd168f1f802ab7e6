//! Tag usage statistics filter and sort.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::{SortOrder, matches_search, normalize_search};
use crate::responses::TagStat;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TagSortField {
    Name,
    TaskCount,
    JournalCount,
    #[default]
    TotalCount,
}

impl TagSortField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::TaskCount => "task_count",
            Self::JournalCount => "journal_count",
            Self::TotalCount => "total_count",
        }
    }
}

impl fmt::Display for TagSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Search and sort for the tag manager. Defaults to most-used first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TagStatsQuery {
    /// Case-insensitive substring of the tag name.
    pub search: Option<String>,
    pub sort: TagSortField,
    pub order: SortOrder,
}

impl Default for TagStatsQuery {
    fn default() -> Self {
        Self {
            search: None,
            sort: TagSortField::TotalCount,
            order: SortOrder::Desc,
        }
    }
}

impl TagStatsQuery {
    #[must_use]
    pub fn compare(&self, a: &TagStat, b: &TagStat) -> Ordering {
        let ordering = match self.sort {
            TagSortField::Name => a.tag.name.cmp(&b.tag.name),
            TagSortField::TaskCount => a.task_count.cmp(&b.task_count),
            TagSortField::JournalCount => a.journal_count.cmp(&b.journal_count),
            TagSortField::TotalCount => a.total_count.cmp(&b.total_count),
        };
        self.order.apply(ordering)
    }

    /// Filter by name then stable-sort.
    #[must_use]
    pub fn apply(&self, stats: Vec<TagStat>) -> Vec<TagStat> {
        let needle = normalize_search(self.search.as_deref());
        let mut kept: Vec<TagStat> = stats
            .into_iter()
            .filter(|s| {
                needle
                    .as_deref()
                    .is_none_or(|n| matches_search(n, &[&s.tag.name]))
            })
            .collect();
        kept.sort_by(|a, b| self.compare(a, b));
        kept
    }
}
