//! Task list filtering and sorting.

use chrono::{Duration, NaiveDate};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use super::{Completion, SortOrder, has_all_tags, matches_search, normalize_search};
use crate::entities::Task;
use crate::enums::{Priority, TaskCategory, TaskFrequency};

/// Due date window. Tasks without a due date pass every window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DueWindow {
    #[default]
    All,
    /// Due exactly today.
    Today,
    /// Due on or before today + 7 days, past dates included.
    Week,
    /// Due before today and not completed.
    Overdue,
}

impl DueWindow {
    #[must_use]
    pub fn matches(self, task: &Task, today: NaiveDate) -> bool {
        let Some(due) = task.due_date else {
            return true;
        };
        match self {
            Self::All => true,
            Self::Today => due == today,
            Self::Week => due <= today + Duration::days(7),
            Self::Overdue => due < today && !task.is_completed,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Today => "today",
            Self::Week => "week",
            Self::Overdue => "overdue",
        }
    }
}

impl fmt::Display for DueWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TaskSortField {
    #[default]
    DueDate,
    Priority,
    CreatedAt,
}

impl TaskSortField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DueDate => "due_date",
            Self::Priority => "priority",
            Self::CreatedAt => "created_at",
        }
    }
}

impl fmt::Display for TaskSortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filters and sort for the task list. The default shows every task by due
/// date ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TaskQuery {
    pub search: Option<String>,
    pub category: Option<TaskCategory>,
    pub priority: Option<Priority>,
    pub frequency: Option<TaskFrequency>,
    pub completion: Completion,
    pub due: DueWindow,
    /// Tag IDs; a task must carry all of them.
    pub tags: Vec<String>,
    pub sort: TaskSortField,
    pub order: SortOrder,
}

impl TaskQuery {
    /// Whether `task` passes every filter.
    #[must_use]
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        if let Some(needle) = normalize_search(self.search.as_deref()) {
            if !matches_search(&needle, &[&task.title, &task.description]) {
                return false;
            }
        }
        if self.category.is_some_and(|c| c != task.category)
            || self.priority.is_some_and(|p| p != task.priority)
            || self.frequency.is_some_and(|f| f != task.frequency)
        {
            return false;
        }
        self.completion.matches(task.is_completed)
            && self.due.matches(task, today)
            && has_all_tags(&task.tags, &self.tags)
    }

    /// Ordering of two tasks under this query's sort.
    #[must_use]
    pub fn compare(&self, a: &Task, b: &Task) -> Ordering {
        let ordering = match self.sort {
            TaskSortField::DueDate => match (a.due_date, b.due_date) {
                (Some(x), Some(y)) => x.cmp(&y),
                (Some(_), None) => Ordering::Less,
                (None, Some(_)) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            TaskSortField::Priority => a.priority.rank().cmp(&b.priority.rank()),
            TaskSortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        self.order.apply(ordering)
    }

    /// Filter then stable-sort `tasks`.
    #[must_use]
    pub fn apply(&self, tasks: Vec<Task>, today: NaiveDate) -> Vec<Task> {
        let mut kept: Vec<Task> = tasks
            .into_iter()
            .filter(|t| self.matches(t, today))
            .collect();
        kept.sort_by(|a, b| self.compare(a, b));
        kept
    }
}
