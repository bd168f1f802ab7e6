//! Field sets for creating records.
//!
//! Creation inputs carry everything a new row needs except its id and
//! timestamps. Types with sensible form defaults implement `Default`, so
//! callers can write `NewTask { title: "..".into(), ..Default::default() }`.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{
    CourseStatus, KpiPeriod, MilestoneStatus, Mood, Priority, StrategyCategory, TaskCategory,
    TaskFrequency,
};

// ---------------------------------------------------------------------------
// Courses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    pub status: CourseStatus,
    pub price: i64,
    pub genre: String,
    pub release_date: Option<NaiveDate>,
    /// Stored with positions `0..n` in this order.
    pub modules: Vec<NewModule>,
}

impl Default for NewCourse {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            status: CourseStatus::NotStarted,
            price: 0,
            genre: String::new(),
            release_date: None,
            modules: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct NewModule {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl NewModule {
    #[must_use]
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}

// ---------------------------------------------------------------------------
// Tasks / todos
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: TaskCategory,
    pub priority: Priority,
    pub frequency: TaskFrequency,
    pub estimated_hours: f64,
    pub due_date: Option<NaiveDate>,
    /// Tag IDs.
    pub tags: Vec<String>,
}

impl Default for NewTask {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: TaskCategory::Other,
            priority: Priority::Medium,
            frequency: TaskFrequency::Once,
            estimated_hours: 1.0,
            due_date: None,
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct NewTodo {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
}

// ---------------------------------------------------------------------------
// KPIs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct NewKpi {
    pub title: String,
    pub description: String,
    pub target_value: f64,
    pub current_value: f64,
    pub unit: String,
    pub period: KpiPeriod,
}

impl Default for NewKpi {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            target_value: 0.0,
            current_value: 0.0,
            unit: String::new(),
            period: KpiPeriod::Monthly,
        }
    }
}

/// Actuals saved for a `(year, month)` slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct KpiRecordValues {
    pub income: f64,
    pub work_hours: f64,
    pub course_sales: i64,
    pub subscription: i64,
}

/// Targets saved for a `(year, quarter)` slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct KpiMilestoneValues {
    pub target_income: f64,
    pub target_work_hours: f64,
    pub target_course_sales: i64,
    pub target_subscription: i64,
    pub notes: String,
}

// ---------------------------------------------------------------------------
// Milestones / journals / strategies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewMilestone {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub target_date: NaiveDate,
    #[serde(default = "default_milestone_status")]
    pub status: MilestoneStatus,
    #[serde(default = "default_priority")]
    pub priority: Priority,
    #[serde(default)]
    pub progress: u8,
}

impl NewMilestone {
    #[must_use]
    pub fn new(title: impl Into<String>, target_date: NaiveDate) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            target_date,
            status: default_milestone_status(),
            priority: default_priority(),
            progress: 0,
        }
    }
}

const fn default_milestone_status() -> MilestoneStatus {
    MilestoneStatus::NotStarted
}

const fn default_priority() -> Priority {
    Priority::Medium
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(default)]
pub struct NewJournal {
    pub title: String,
    pub content: String,
    pub mood: Mood,
    /// Tag IDs.
    pub tags: Vec<String>,
}

impl Default for NewJournal {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            mood: Mood::Neutral,
            tags: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewStrategy {
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub category: StrategyCategory,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewStrategyReview {
    pub date: NaiveDate,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub next_strategy: String,
}
