//! Aggregate views assembled from several tables.

use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::weekday_name;
use crate::entities::{
    HabitCheck, HabitPlan, KgiInfo, Strategy, StrategyReview, Tag, Todo, VpsInfo,
    progress_percent,
};
use crate::enums::StrategyCategory;

// ---------------------------------------------------------------------------
// Tag statistics
// ---------------------------------------------------------------------------

/// How often a tag is used.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TagStat {
    pub tag: Tag,
    pub task_count: u32,
    pub journal_count: u32,
    pub total_count: u32,
}

impl TagStat {
    #[must_use]
    pub const fn new(tag: Tag, task_count: u32, journal_count: u32) -> Self {
        Self {
            tag,
            task_count,
            journal_count,
            total_count: task_count + journal_count,
        }
    }
}

// ---------------------------------------------------------------------------
// KPI progress
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum KpiMetric {
    Income,
    WorkHours,
    CourseSales,
    Subscription,
}

impl KpiMetric {
    pub const ALL: [Self; 4] = [
        Self::Income,
        Self::WorkHours,
        Self::CourseSales,
        Self::Subscription,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::WorkHours => "work_hours",
            Self::CourseSales => "course_sales",
            Self::Subscription => "subscription",
        }
    }
}

impl fmt::Display for KpiMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current month's actual against its quarter's target.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KpiProgressLine {
    pub metric: KpiMetric,
    pub current: f64,
    pub target: f64,
    pub percent: u8,
}

impl KpiProgressLine {
    #[must_use]
    pub fn new(metric: KpiMetric, current: f64, target: f64) -> Self {
        Self {
            metric,
            current,
            target,
            percent: progress_percent(current, target),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct KpiProgressReport {
    pub year: i32,
    pub month: u32,
    pub quarter: u32,
    /// One line per [`KpiMetric`], in [`KpiMetric::ALL`] order.
    pub lines: Vec<KpiProgressLine>,
}

impl KpiProgressReport {
    #[must_use]
    pub fn line(&self, metric: KpiMetric) -> Option<&KpiProgressLine> {
        self.lines.iter().find(|l| l.metric == metric)
    }
}

// ---------------------------------------------------------------------------
// Weekly plan
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WeeklyPlanDay {
    pub day_of_week: u8,
    pub weekday: String,
    pub plan: Option<HabitPlan>,
}

/// Sunday-first weekly plan with exactly seven slots.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct WeeklyPlan {
    pub days: Vec<WeeklyPlanDay>,
    pub total_hours: f64,
}

impl WeeklyPlan {
    /// Slot the given plans into Sunday..Saturday. Out-of-range days are ignored.
    #[must_use]
    pub fn from_plans(plans: Vec<HabitPlan>) -> Self {
        let mut days: Vec<WeeklyPlanDay> = (0u8..7)
            .map(|day| WeeklyPlanDay {
                day_of_week: day,
                weekday: weekday_name(day).to_string(),
                plan: None,
            })
            .collect();
        for plan in plans {
            if let Some(slot) = days.get_mut(usize::from(plan.day_of_week)) {
                slot.plan = Some(plan);
            }
        }
        let total_hours = days
            .iter()
            .filter_map(|d| d.plan.as_ref())
            .map(|p| p.hours)
            .sum();
        Self { days, total_hours }
    }
}

// ---------------------------------------------------------------------------
// Strategy document
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StrategySection {
    pub category: StrategyCategory,
    pub strategies: Vec<Strategy>,
}

/// Every strategy grouped by category (in [`StrategyCategory::ALL`] order)
/// plus the review log.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StrategyDocument {
    pub sections: Vec<StrategySection>,
    pub reviews: Vec<StrategyReview>,
}

impl StrategyDocument {
    /// Group `strategies` by category, keeping their relative order.
    #[must_use]
    pub fn assemble(strategies: Vec<Strategy>, reviews: Vec<StrategyReview>) -> Self {
        let mut sections: Vec<StrategySection> = StrategyCategory::ALL
            .iter()
            .map(|&category| StrategySection {
                category,
                strategies: Vec::new(),
            })
            .collect();
        for strategy in strategies {
            if let Some(section) = sections.iter_mut().find(|s| s.category == strategy.category) {
                section.strategies.push(strategy);
            }
        }
        Self { sections, reviews }
    }

    #[must_use]
    pub fn section(&self, category: StrategyCategory) -> &[Strategy] {
        self.sections
            .iter()
            .find(|s| s.category == category)
            .map_or(&[], |s| s.strategies.as_slice())
    }
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// Today's habit state; all false when nothing was checked.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HabitStatus {
    pub date: NaiveDate,
    pub english_study: bool,
    pub exercise: bool,
}

impl HabitStatus {
    #[must_use]
    pub fn for_day(date: NaiveDate, check: Option<&HabitCheck>) -> Self {
        Self {
            date,
            english_study: check.is_some_and(|c| c.english_study),
            exercise: check.is_some_and(|c| c.exercise),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Dashboard {
    pub date: NaiveDate,
    pub kgi: KgiInfo,
    pub vps: VpsInfo,
    pub habits: HabitStatus,
    pub kpi_progress: KpiProgressReport,
    pub open_todos: Vec<Todo>,
    pub weekly_plan: WeeklyPlan,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    fn plan(day: u8, hours: f64) -> HabitPlan {
        let now = Utc::now();
        HabitPlan {
            id: format!("hpl-{day}"),
            day_of_week: day,
            activities: "study".into(),
            hours,
            created_at: now,
            updated_at: now,
        }
    }

    fn strategy(id: &str, category: StrategyCategory) -> Strategy {
        let now = Utc::now();
        Strategy {
            id: id.into(),
            title: id.into(),
            content: String::new(),
            category,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn tag_stat_total_is_sum() {
        let now = Utc::now();
        let tag = Tag {
            id: "tag-1".into(),
            name: "rust".into(),
            color: "#6B7280".into(),
            created_at: now,
            updated_at: now,
        };
        assert_eq!(TagStat::new(tag, 3, 2).total_count, 5);
    }

    #[test]
    fn weekly_plan_has_seven_slots_and_total() {
        let week = WeeklyPlan::from_plans(vec![plan(1, 2.0), plan(3, 1.5), plan(6, 4.0)]);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.days[0].weekday, "Sunday");
        assert!(week.days[0].plan.is_none());
        assert_eq!(week.days[3].plan.as_ref().map(|p| p.day_of_week), Some(3));
        assert!((week.total_hours - 7.5).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_weekly_plan_totals_zero() {
        let week = WeeklyPlan::from_plans(vec![]);
        assert!(week.days.iter().all(|d| d.plan.is_none()));
        assert!(week.total_hours.abs() < f64::EPSILON);
    }

    #[test]
    fn strategy_document_groups_in_category_order() {
        let doc = StrategyDocument::assemble(
            vec![
                strategy("b1", StrategyCategory::Blocker),
                strategy("k1", StrategyCategory::Kgi),
                strategy("b2", StrategyCategory::Blocker),
            ],
            vec![],
        );
        assert_eq!(doc.sections.len(), StrategyCategory::ALL.len());
        assert_eq!(doc.sections[0].category, StrategyCategory::Kgi);
        let blockers: Vec<&str> = doc
            .section(StrategyCategory::Blocker)
            .iter()
            .map(|s| s.id.as_str())
            .collect();
        assert_eq!(blockers, vec!["b1", "b2"]);
        assert!(doc.section(StrategyCategory::Review).is_empty());
    }

    #[test]
    fn kpi_line_percent() {
        let line = KpiProgressLine::new(KpiMetric::Income, 150.0, 200.0);
        assert_eq!(line.percent, 75);
        let line = KpiProgressLine::new(KpiMetric::CourseSales, 3.0, 0.0);
        assert_eq!(line.percent, 0);
    }

    #[test]
    fn habit_status_defaults_to_unchecked() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 12).unwrap();
        let status = HabitStatus::for_day(date, None);
        assert!(!status.english_study);
        assert!(!status.exercise);
    }
}
