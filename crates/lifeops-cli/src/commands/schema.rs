use lifeops_core::entities::{
    AppSettings, Course, CourseWithModules, HabitCheck, HabitPlan, Journal, KgiInfo, Kpi,
    KpiMilestone, KpiRecord, Milestone, Module, Strategy, StrategyReview, Tag, Task, Todo,
    UserSettings, VpsInfo,
};
use lifeops_core::responses::{Dashboard, KpiProgressReport, StrategyDocument, TagStat, WeeklyPlan};
use schemars::{Schema, schema_for};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Names accepted by `lops schema`.
pub const TYPE_NAMES: &[&str] = &[
    "course",
    "course_with_modules",
    "module",
    "task",
    "todo",
    "kpi",
    "kpi_record",
    "kpi_milestone",
    "kpi_progress",
    "milestone",
    "journal",
    "tag",
    "tag_stat",
    "habit_check",
    "habit_plan",
    "weekly_plan",
    "kgi",
    "vps",
    "strategy",
    "strategy_review",
    "strategy_document",
    "app_settings",
    "user_settings",
    "dashboard",
];

/// Handle `lops schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = schema_for_name(&args.type_name.replace('-', "_"))?;
    output(&schema, flags.format)
}

fn schema_for_name(name: &str) -> anyhow::Result<Schema> {
    let schema = match name {
        "course" => schema_for!(Course),
        "course_with_modules" => schema_for!(CourseWithModules),
        "module" => schema_for!(Module),
        "task" => schema_for!(Task),
        "todo" => schema_for!(Todo),
        "kpi" => schema_for!(Kpi),
        "kpi_record" => schema_for!(KpiRecord),
        "kpi_milestone" => schema_for!(KpiMilestone),
        "kpi_progress" => schema_for!(KpiProgressReport),
        "milestone" => schema_for!(Milestone),
        "journal" => schema_for!(Journal),
        "tag" => schema_for!(Tag),
        "tag_stat" => schema_for!(TagStat),
        "habit_check" => schema_for!(HabitCheck),
        "habit_plan" => schema_for!(HabitPlan),
        "weekly_plan" => schema_for!(WeeklyPlan),
        "kgi" => schema_for!(KgiInfo),
        "vps" => schema_for!(VpsInfo),
        "strategy" => schema_for!(Strategy),
        "strategy_review" => schema_for!(StrategyReview),
        "strategy_document" => schema_for!(StrategyDocument),
        "app_settings" => schema_for!(AppSettings),
        "user_settings" => schema_for!(UserSettings),
        "dashboard" => schema_for!(Dashboard),
        other => anyhow::bail!(
            "unknown schema type '{other}'. Known types: {}",
            TYPE_NAMES.join(", ")
        ),
    };
    Ok(schema)
}

#[cfg(test)]
mod tests {
    use super::{TYPE_NAMES, schema_for_name};

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in TYPE_NAMES {
            assert!(schema_for_name(name).is_ok(), "missing schema for {name}");
        }
    }

    #[test]
    fn unknown_type_lists_known_names() {
        let err = schema_for_name("finding").expect_err("should fail");
        assert!(err.to_string().contains("course_with_modules"));
    }

    #[test]
    fn task_schema_names_its_fields() {
        let schema = serde_json::to_value(schema_for_name("task").unwrap()).unwrap();
        assert!(schema["properties"]["estimated_hours"].is_object());
    }
}
