//! ID prefix constants.
//!
//! IDs are `{prefix}-{8 hex chars}`, e.g. `tsk-a3f8b2c1`. The random part is
//! generated by the database (`randomblob(4)`).

pub const PREFIX_COURSE: &str = "crs";
pub const PREFIX_MODULE: &str = "mod";
pub const PREFIX_TASK: &str = "tsk";
pub const PREFIX_TODO: &str = "tdo";
pub const PREFIX_KPI: &str = "kpi";
pub const PREFIX_KPI_RECORD: &str = "kpr";
pub const PREFIX_KPI_MILESTONE: &str = "kms";
pub const PREFIX_MILESTONE: &str = "mil";
pub const PREFIX_JOURNAL: &str = "jnl";
pub const PREFIX_TAG: &str = "tag";
pub const PREFIX_HABIT_CHECK: &str = "hab";
pub const PREFIX_HABIT_PLAN: &str = "hpl";
pub const PREFIX_STRATEGY: &str = "str";
pub const PREFIX_STRATEGY_REVIEW: &str = "srv";

pub const ALL_PREFIXES: &[&str] = &[
    PREFIX_COURSE,
    PREFIX_MODULE,
    PREFIX_TASK,
    PREFIX_TODO,
    PREFIX_KPI,
    PREFIX_KPI_RECORD,
    PREFIX_KPI_MILESTONE,
    PREFIX_MILESTONE,
    PREFIX_JOURNAL,
    PREFIX_TAG,
    PREFIX_HABIT_CHECK,
    PREFIX_HABIT_PLAN,
    PREFIX_STRATEGY,
    PREFIX_STRATEGY_REVIEW,
];
