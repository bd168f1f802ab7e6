mod course;
mod habit;
mod journal;
mod kpi;
mod meta;
mod milestone;
mod settings;
mod strategy;
mod tag;
mod task;
mod todo;

pub use course::CourseCommands;
pub use habit::{HabitCommands, PlanCommands};
pub use journal::JournalCommands;
pub use kpi::{KpiCommands, KpiMilestoneCommands, KpiRecordCommands};
pub use meta::MetaCommands;
pub use milestone::MilestoneCommands;
pub use settings::SettingsCommands;
pub use strategy::StrategyCommands;
pub use tag::TagCommands;
pub use task::{TaskCommands, TaskCreateArgs, TaskListArgs, TaskUpdateArgs};
pub use todo::TodoCommands;
