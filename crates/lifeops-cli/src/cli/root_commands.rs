use clap::{Args, Subcommand};

use crate::cli::subcommands::{
    CourseCommands, HabitCommands, JournalCommands, KpiCommands, KpiMilestoneCommands,
    KpiRecordCommands, MetaCommands, MilestoneCommands, PlanCommands, SettingsCommands,
    StrategyCommands, TagCommands, TaskCommands, TodoCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Initialize lifeops in a directory.
    Init(InitArgs),
    /// Today's overview: goals, habits, KPI progress, open todos, weekly plan.
    Dashboard(DashboardArgs),
    /// Courses and their modules.
    Course {
        #[command(subcommand)]
        action: CourseCommands,
    },
    /// Tasks (KDI).
    Task {
        #[command(subcommand)]
        action: TaskCommands,
    },
    /// Todos.
    Todo {
        #[command(subcommand)]
        action: TodoCommands,
    },
    /// Free-form KPIs.
    Kpi {
        #[command(subcommand)]
        action: KpiCommands,
    },
    /// Monthly KPI actuals.
    #[command(name = "kpi-record")]
    KpiRecord {
        #[command(subcommand)]
        action: KpiRecordCommands,
    },
    /// Quarterly KPI targets.
    #[command(name = "kpi-milestone")]
    KpiMilestone {
        #[command(subcommand)]
        action: KpiMilestoneCommands,
    },
    /// Dated milestones.
    Milestone {
        #[command(subcommand)]
        action: MilestoneCommands,
    },
    /// Journal entries.
    Journal {
        #[command(subcommand)]
        action: JournalCommands,
    },
    /// Tags shared by tasks and journals.
    Tag {
        #[command(subcommand)]
        action: TagCommands,
    },
    /// Daily habit checks.
    Habit {
        #[command(subcommand)]
        action: HabitCommands,
    },
    /// Weekly habit plan.
    Plan {
        #[command(subcommand)]
        action: PlanCommands,
    },
    /// KGI targets and value proposition.
    Meta {
        #[command(subcommand)]
        action: MetaCommands,
    },
    /// Strategy document and reviews.
    Strategy {
        #[command(subcommand)]
        action: StrategyCommands,
    },
    /// App and user settings.
    Settings {
        #[command(subcommand)]
        action: SettingsCommands,
    },
    /// Dump JSON schema for an entity type.
    Schema(SchemaArgs),
}

/// Arguments for `lops init`.
#[derive(Clone, Debug, Args)]
pub struct InitArgs {
    /// Directory to initialize (defaults to the current directory).
    #[arg(default_value = ".")]
    pub path: String,
}

/// Arguments for `lops dashboard`.
#[derive(Clone, Debug, Args)]
pub struct DashboardArgs {
    /// Day to show, YYYY-MM-DD (defaults to today).
    #[arg(long)]
    pub date: Option<String>,
}

/// Arguments for `lops schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Entity type name, e.g. `task`, `course`, `user_settings`.
    pub type_name: String,
}
