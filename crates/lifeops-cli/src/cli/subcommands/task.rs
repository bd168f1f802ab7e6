use clap::{Args, Subcommand};

/// Task (KDI) commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TaskCommands {
    /// Create a task.
    Create(TaskCreateArgs),
    /// Update a task.
    Update(TaskUpdateArgs),
    /// List tasks with filters and sorting.
    List(TaskListArgs),
    /// Get a task by ID.
    Get { id: String },
    /// Delete one or more tasks.
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Mark one or more tasks completed.
    Complete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Mark a task not completed.
    Reopen { id: String },
    /// Replace a task's tags.
    Tags {
        id: String,
        /// Tag ID; repeat for each tag. None clears all tags.
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
}

#[derive(Clone, Debug, Args)]
pub struct TaskCreateArgs {
    #[arg(long)]
    pub title: String,
    #[arg(long)]
    pub description: Option<String>,
    /// course, habit, operation, other
    #[arg(long)]
    pub category: Option<String>,
    /// high, medium, low
    #[arg(long)]
    pub priority: Option<String>,
    /// daily, weekly, once
    #[arg(long)]
    pub frequency: Option<String>,
    #[arg(long)]
    pub hours: Option<f64>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub due: Option<String>,
    #[arg(long = "tag")]
    pub tags: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TaskUpdateArgs {
    pub id: String,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub frequency: Option<String>,
    #[arg(long)]
    pub hours: Option<f64>,
    #[arg(long, conflicts_with = "clear_due")]
    pub due: Option<String>,
    #[arg(long)]
    pub clear_due: bool,
}

#[derive(Clone, Debug, Args)]
pub struct TaskListArgs {
    /// Case-insensitive match on title or description.
    #[arg(long)]
    pub search: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub priority: Option<String>,
    #[arg(long)]
    pub frequency: Option<String>,
    /// all, completed, incomplete
    #[arg(long)]
    pub status: Option<String>,
    /// all, today, week, overdue
    #[arg(long)]
    pub due: Option<String>,
    /// Required tag ID; repeat to require several.
    #[arg(long)]
    pub tag: Vec<String>,
    /// due_date, priority, created_at
    #[arg(long)]
    pub sort: Option<String>,
    /// asc, desc
    #[arg(long)]
    pub order: Option<String>,
    #[arg(long)]
    pub limit: Option<u32>,
}
