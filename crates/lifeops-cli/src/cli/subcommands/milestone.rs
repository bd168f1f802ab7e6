use clap::Subcommand;

/// Milestone commands.
#[derive(Clone, Debug, Subcommand)]
pub enum MilestoneCommands {
    /// Create a milestone.
    Create {
        #[arg(long)]
        title: String,
        /// YYYY-MM-DD
        #[arg(long)]
        target_date: String,
        #[arg(long)]
        description: Option<String>,
        /// not_started, in_progress, completed
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        /// 0-100
        #[arg(long)]
        progress: Option<u8>,
    },
    /// Update a milestone.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        target_date: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        progress: Option<u8>,
    },
    /// List milestones by target date.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a milestone by ID.
    Get { id: String },
    /// Delete a milestone.
    Delete { id: String },
}
