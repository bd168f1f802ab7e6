use clap::Subcommand;

/// Tag commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TagCommands {
    /// Create a tag.
    Create {
        name: String,
        /// #RRGGBB
        #[arg(long)]
        color: Option<String>,
    },
    /// Rename or recolor a tag.
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// List tags by name.
    List,
    /// Get a tag by ID.
    Get { id: String },
    /// Delete one or more tags, detaching them everywhere.
    Delete {
        #[arg(required = true)]
        ids: Vec<String>,
    },
    /// Usage counts per tag.
    Stats {
        #[arg(long)]
        search: Option<String>,
        /// name, task_count, journal_count, total_count
        #[arg(long)]
        sort: Option<String>,
        /// asc, desc
        #[arg(long)]
        order: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
}
