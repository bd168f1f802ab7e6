use clap::Subcommand;

/// Todo commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TodoCommands {
    /// Create a todo.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        due: Option<String>,
    },
    /// Update a todo.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        #[arg(long)]
        clear_due: bool,
    },
    /// List todos, newest first.
    List {
        /// all, completed, incomplete
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a todo by ID.
    Get { id: String },
    /// Delete a todo.
    Delete { id: String },
    /// Flip a todo between done and open.
    Toggle { id: String },
}
