use clap::Subcommand;

/// Journal commands.
#[derive(Clone, Debug, Subcommand)]
pub enum JournalCommands {
    /// Write a journal entry.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        content: Option<String>,
        /// great, good, neutral, bad, terrible
        #[arg(long)]
        mood: Option<String>,
        #[arg(long = "tag")]
        tags: Vec<String>,
    },
    /// Update a journal entry. Passing any --tag replaces all tags.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        mood: Option<String>,
        #[arg(long = "tag", conflicts_with = "clear_tags")]
        tags: Vec<String>,
        #[arg(long)]
        clear_tags: bool,
    },
    /// List entries, newest first.
    List {
        #[arg(long)]
        mood: Option<String>,
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        tag: Vec<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get an entry by ID.
    Get { id: String },
    /// Delete an entry.
    Delete { id: String },
}
