use clap::Subcommand;

/// Course commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CourseCommands {
    /// Create a course, optionally with modules in order.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        /// not_started, planning, recording, published
        #[arg(long)]
        status: Option<String>,
        /// Price in yen.
        #[arg(long)]
        price: Option<i64>,
        #[arg(long)]
        genre: Option<String>,
        /// YYYY-MM-DD
        #[arg(long)]
        release_date: Option<String>,
        /// Module title; repeat for each module.
        #[arg(long = "module")]
        modules: Vec<String>,
    },
    /// Update a course. Passing any --module replaces all modules.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        price: Option<i64>,
        #[arg(long)]
        genre: Option<String>,
        #[arg(long, conflicts_with = "clear_release_date")]
        release_date: Option<String>,
        #[arg(long)]
        clear_release_date: bool,
        #[arg(long = "module")]
        modules: Vec<String>,
    },
    /// List courses, newest first.
    List {
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a course with its modules.
    Get { id: String },
    /// Delete a course and its modules.
    Delete { id: String },
    /// Copy a course and its modules as a fresh draft.
    Duplicate { id: String },
    /// Mark a module completed (or not, with --undo).
    Module {
        module_id: String,
        #[arg(long)]
        undo: bool,
    },
}
