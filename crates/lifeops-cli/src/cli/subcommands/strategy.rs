use clap::Subcommand;

/// Strategy document commands.
#[derive(Clone, Debug, Subcommand)]
pub enum StrategyCommands {
    /// Add a strategy entry.
    Create {
        #[arg(long)]
        title: String,
        /// kgi, kpi, kdi, blocker, next_strategy, review
        #[arg(long)]
        category: String,
        #[arg(long)]
        content: Option<String>,
    },
    /// Update a strategy entry.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        content: Option<String>,
    },
    /// List entries, newest first.
    List {
        #[arg(long)]
        category: Option<String>,
    },
    /// Get an entry by ID.
    Get { id: String },
    /// Delete an entry.
    Delete { id: String },
    /// Every entry grouped by category, plus reviews.
    Document,
    /// Record a strategy review.
    Review {
        /// YYYY-MM-DD (defaults to today).
        #[arg(long)]
        date: Option<String>,
        #[arg(long, default_value = "")]
        summary: String,
        #[arg(long, default_value = "")]
        next: String,
    },
    /// List reviews, most recent first.
    Reviews,
    /// Delete a review.
    DeleteReview { id: String },
}
