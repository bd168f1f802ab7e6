use clap::Subcommand;

/// Daily habit checks. Dates are YYYY-MM-DD and default to today.
#[derive(Clone, Debug, Subcommand)]
pub enum HabitCommands {
    /// Show one day's checks.
    Get {
        #[arg(long)]
        date: Option<String>,
    },
    /// Flip a habit for a day.
    Toggle {
        /// english_study, exercise
        habit: String,
        #[arg(long)]
        date: Option<String>,
    },
    /// Mark a habit done (or not, with --off).
    Set {
        habit: String,
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        off: bool,
    },
    /// Checks in a date range, oldest first.
    List {
        #[arg(long)]
        from: String,
        #[arg(long)]
        to: String,
    },
    /// Checks for the Sunday-Saturday week containing a date.
    Week {
        #[arg(long)]
        date: Option<String>,
    },
    /// Consecutive days a habit has been kept.
    Streak {
        habit: String,
        #[arg(long)]
        date: Option<String>,
    },
}

/// Weekly plan commands. Days are 0 (Sunday) to 6 (Saturday).
#[derive(Clone, Debug, Subcommand)]
pub enum PlanCommands {
    /// Save the plan for a weekday.
    Set {
        day: u8,
        #[arg(long, default_value = "")]
        activities: String,
        #[arg(long, default_value_t = 0.0)]
        hours: f64,
    },
    /// Remove the plan for a weekday.
    Delete { day: u8 },
    /// Saved plans, Sunday first.
    List,
    /// All seven days with total hours.
    Week,
}
