use clap::Subcommand;

/// Free-form KPI commands.
#[derive(Clone, Debug, Subcommand)]
pub enum KpiCommands {
    /// Create a KPI.
    Create {
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        target: Option<f64>,
        #[arg(long)]
        current: Option<f64>,
        #[arg(long)]
        unit: Option<String>,
        /// daily, weekly, monthly, yearly
        #[arg(long)]
        period: Option<String>,
    },
    /// Update a KPI.
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        target: Option<f64>,
        #[arg(long)]
        current: Option<f64>,
        #[arg(long)]
        unit: Option<String>,
        #[arg(long)]
        period: Option<String>,
    },
    /// List KPIs, newest first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a KPI by ID.
    Get { id: String },
    /// Delete a KPI.
    Delete { id: String },
}

/// Monthly KPI actuals.
#[derive(Clone, Debug, Subcommand)]
pub enum KpiRecordCommands {
    /// Save the actuals for a month, replacing any previous values.
    Save {
        year: i32,
        month: u32,
        #[arg(long, default_value_t = 0.0)]
        income: f64,
        #[arg(long, default_value_t = 0.0)]
        work_hours: f64,
        #[arg(long, default_value_t = 0)]
        course_sales: i64,
        #[arg(long, default_value_t = 0)]
        subscription: i64,
    },
    /// Get the actuals for a month.
    Get { year: i32, month: u32 },
    /// List a year's records by month.
    List { year: i32 },
    /// This month's actuals against this quarter's targets.
    Progress {
        /// YYYY-MM-DD (defaults to today).
        #[arg(long)]
        date: Option<String>,
    },
}

/// Quarterly KPI targets.
#[derive(Clone, Debug, Subcommand)]
pub enum KpiMilestoneCommands {
    /// Save the targets for a quarter, replacing any previous values.
    Save {
        year: i32,
        quarter: u32,
        #[arg(long, default_value_t = 0.0)]
        income: f64,
        #[arg(long, default_value_t = 0.0)]
        work_hours: f64,
        #[arg(long, default_value_t = 0)]
        course_sales: i64,
        #[arg(long, default_value_t = 0)]
        subscription: i64,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Get the targets for a quarter.
    Get { year: i32, quarter: u32 },
    /// List a year's targets by quarter.
    List { year: i32 },
}
