use clap::Subcommand;

/// KGI targets and value proposition.
#[derive(Clone, Debug, Subcommand)]
pub enum MetaCommands {
    /// Show the KGI targets.
    Kgi,
    /// Change KGI targets; unspecified fields keep their current value.
    SetKgi {
        /// Ten-thousand yen per month.
        #[arg(long)]
        income: Option<f64>,
        /// Hours per day.
        #[arg(long)]
        work_hours: Option<f64>,
        #[arg(long)]
        course_sales: Option<i64>,
        #[arg(long)]
        subscription: Option<i64>,
    },
    /// Show the value proposition statement.
    Vps,
    /// Replace the value proposition statement.
    SetVps { statement: String },
}
