use clap::Subcommand;

/// Settings commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SettingsCommands {
    /// Show app settings.
    App,
    /// Change app settings.
    SetApp {
        /// #RRGGBB
        #[arg(long)]
        background_color: String,
    },
    /// Show user settings.
    User,
    /// Change user settings; unspecified fields keep their current value.
    SetUser {
        /// light, dark, system
        #[arg(long)]
        theme: Option<String>,
        /// ja, en
        #[arg(long)]
        language: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        timezone: Option<String>,
        #[arg(long)]
        notify_email: Option<bool>,
        #[arg(long)]
        notify_push: Option<bool>,
        #[arg(long)]
        notify_task_reminders: Option<bool>,
        #[arg(long)]
        notify_kpi_updates: Option<bool>,
    },
}
