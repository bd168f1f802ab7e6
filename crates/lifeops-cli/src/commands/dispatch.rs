use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    tracing::debug!(project_root = %ctx.project_root.display(), "dispatching command");
    match command {
        Commands::Dashboard(args) => commands::dashboard::handle(&args, ctx, flags).await,
        Commands::Course { action } => commands::course::handle(&action, ctx, flags).await,
        Commands::Task { action } => commands::task::handle(&action, ctx, flags).await,
        Commands::Todo { action } => commands::todo::handle(&action, ctx, flags).await,
        Commands::Kpi { action } => commands::kpi::handle(&action, ctx, flags).await,
        Commands::KpiRecord { action } => commands::kpi::handle_record(&action, ctx, flags).await,
        Commands::KpiMilestone { action } => {
            commands::kpi::handle_milestone(&action, ctx, flags).await
        }
        Commands::Milestone { action } => commands::milestone::handle(&action, ctx, flags).await,
        Commands::Journal { action } => commands::journal::handle(&action, ctx, flags).await,
        Commands::Tag { action } => commands::tag::handle(&action, ctx, flags).await,
        Commands::Habit { action } => commands::habit::handle(&action, ctx, flags).await,
        Commands::Plan { action } => commands::habit::handle_plan(&action, ctx, flags).await,
        Commands::Meta { action } => commands::meta::handle(&action, ctx, flags).await,
        Commands::Strategy { action } => commands::strategy::handle(&action, ctx, flags).await,
        Commands::Settings { action } => commands::settings::handle(&action, ctx, flags).await,
        Commands::Init(_) | Commands::Schema(_) => {
            unreachable!("init/schema are pre-dispatched in main")
        }
    }
}
