use crate::cli::GlobalFlags;
use crate::cli::root_commands::DashboardArgs;
use crate::commands::shared::parse::date_or;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lops dashboard`.
pub async fn handle(
    args: &DashboardArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let date = date_or(args.date.as_deref(), ctx.today())?;
    let dashboard = ctx.service.dashboard(date).await?;
    output(&dashboard, flags.format)
}
