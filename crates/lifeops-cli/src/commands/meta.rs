use lifeops_core::entities::{KgiInfo, VpsInfo};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MetaCommands;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lops meta`.
pub async fn handle(action: &MetaCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        MetaCommands::Kgi => output(&ctx.service.get_kgi().await?, flags.format),
        MetaCommands::SetKgi {
            income,
            work_hours,
            course_sales,
            subscription,
        } => {
            let current = ctx.service.get_kgi().await?;
            let kgi = KgiInfo {
                target_income: income.unwrap_or(current.target_income),
                target_work_hours: work_hours.unwrap_or(current.target_work_hours),
                target_course_sales: course_sales.unwrap_or(current.target_course_sales),
                target_subscription: subscription.unwrap_or(current.target_subscription),
            };
            output(&ctx.service.set_kgi(&kgi).await?, flags.format)
        }
        MetaCommands::Vps => output(&ctx.service.get_vps().await?, flags.format),
        MetaCommands::SetVps { statement } => {
            let vps = VpsInfo {
                statement: statement.clone(),
            };
            output(&ctx.service.set_vps(&vps).await?, flags.format)
        }
    }
}
