use lifeops_core::filters::MilestoneFilter;
use lifeops_core::inputs::NewMilestone;
use lifeops_db::updates::milestone::MilestoneUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::MilestoneCommands;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::{parse_date, parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lops milestone`.
pub async fn handle(
    action: &MilestoneCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        MilestoneCommands::Create {
            title,
            target_date,
            description,
            status,
            priority,
            progress,
        } => {
            let mut input = NewMilestone::new(title.clone(), parse_date(target_date, "target-date")?);
            if let Some(description) = description {
                input.description.clone_from(description);
            }
            if let Some(status) = parse_opt_enum(status.as_deref(), "status")? {
                input.status = status;
            }
            if let Some(priority) = parse_opt_enum(priority.as_deref(), "priority")? {
                input.priority = priority;
            }
            input.progress = progress.unwrap_or(0);
            output(&ctx.service.create_milestone(input).await?, flags.format)
        }
        MilestoneCommands::Update {
            id,
            title,
            target_date,
            description,
            status,
            priority,
            progress,
        } => {
            let mut builder = MilestoneUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(target_date) = target_date.as_deref() {
                builder = builder.target_date(parse_date(target_date, "target-date")?);
            }
            if let Some(description) = description {
                builder = builder.description(description);
            }
            if let Some(status) = status.as_deref() {
                builder = builder.status(parse_enum(status, "status")?);
            }
            if let Some(priority) = priority.as_deref() {
                builder = builder.priority(parse_enum(priority, "priority")?);
            }
            if let Some(progress) = progress {
                builder = builder.progress(*progress);
            }
            output(
                &ctx.service.update_milestone(id, builder.build()).await?,
                flags.format,
            )
        }
        MilestoneCommands::List {
            status,
            priority,
            limit,
        } => {
            let filter = MilestoneFilter {
                status: parse_opt_enum(status.as_deref(), "status")?,
                priority: parse_opt_enum(priority.as_deref(), "priority")?,
            };
            let mut milestones = ctx.service.list_milestones(&filter).await?;
            truncate(
                &mut milestones,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&milestones, flags.format)
        }
        MilestoneCommands::Get { id } => {
            output(&ctx.service.get_milestone(id).await?, flags.format)
        }
        MilestoneCommands::Delete { id } => {
            ctx.service.delete_milestone(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
