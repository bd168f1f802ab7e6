use lifeops_core::inputs::NewTask;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCreateArgs;
use crate::commands::shared::parse::{parse_date, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &TaskCreateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let input = new_task(args)?;
    let task = ctx.service.create_task(input).await?;
    output(&task, flags.format)
}

/// Flags over the form defaults of [`NewTask`].
fn new_task(args: &TaskCreateArgs) -> anyhow::Result<NewTask> {
    let defaults = NewTask::default();
    Ok(NewTask {
        title: args.title.clone(),
        description: args.description.clone().unwrap_or_default(),
        category: parse_opt_enum(args.category.as_deref(), "category")?
            .unwrap_or(defaults.category),
        priority: parse_opt_enum(args.priority.as_deref(), "priority")?
            .unwrap_or(defaults.priority),
        frequency: parse_opt_enum(args.frequency.as_deref(), "frequency")?
            .unwrap_or(defaults.frequency),
        estimated_hours: args.hours.unwrap_or(defaults.estimated_hours),
        due_date: args
            .due
            .as_deref()
            .map(|raw| parse_date(raw, "due"))
            .transpose()?,
        tags: args.tags.clone(),
    })
}
