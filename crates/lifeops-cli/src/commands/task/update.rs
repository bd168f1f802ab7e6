use lifeops_db::updates::task::{TaskUpdate, TaskUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskUpdateArgs;
use crate::commands::shared::parse::{parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &TaskUpdateArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let update = build_update(args)?;
    let task = ctx.service.update_task(&args.id, update).await?;
    output(&task, flags.format)
}

fn build_update(args: &TaskUpdateArgs) -> anyhow::Result<TaskUpdate> {
    if args.title.is_none()
        && args.description.is_none()
        && args.category.is_none()
        && args.priority.is_none()
        && args.frequency.is_none()
        && args.hours.is_none()
        && args.due.is_none()
        && !args.clear_due
    {
        anyhow::bail!(
            "At least one of --title, --description, --category, --priority, --frequency, --hours, --due or --clear-due must be provided"
        );
    }

    let mut builder = TaskUpdateBuilder::new();
    if let Some(title) = args.title.as_deref() {
        builder = builder.title(title);
    }
    if let Some(description) = args.description.as_deref() {
        builder = builder.description(description);
    }
    if let Some(category) = args.category.as_deref() {
        builder = builder.category(parse_enum(category, "category")?);
    }
    if let Some(priority) = args.priority.as_deref() {
        builder = builder.priority(parse_enum(priority, "priority")?);
    }
    if let Some(frequency) = args.frequency.as_deref() {
        builder = builder.frequency(parse_enum(frequency, "frequency")?);
    }
    if let Some(hours) = args.hours {
        builder = builder.estimated_hours(hours);
    }
    if let Some(due) = args.due.as_deref() {
        builder = builder.due_date(Some(parse_date(due, "due")?));
    } else if args.clear_due {
        builder = builder.due_date(None);
    }
    Ok(builder.build())
}
