use lifeops_core::filters::TaskQuery;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskListArgs;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_opt_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn run(args: &TaskListArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let query = build_query(args)?;
    let mut tasks = ctx.service.list_tasks(&query, ctx.today()).await?;
    truncate(
        &mut tasks,
        effective_limit(args.limit, flags.limit, ctx.config.general.default_limit),
    );
    output(&tasks, flags.format)
}

fn build_query(args: &TaskListArgs) -> anyhow::Result<TaskQuery> {
    Ok(TaskQuery {
        search: args.search.clone(),
        category: parse_opt_enum(args.category.as_deref(), "category")?,
        priority: parse_opt_enum(args.priority.as_deref(), "priority")?,
        frequency: parse_opt_enum(args.frequency.as_deref(), "frequency")?,
        completion: parse_opt_enum(args.status.as_deref(), "status")?.unwrap_or_default(),
        due: parse_opt_enum(args.due.as_deref(), "due")?.unwrap_or_default(),
        tags: args.tag.clone(),
        sort: parse_opt_enum(args.sort.as_deref(), "sort")?.unwrap_or_default(),
        order: parse_opt_enum(args.order.as_deref(), "order")?.unwrap_or_default(),
    })
}
