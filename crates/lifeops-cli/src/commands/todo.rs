use lifeops_core::filters::TodoFilter;
use lifeops_core::inputs::NewTodo;
use lifeops_db::updates::todo::TodoUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TodoCommands;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::{parse_date, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lops todo`.
pub async fn handle(
    action: &TodoCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TodoCommands::Create {
            title,
            description,
            due,
        } => {
            let input = NewTodo {
                title: title.clone(),
                description: description.clone().unwrap_or_default(),
                due_date: due.as_deref().map(|raw| parse_date(raw, "due")).transpose()?,
            };
            output(&ctx.service.create_todo(input).await?, flags.format)
        }
        TodoCommands::Update {
            id,
            title,
            description,
            due,
            clear_due,
        } => {
            if title.is_none() && description.is_none() && due.is_none() && !clear_due {
                anyhow::bail!(
                    "At least one of --title, --description, --due or --clear-due must be provided"
                );
            }
            let mut builder = TodoUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(description) = description {
                builder = builder.description(description);
            }
            if let Some(due) = due.as_deref() {
                builder = builder.due_date(Some(parse_date(due, "due")?));
            } else if *clear_due {
                builder = builder.due_date(None);
            }
            output(&ctx.service.update_todo(id, builder.build()).await?, flags.format)
        }
        TodoCommands::List { status, limit } => {
            let filter = TodoFilter {
                completion: parse_opt_enum(status.as_deref(), "status")?.unwrap_or_default(),
            };
            let mut todos = ctx.service.list_todos(&filter).await?;
            truncate(
                &mut todos,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&todos, flags.format)
        }
        TodoCommands::Get { id } => output(&ctx.service.get_todo(id).await?, flags.format),
        TodoCommands::Delete { id } => {
            ctx.service.delete_todo(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        TodoCommands::Toggle { id } => output(&ctx.service.toggle_todo(id).await?, flags.format),
    }
}
