mod create;
mod list;
mod update;

use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct BulkResponse {
    requested: usize,
    affected: u64,
}

/// Handle `lops task`.
pub async fn handle(
    action: &TaskCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Create(args) => create::run(args, ctx, flags).await,
        TaskCommands::Update(args) => update::run(args, ctx, flags).await,
        TaskCommands::List(args) => list::run(args, ctx, flags).await,
        TaskCommands::Get { id } => output(&ctx.service.get_task(id).await?, flags.format),
        TaskCommands::Delete { ids } => {
            if let [id] = ids.as_slice() {
                ctx.service.delete_task(id).await?;
                return output(&serde_json::json!({ "deleted": id }), flags.format);
            }
            let affected = ctx.service.delete_tasks(ids).await?;
            output(
                &BulkResponse {
                    requested: ids.len(),
                    affected,
                },
                flags.format,
            )
        }
        TaskCommands::Complete { ids } => {
            if let [id] = ids.as_slice() {
                return output(&ctx.service.complete_task(id).await?, flags.format);
            }
            let affected = ctx.service.complete_tasks(ids).await?;
            output(
                &BulkResponse {
                    requested: ids.len(),
                    affected,
                },
                flags.format,
            )
        }
        TaskCommands::Reopen { id } => output(&ctx.service.reopen_task(id).await?, flags.format),
        TaskCommands::Tags { id, tags } => {
            output(&ctx.service.set_task_tags(id, tags).await?, flags.format)
        }
    }
}
