use lifeops_core::filters::TagStatsQuery;
use lifeops_db::updates::tag::TagUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TagCommands;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::parse_opt_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lops tag`.
pub async fn handle(action: &TagCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TagCommands::Create { name, color } => output(
            &ctx.service.create_tag(name, color.as_deref()).await?,
            flags.format,
        ),
        TagCommands::Update { id, name, color } => {
            if name.is_none() && color.is_none() {
                anyhow::bail!("At least one of --name or --color must be provided");
            }
            let mut builder = TagUpdateBuilder::new();
            if let Some(name) = name {
                builder = builder.name(name);
            }
            if let Some(color) = color {
                builder = builder.color(color);
            }
            output(&ctx.service.update_tag(id, builder.build()).await?, flags.format)
        }
        TagCommands::List => output(&ctx.service.list_tags().await?, flags.format),
        TagCommands::Get { id } => output(&ctx.service.get_tag(id).await?, flags.format),
        TagCommands::Delete { ids } => {
            if let [id] = ids.as_slice() {
                ctx.service.delete_tag(id).await?;
                return output(&serde_json::json!({ "deleted": id }), flags.format);
            }
            let deleted = ctx.service.delete_tags(ids).await?;
            output(&serde_json::json!({ "deleted": deleted }), flags.format)
        }
        TagCommands::Stats {
            search,
            sort,
            order,
            limit,
        } => {
            let defaults = TagStatsQuery::default();
            let query = TagStatsQuery {
                search: search.clone(),
                sort: parse_opt_enum(sort.as_deref(), "sort")?.unwrap_or(defaults.sort),
                order: parse_opt_enum(order.as_deref(), "order")?.unwrap_or(defaults.order),
            };
            let mut stats = ctx.service.tag_stats(&query).await?;
            truncate(
                &mut stats,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&stats, flags.format)
        }
    }
}
