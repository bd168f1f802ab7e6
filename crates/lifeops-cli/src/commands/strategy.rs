use lifeops_core::inputs::{NewStrategy, NewStrategyReview};
use lifeops_db::updates::strategy::StrategyUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::StrategyCommands;
use crate::commands::shared::parse::{date_or, parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lops strategy`.
pub async fn handle(
    action: &StrategyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        StrategyCommands::Create {
            title,
            category,
            content,
        } => {
            let input = NewStrategy {
                title: title.clone(),
                content: content.clone().unwrap_or_default(),
                category: parse_enum(category, "category")?,
            };
            output(&ctx.service.create_strategy(input).await?, flags.format)
        }
        StrategyCommands::Update {
            id,
            title,
            category,
            content,
        } => {
            let mut builder = StrategyUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(category) = category.as_deref() {
                builder = builder.category(parse_enum(category, "category")?);
            }
            if let Some(content) = content {
                builder = builder.content(content);
            }
            output(
                &ctx.service.update_strategy(id, builder.build()).await?,
                flags.format,
            )
        }
        StrategyCommands::List { category } => {
            let category = parse_opt_enum(category.as_deref(), "category")?;
            output(&ctx.service.list_strategies(category).await?, flags.format)
        }
        StrategyCommands::Get { id } => output(&ctx.service.get_strategy(id).await?, flags.format),
        StrategyCommands::Delete { id } => {
            ctx.service.delete_strategy(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        StrategyCommands::Document => {
            output(&ctx.service.strategy_document().await?, flags.format)
        }
        StrategyCommands::Review {
            date,
            summary,
            next,
        } => {
            let input = NewStrategyReview {
                date: date_or(date.as_deref(), ctx.today())?,
                summary: summary.clone(),
                next_strategy: next.clone(),
            };
            output(&ctx.service.create_strategy_review(input).await?, flags.format)
        }
        StrategyCommands::Reviews => {
            output(&ctx.service.list_strategy_reviews().await?, flags.format)
        }
        StrategyCommands::DeleteReview { id } => {
            ctx.service.delete_strategy_review(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
