use lifeops_core::enums::Mood;
use lifeops_core::filters::JournalFilter;
use lifeops_core::inputs::NewJournal;
use lifeops_db::updates::journal::JournalUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::JournalCommands;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::{parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lops journal`.
pub async fn handle(
    action: &JournalCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        JournalCommands::Create {
            title,
            content,
            mood,
            tags,
        } => {
            let input = NewJournal {
                title: title.clone(),
                content: content.clone().unwrap_or_default(),
                mood: parse_opt_enum(mood.as_deref(), "mood")?.unwrap_or(Mood::Neutral),
                tags: tags.clone(),
            };
            output(&ctx.service.create_journal(input).await?, flags.format)
        }
        JournalCommands::Update {
            id,
            title,
            content,
            mood,
            tags,
            clear_tags,
        } => {
            let mut builder = JournalUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(content) = content {
                builder = builder.content(content);
            }
            if let Some(mood) = mood.as_deref() {
                builder = builder.mood(parse_enum(mood, "mood")?);
            }
            if !tags.is_empty() {
                builder = builder.tags(tags.clone());
            } else if *clear_tags {
                builder = builder.tags(Vec::new());
            }
            output(
                &ctx.service.update_journal(id, builder.build()).await?,
                flags.format,
            )
        }
        JournalCommands::List {
            mood,
            search,
            tag,
            limit,
        } => {
            let filter = JournalFilter {
                mood: parse_opt_enum(mood.as_deref(), "mood")?,
                search: search.clone(),
                tags: tag.clone(),
            };
            let mut journals = ctx.service.list_journals(&filter).await?;
            truncate(
                &mut journals,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&journals, flags.format)
        }
        JournalCommands::Get { id } => output(&ctx.service.get_journal(id).await?, flags.format),
        JournalCommands::Delete { id } => {
            ctx.service.delete_journal(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}
