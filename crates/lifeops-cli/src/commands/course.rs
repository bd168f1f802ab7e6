use lifeops_core::enums::CourseStatus;
use lifeops_core::inputs::{NewCourse, NewModule};
use lifeops_db::updates::course::CourseUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CourseCommands;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::{parse_date, parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lops course`.
pub async fn handle(
    action: &CourseCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CourseCommands::Create {
            title,
            description,
            status,
            price,
            genre,
            release_date,
            modules,
        } => {
            let input = NewCourse {
                title: title.clone(),
                description: description.clone().unwrap_or_default(),
                status: parse_opt_enum(status.as_deref(), "status")?
                    .unwrap_or(CourseStatus::NotStarted),
                price: price.unwrap_or(0),
                genre: genre.clone().unwrap_or_default(),
                release_date: release_date
                    .as_deref()
                    .map(|raw| parse_date(raw, "release-date"))
                    .transpose()?,
                modules: modules.iter().map(NewModule::titled).collect(),
            };
            let course = ctx.service.create_course(input).await?;
            output(&course, flags.format)
        }
        CourseCommands::Update {
            id,
            title,
            description,
            status,
            price,
            genre,
            release_date,
            clear_release_date,
            modules,
        } => {
            let mut builder = CourseUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(description) = description {
                builder = builder.description(description);
            }
            if let Some(status) = status {
                builder = builder.status(parse_enum(status, "status")?);
            }
            if let Some(price) = price {
                builder = builder.price(*price);
            }
            if let Some(genre) = genre {
                builder = builder.genre(genre);
            }
            if let Some(release_date) = release_date {
                builder = builder.release_date(Some(parse_date(release_date, "release-date")?));
            } else if *clear_release_date {
                builder = builder.release_date(None);
            }
            if !modules.is_empty() {
                builder = builder.modules(modules.iter().map(NewModule::titled).collect());
            }
            let course = ctx.service.update_course(id, builder.build()).await?;
            output(&course, flags.format)
        }
        CourseCommands::List { status, limit } => {
            let status: Option<CourseStatus> = parse_opt_enum(status.as_deref(), "status")?;
            let mut courses = ctx.service.list_courses().await?;
            if let Some(status) = status {
                courses.retain(|c| c.course.status == status);
            }
            truncate(
                &mut courses,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&courses, flags.format)
        }
        CourseCommands::Get { id } => output(&ctx.service.get_course(id).await?, flags.format),
        CourseCommands::Delete { id } => {
            ctx.service.delete_course(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
        CourseCommands::Duplicate { id } => {
            output(&ctx.service.duplicate_course(id).await?, flags.format)
        }
        CourseCommands::Module { module_id, undo } => {
            let module = ctx.service.set_module_completed(module_id, !undo).await?;
            output(&module, flags.format)
        }
    }
}
