use lifeops_core::enums::KpiPeriod;
use lifeops_core::inputs::{KpiMilestoneValues, KpiRecordValues, NewKpi};
use lifeops_db::updates::kpi::KpiUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{KpiCommands, KpiMilestoneCommands, KpiRecordCommands};
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::shared::parse::{date_or, parse_enum, parse_opt_enum};
use crate::context::AppContext;
use crate::output::output;

/// Handle `lops kpi`.
pub async fn handle(action: &KpiCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        KpiCommands::Create {
            title,
            description,
            target,
            current,
            unit,
            period,
        } => {
            let input = NewKpi {
                title: title.clone(),
                description: description.clone().unwrap_or_default(),
                target_value: target.unwrap_or(0.0),
                current_value: current.unwrap_or(0.0),
                unit: unit.clone().unwrap_or_default(),
                period: parse_opt_enum(period.as_deref(), "period")?.unwrap_or(KpiPeriod::Monthly),
            };
            output(&ctx.service.create_kpi(input).await?, flags.format)
        }
        KpiCommands::Update {
            id,
            title,
            description,
            target,
            current,
            unit,
            period,
        } => {
            let mut builder = KpiUpdateBuilder::new();
            if let Some(title) = title {
                builder = builder.title(title);
            }
            if let Some(description) = description {
                builder = builder.description(description);
            }
            if let Some(target) = target {
                builder = builder.target_value(*target);
            }
            if let Some(current) = current {
                builder = builder.current_value(*current);
            }
            if let Some(unit) = unit {
                builder = builder.unit(unit);
            }
            if let Some(period) = period.as_deref() {
                builder = builder.period(parse_enum(period, "period")?);
            }
            output(&ctx.service.update_kpi(id, builder.build()).await?, flags.format)
        }
        KpiCommands::List { limit } => {
            let mut kpis = ctx.service.list_kpis().await?;
            truncate(
                &mut kpis,
                effective_limit(*limit, flags.limit, ctx.config.general.default_limit),
            );
            output(&kpis, flags.format)
        }
        KpiCommands::Get { id } => output(&ctx.service.get_kpi(id).await?, flags.format),
        KpiCommands::Delete { id } => {
            ctx.service.delete_kpi(id).await?;
            output(&serde_json::json!({ "deleted": id }), flags.format)
        }
    }
}

/// Handle `lops kpi-record`.
pub async fn handle_record(
    action: &KpiRecordCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        KpiRecordCommands::Save {
            year,
            month,
            income,
            work_hours,
            course_sales,
            subscription,
        } => {
            let values = KpiRecordValues {
                income: *income,
                work_hours: *work_hours,
                course_sales: *course_sales,
                subscription: *subscription,
            };
            output(
                &ctx.service.save_kpi_record(*year, *month, values).await?,
                flags.format,
            )
        }
        KpiRecordCommands::Get { year, month } => {
            let Some(record) = ctx.service.get_kpi_record(*year, *month).await? else {
                anyhow::bail!("no KPI record for {year}-{month:02}");
            };
            output(&record, flags.format)
        }
        KpiRecordCommands::List { year } => {
            output(&ctx.service.list_kpi_records(*year).await?, flags.format)
        }
        KpiRecordCommands::Progress { date } => {
            let today = date_or(date.as_deref(), ctx.today())?;
            output(&ctx.service.kpi_progress(today).await?, flags.format)
        }
    }
}

/// Handle `lops kpi-milestone`.
pub async fn handle_milestone(
    action: &KpiMilestoneCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        KpiMilestoneCommands::Save {
            year,
            quarter,
            income,
            work_hours,
            course_sales,
            subscription,
            notes,
        } => {
            let values = KpiMilestoneValues {
                target_income: *income,
                target_work_hours: *work_hours,
                target_course_sales: *course_sales,
                target_subscription: *subscription,
                notes: notes.clone().unwrap_or_default(),
            };
            output(
                &ctx.service.save_kpi_milestone(*year, *quarter, values).await?,
                flags.format,
            )
        }
        KpiMilestoneCommands::Get { year, quarter } => {
            let Some(milestone) = ctx.service.get_kpi_milestone(*year, *quarter).await? else {
                anyhow::bail!("no KPI targets for {year} Q{quarter}");
            };
            output(&milestone, flags.format)
        }
        KpiMilestoneCommands::List { year } => {
            output(&ctx.service.list_kpi_milestones(*year).await?, flags.format)
        }
    }
}
