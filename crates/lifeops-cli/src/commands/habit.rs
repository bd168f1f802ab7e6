use chrono::{Days, NaiveDate};
use lifeops_core::calendar::week_bounds;
use lifeops_core::entities::HabitCheck;
use lifeops_core::enums::Habit;
use lifeops_core::responses::HabitStatus;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{HabitCommands, PlanCommands};
use crate::commands::shared::parse::{date_or, parse_date, parse_enum};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct StreakResponse {
    habit: Habit,
    date: NaiveDate,
    streak: u32,
}

/// Handle `lops habit`.
pub async fn handle(
    action: &HabitCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        HabitCommands::Get { date } => {
            let date = date_or(date.as_deref(), ctx.today())?;
            let check = ctx.service.get_habit_check(date).await?;
            output(&HabitStatus::for_day(date, check.as_ref()), flags.format)
        }
        HabitCommands::Toggle { habit, date } => {
            let habit: Habit = parse_enum(habit, "habit")?;
            let date = date_or(date.as_deref(), ctx.today())?;
            output(&ctx.service.toggle_habit(date, habit).await?, flags.format)
        }
        HabitCommands::Set { habit, date, off } => {
            let habit: Habit = parse_enum(habit, "habit")?;
            let date = date_or(date.as_deref(), ctx.today())?;
            output(&ctx.service.set_habit(date, habit, !off).await?, flags.format)
        }
        HabitCommands::List { from, to } => {
            let from = parse_date(from, "from")?;
            let to = parse_date(to, "to")?;
            if from > to {
                anyhow::bail!("--from {from} is after --to {to}");
            }
            output(&ctx.service.list_habit_checks(from, to).await?, flags.format)
        }
        HabitCommands::Week { date } => {
            let (start, end) = week_bounds(date_or(date.as_deref(), ctx.today())?);
            let checks = ctx.service.list_habit_checks(start, end).await?;
            output(&week_statuses(start, &checks), flags.format)
        }
        HabitCommands::Streak { habit, date } => {
            let habit: Habit = parse_enum(habit, "habit")?;
            let date = date_or(date.as_deref(), ctx.today())?;
            let streak = ctx.service.habit_streak(habit, date).await?;
            output(&StreakResponse { habit, date, streak }, flags.format)
        }
    }
}

/// Handle `lops plan`.
pub async fn handle_plan(
    action: &PlanCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PlanCommands::Set {
            day,
            activities,
            hours,
        } => output(
            &ctx.service.save_habit_plan(*day, activities, *hours).await?,
            flags.format,
        ),
        PlanCommands::Delete { day } => {
            ctx.service.delete_habit_plan(*day).await?;
            output(&serde_json::json!({ "deleted": day }), flags.format)
        }
        PlanCommands::List => output(&ctx.service.list_habit_plans().await?, flags.format),
        PlanCommands::Week => output(&ctx.service.weekly_plan().await?, flags.format),
    }
}

/// One row per day from `start`, unchecked where no row exists.
fn week_statuses(start: NaiveDate, checks: &[HabitCheck]) -> Vec<HabitStatus> {
    (0..7)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .map(|day| HabitStatus::for_day(day, checks.iter().find(|c| c.date == day)))
        .collect()
}
