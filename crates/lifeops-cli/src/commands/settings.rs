use lifeops_core::entities::{AppSettings, UserSettings};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::SettingsCommands;
use crate::commands::shared::parse::parse_opt_enum;
use crate::context::AppContext;
use crate::output::output;

/// Handle `lops settings`.
pub async fn handle(
    action: &SettingsCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SettingsCommands::App => output(&ctx.service.get_app_settings().await?, flags.format),
        SettingsCommands::SetApp { background_color } => {
            let settings = AppSettings {
                background_color: background_color.clone(),
            };
            output(&ctx.service.save_app_settings(&settings).await?, flags.format)
        }
        SettingsCommands::User => output(&ctx.service.get_user_settings().await?, flags.format),
        SettingsCommands::SetUser { .. } => {
            let current = ctx.service.get_user_settings().await?;
            let merged = merge_user_settings(current, action)?;
            output(&ctx.service.save_user_settings(&merged).await?, flags.format)
        }
    }
}

/// Overlay the flags of a `set-user` action onto the stored settings.
fn merge_user_settings(
    mut settings: UserSettings,
    action: &SettingsCommands,
) -> anyhow::Result<UserSettings> {
    let SettingsCommands::SetUser {
        theme,
        language,
        name,
        email,
        timezone,
        notify_email,
        notify_push,
        notify_task_reminders,
        notify_kpi_updates,
    } = action
    else {
        return Ok(settings);
    };

    if let Some(theme) = parse_opt_enum(theme.as_deref(), "theme")? {
        settings.theme = theme;
    }
    if let Some(language) = parse_opt_enum(language.as_deref(), "language")? {
        settings.language = language;
    }
    if let Some(name) = name {
        settings.profile.name.clone_from(name);
    }
    if let Some(email) = email {
        settings.profile.email.clone_from(email);
    }
    if let Some(timezone) = timezone {
        settings.profile.timezone.clone_from(timezone);
    }
    let notifications = &mut settings.notifications;
    notifications.email = notify_email.unwrap_or(notifications.email);
    notifications.push = notify_push.unwrap_or(notifications.push);
    notifications.task_reminders = notify_task_reminders.unwrap_or(notifications.task_reminders);
    notifications.kpi_updates = notify_kpi_updates.unwrap_or(notifications.kpi_updates);
    Ok(settings)
}
