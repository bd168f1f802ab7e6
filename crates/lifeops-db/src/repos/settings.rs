//! Single-row application and user settings.

use chrono::Utc;
use lifeops_core::entities::{AppSettings, UserSettings};
use lifeops_core::validate;

use crate::error::DatabaseError;
use crate::service::LifeService;

impl LifeService {
    /// Saved app settings, or the defaults.
    pub async fn get_app_settings(&self) -> Result<AppSettings, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT background_color FROM app_settings WHERE id = 1", ())
            .await?;
        match rows.next().await? {
            Some(row) => Ok(AppSettings {
                background_color: row.get(0)?,
            }),
            None => Ok(AppSettings::default()),
        }
    }

    pub async fn save_app_settings(
        &self,
        settings: &AppSettings,
    ) -> Result<AppSettings, DatabaseError> {
        validate::hex_color("background_color", &settings.background_color)?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO app_settings (id, background_color, updated_at) VALUES (1, ?1, ?2)
                 ON CONFLICT (id) DO UPDATE SET
                     background_color = excluded.background_color,
                     updated_at = excluded.updated_at",
                libsql::params![
                    settings.background_color.as_str(),
                    Utc::now().to_rfc3339()
                ],
            )
            .await?;
        tracing::debug!(background_color = %settings.background_color, "app settings saved");
        Ok(settings.clone())
    }

    /// Saved user settings, or the defaults. Fields missing from an older
    /// saved document take their default values.
    pub async fn get_user_settings(&self) -> Result<UserSettings, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT settings FROM user_settings WHERE id = 1", ())
            .await?;
        match rows.next().await? {
            Some(row) => Ok(serde_json::from_str(&row.get::<String>(0)?)?),
            None => Ok(UserSettings::default()),
        }
    }

    pub async fn save_user_settings(
        &self,
        settings: &UserSettings,
    ) -> Result<UserSettings, DatabaseError> {
        let json = serde_json::to_string(settings)?;
        self.db()
            .conn()
            .execute(
                "INSERT INTO user_settings (id, settings, updated_at) VALUES (1, ?1, ?2)
                 ON CONFLICT (id) DO UPDATE SET
                     settings = excluded.settings,
                     updated_at = excluded.updated_at",
                libsql::params![json, Utc::now().to_rfc3339()],
            )
            .await?;
        tracing::debug!(theme = %settings.theme, language = %settings.language, "user settings saved");
        Ok(settings.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::test_service;
    use lifeops_core::enums::{Language, Theme};
    use pretty_assertions::assert_eq;

    #[tokio::test]
    async fn app_settings_default_then_saved() {
        let svc = test_service().await;
        assert_eq!(svc.get_app_settings().await.unwrap(), AppSettings::default());

        let saved = svc
            .save_app_settings(&AppSettings {
                background_color: "#1E293B".into(),
            })
            .await
            .unwrap();
        assert_eq!(svc.get_app_settings().await.unwrap(), saved);
    }

    #[tokio::test]
    async fn app_settings_rejects_bad_color() {
        let svc = test_service().await;
        assert!(matches!(
            svc.save_app_settings(&AppSettings {
                background_color: "blue".into(),
            })
            .await,
            Err(DatabaseError::Validation(_))
        ));
        assert_eq!(svc.get_app_settings().await.unwrap(), AppSettings::default());
    }

    #[tokio::test]
    async fn user_settings_roundtrip() {
        let svc = test_service().await;
        assert_eq!(
            svc.get_user_settings().await.unwrap(),
            UserSettings::default()
        );

        let mut settings = UserSettings::default();
        settings.theme = Theme::Dark;
        settings.language = Language::En;
        settings.notifications.push = false;
        settings.profile.name = "Sora".into();
        svc.save_user_settings(&settings).await.unwrap();

        assert_eq!(svc.get_user_settings().await.unwrap(), settings);
    }

    #[tokio::test]
    async fn user_settings_tolerates_partial_document() {
        let svc = test_service().await;
        svc.db()
            .conn()
            .execute(
                "INSERT INTO user_settings (id, settings, updated_at) VALUES (1, ?1, ?2)",
                libsql::params![r#"{"theme":"light"}"#, Utc::now().to_rfc3339()],
            )
            .await
            .unwrap();
        let settings = svc.get_user_settings().await.unwrap();
        assert_eq!(settings.theme, Theme::Light);
        assert_eq!(settings.language, Language::Ja);
        assert!(settings.notifications.email);
    }
}
