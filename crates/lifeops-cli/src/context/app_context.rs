use std::path::PathBuf;

use anyhow::Context;
use chrono::{FixedOffset, NaiveDate, Utc};
use lifeops_config::LifeOpsConfig;
use lifeops_db::service::LifeService;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub service: LifeService,
    pub config: LifeOpsConfig,
    pub project_root: PathBuf,
}

impl AppContext {
    /// Open the project's database using the resolved configuration.
    pub async fn init(project_root: PathBuf, config: LifeOpsConfig) -> anyhow::Result<Self> {
        let db_path = config.storage.resolve_db_path(&project_root);
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }

        let db_path_str = db_path.to_string_lossy();
        let service = LifeService::new_local(&db_path_str)
            .await
            .with_context(|| format!("failed to open database at {db_path_str}"))?;
        tracing::debug!(path = %db_path_str, "lifeops database ready");

        Ok(Self {
            service,
            config,
            project_root,
        })
    }

    /// Calendar date in the configured UTC offset.
    #[must_use]
    pub fn today(&self) -> NaiveDate {
        today_at_offset(self.config.general.timezone_offset_secs())
    }
}

/// Current date at a fixed UTC offset; an invalid offset falls back to UTC.
#[must_use]
pub fn today_at_offset(offset_secs: i32) -> NaiveDate {
    let now = Utc::now();
    FixedOffset::east_opt(offset_secs).map_or_else(
        || now.date_naive(),
        |offset| now.with_timezone(&offset).date_naive(),
    )
}
