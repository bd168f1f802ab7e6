use std::path::Path;

use anyhow::Context;
use lifeops_config::LifeOpsConfig;

/// Load `.env` from the project root (falling back to the usual dotenv
/// search), then the layered configuration.
pub fn load_config(project_root: &Path) -> anyhow::Result<LifeOpsConfig> {
    let env_path = project_root.join(".env");
    if env_path.exists() {
        dotenvy::from_path(&env_path)
            .with_context(|| format!("failed to load dotenv file at {}", env_path.display()))?;
    } else {
        dotenvy::dotenv().ok();
    }

    LifeOpsConfig::load_from(project_root).context("failed to load lifeops configuration")
}
