use std::path::{Path, PathBuf};

use anyhow::Context;
use lifeops_config::{LifeOpsConfig, STATE_DIR};
use serde::Serialize;

use crate::bootstrap;
use crate::cli::GlobalFlags;
use crate::cli::root_commands::InitArgs;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct InitResponse {
    project_root: String,
    config_path: String,
    db_path: String,
    created: bool,
}

/// Handle `lops init`.
pub async fn handle(args: &InitArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let root = PathBuf::from(&args.path)
        .canonicalize()
        .with_context(|| format!("cannot initialize '{}': directory does not exist", args.path))?;
    let response = initialize(&root).await?;
    if !flags.quiet {
        output(&response, flags.format)?;
    }
    Ok(())
}

/// Create `.lifeops/`, a default `config.toml`, and the migrated database.
/// Safe to run on an existing project.
async fn initialize(root: &Path) -> anyhow::Result<InitResponse> {
    let state_dir = root.join(STATE_DIR);
    let created = !state_dir.is_dir();
    std::fs::create_dir_all(&state_dir)
        .with_context(|| format!("failed to create {}", state_dir.display()))?;

    let config_path = LifeOpsConfig::project_config_path(root);
    if !config_path.exists() {
        let contents = toml::to_string_pretty(&LifeOpsConfig::default())
            .context("failed to serialize default configuration")?;
        std::fs::write(&config_path, contents)
            .with_context(|| format!("failed to write {}", config_path.display()))?;
    }

    let config = bootstrap::load_config(root)?;
    let db_path = config.storage.resolve_db_path(root);
    AppContext::init(root.to_path_buf(), config).await?;
    tracing::debug!(root = %root.display(), created, "project initialized");

    Ok(InitResponse {
        project_root: root.display().to_string(),
        config_path: config_path.display().to_string(),
        db_path: db_path.display().to_string(),
        created,
    })
}
