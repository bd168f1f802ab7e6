//! # lifeops-config
//!
//! Layered configuration loading for LifeOps using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LIFEOPS_*` prefix, `__` as separator)
//! 2. Project-level `.lifeops/config.toml`
//! 3. User-level `~/.config/lifeops/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LIFEOPS_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`,
//! `LIFEOPS_STORAGE__DB_PATH` -> `storage.db_path`.
//!
//! # Usage
//!
//! ```no_run
//! use lifeops_config::LifeOpsConfig;
//!
//! let config = LifeOpsConfig::load_with_dotenv().expect("config");
//! println!("list limit: {}", config.general.default_limit);
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::{DB_FILE, STATE_DIR, StorageConfig};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "LIFEOPS_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LifeOpsConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl LifeOpsConfig {
    /// Load configuration from all sources, using `.lifeops/config.toml`
    /// relative to the current directory.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env`
    /// support.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration for a project rooted at `project_root`.
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(project_root).extract()?;
        config.general.validate()?;
        Ok(config)
    }

    /// Load `.env` from the current directory first, then all sources.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain for a project.
    pub fn figment(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = Self::project_config_path(project_root);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// `<project_root>/.lifeops/config.toml`.
    #[must_use]
    pub fn project_config_path(project_root: &Path) -> PathBuf {
        project_root.join(STATE_DIR).join("config.toml")
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lifeops").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = LifeOpsConfig::default();
        assert_eq!(config.general.default_limit, 20);
        assert!(config.storage.db_path.is_empty());
    }

    #[test]
    fn project_config_path_is_in_state_dir() {
        assert_eq!(
            LifeOpsConfig::project_config_path(Path::new("/p")),
            PathBuf::from("/p/.lifeops/config.toml")
        );
    }
}
