//! Local database location.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Directory holding project-local state, relative to the project root.
pub const STATE_DIR: &str = ".lifeops";

/// Database file name inside [`STATE_DIR`].
pub const DB_FILE: &str = "lifeops.db";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Database path. Empty means `.lifeops/lifeops.db` under the project
    /// root; relative paths are resolved against the project root.
    #[serde(default)]
    pub db_path: String,
}

impl StorageConfig {
    /// Resolve the database file for a project.
    #[must_use]
    pub fn resolve_db_path(&self, project_root: &Path) -> PathBuf {
        if self.db_path.is_empty() {
            return project_root.join(STATE_DIR).join(DB_FILE);
        }
        let path = PathBuf::from(&self.db_path);
        if path.is_absolute() {
            path
        } else {
            project_root.join(path)
        }
    }
}
