//! Service layer hosting every repository method.
//!
//! `LifeService` wraps `LifeDb`. Repo methods are implemented as
//! `impl LifeService` blocks in `repos/*`, one module per table group.

use crate::LifeDb;
use crate::error::DatabaseError;

pub struct LifeService {
    db: LifeDb,
}

impl LifeService {
    /// Open (and migrate) a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = LifeDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `LifeDb`.
    #[must_use]
    pub const fn from_db(db: LifeDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &LifeDb {
        &self.db
    }
}
