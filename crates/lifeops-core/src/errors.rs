//! Cross-cutting error types for LifeOps.
//!
//! Storage errors (`DatabaseError`) live in `lifeops-db`. The CLI converges
//! everything into `anyhow::Error`.

use thiserror::Error;

/// Errors that can be raised by any LifeOps crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (range, format, required field).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
