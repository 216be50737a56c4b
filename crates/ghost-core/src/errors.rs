//! Cross-cutting error types for Kanban Ghost.
//!
//! Crate-specific errors (`ConfigError`, `StoreError`, `ProviderError`) live in
//! their own crates and converge into `anyhow` in the `kghost` binary.

use thiserror::Error;

/// Errors raised by board operations and type parsing.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No task with the given id exists on the board.
    #[error("Task not found: {id}")]
    NotFound { id: String },

    /// Data failed validation (empty text, unknown column name, ...).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    pub(crate) fn not_found(id: &str) -> Self {
        Self::NotFound { id: id.to_string() }
    }
}
