//! Store error types.

use floatbar_core::CoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in the store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Settings exist but cannot be read or understood.
    #[error("Failed to load configuration from {path}: {reason}")]
    ConfigLoad {
        /// Settings file.
        path: PathBuf,
        /// What went wrong.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Domain error (rejected reorder, invalid settings).
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl StoreError {
    /// Returns true if the caller submitted malformed input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, StoreError::Core(e) if e.is_invalid_input())
    }

    /// Returns true if the settings could not be loaded.
    pub fn is_config_load(&self) -> bool {
        matches!(self, StoreError::ConfigLoad { .. })
    }
}
