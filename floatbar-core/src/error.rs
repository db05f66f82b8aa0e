//! Core error types for floatbar.

use thiserror::Error;

use crate::models::ServiceId;

/// Core error type for floatbar operations.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A submitted identifier is not one of the supported services.
    #[error("Invalid service: {0}")]
    InvalidService(String),

    /// A service appears more than once in a submitted ordering.
    #[error("Duplicate service: {0}")]
    DuplicateService(ServiceId),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CoreError {
    /// Returns true if this error was caused by malformed caller input.
    pub fn is_invalid_input(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidService(_) | CoreError::DuplicateService(_)
        )
    }
}
