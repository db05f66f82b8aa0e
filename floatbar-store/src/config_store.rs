//! Global settings persistence.

use async_trait::async_trait;
use floatbar_core::GlobalConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

use crate::error::StoreError;
use crate::persistence::{default_settings_path, load_json_opt, remove_if_exists, save_json};

// ============================================================================
// Repository Trait
// ============================================================================

/// Where the global settings live.
#[async_trait]
pub trait ConfigRepository: Send + Sync {
    /// Loads the settings. Never-saved settings load as defaults.
    async fn load(&self) -> Result<GlobalConfig, StoreError>;

    /// Replaces the stored settings.
    async fn save(&self, config: &GlobalConfig) -> Result<(), StoreError>;
}

// ============================================================================
// Config Store
// ============================================================================

/// Settings stored as one JSON document.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    /// Creates a store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a store at the platform default location.
    pub fn default_location() -> Self {
        Self::new(default_settings_path())
    }

    /// Returns the settings file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes defaults on first activation and returns the effective settings.
    ///
    /// Existing settings are left untouched.
    pub async fn init(&self) -> Result<GlobalConfig, StoreError> {
        if tokio::fs::try_exists(&self.path).await? {
            return self.load().await;
        }

        info!(path = %self.path.display(), "Writing default settings");
        let config = GlobalConfig::default();
        self.save(&config).await?;
        Ok(config)
    }

    /// Removes the stored settings. Returns true if a file was removed.
    pub async fn delete(&self) -> Result<bool, StoreError> {
        let removed = remove_if_exists(&self.path).await?;
        if removed {
            info!(path = %self.path.display(), "Deleted settings");
        }
        Ok(removed)
    }

    fn load_error(&self, reason: impl ToString) -> StoreError {
        StoreError::ConfigLoad {
            path: self.path.clone(),
            reason: reason.to_string(),
        }
    }
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::default_location()
    }
}

#[async_trait]
impl ConfigRepository for ConfigStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    async fn load(&self) -> Result<GlobalConfig, StoreError> {
        let stored: Option<GlobalConfig> = load_json_opt(&self.path)
            .await
            .map_err(|e| self.load_error(e))?;

        let Some(stored) = stored else {
            debug!("Settings file not found, using defaults");
            return Ok(GlobalConfig::default());
        };

        let config = stored.normalize();
        config.validate().map_err(|e| self.load_error(e))?;
        Ok(config)
    }

    #[instrument(skip(self, config), fields(path = %self.path.display()))]
    async fn save(&self, config: &GlobalConfig) -> Result<(), StoreError> {
        config.validate()?;
        save_json(&self.path, config).await?;
        debug!("Settings saved");
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
