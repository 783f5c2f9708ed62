//! Configuration loader with hot reload support

use arc_swap::ArcSwap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tierbank_core::CoreError;

use crate::types::TierbankConfig;

/// Configuration loading errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File not found
    #[error("config file not found: {0}")]
    NotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// Validation error
    #[error("validation error: {0}")]
    Validation(String),
}

impl From<CoreError> for ConfigError {
    fn from(err: CoreError) -> Self {
        ConfigError::Validation(err.to_string())
    }
}

/// Configuration loader with hot reload support
pub struct ConfigLoader {
    /// Current configuration (lock-free swappable)
    config: ArcSwap<TierbankConfig>,

    /// Path to config file (for reload)
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create loader with default configuration
    pub fn new() -> Self {
        Self {
            config: ArcSwap::from_pointee(TierbankConfig::default()),
            config_path: None,
        }
    }

    /// Load configuration from file
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let config = Self::read(path)?;
        tracing::info!(path = %path.display(), tiers = config.tiers.len(), "configuration loaded");

        Ok(Self {
            config: ArcSwap::from_pointee(config),
            config_path: Some(path.to_path_buf()),
        })
    }

    /// Load configuration from string
    pub fn load_str(content: &str) -> Result<Self, ConfigError> {
        let config: TierbankConfig = toml::from_str(content)?;
        Self::validate(&config)?;

        Ok(Self {
            config: ArcSwap::from_pointee(config),
            config_path: None,
        })
    }

    /// Get current configuration (lock-free)
    #[inline]
    pub fn get(&self) -> Arc<TierbankConfig> {
        self.config.load_full()
    }

    /// Path the configuration was loaded from, if any
    pub fn path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Reload configuration from file.
    ///
    /// On failure the previous configuration stays in place.
    pub fn reload(&self) -> Result<(), ConfigError> {
        let path = self
            .config_path
            .as_ref()
            .ok_or_else(|| ConfigError::Validation("no config file path set".to_string()))?;

        let new_config = Self::read(path)?;

        // Atomic swap - existing readers continue with old config
        self.config.store(Arc::new(new_config));

        tracing::info!("Configuration reloaded successfully");
        Ok(())
    }

    fn read(path: &Path) -> Result<TierbankConfig, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: TierbankConfig = toml::from_str(&content)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate configuration
    fn validate(config: &TierbankConfig) -> Result<(), ConfigError> {
        config.schedule()?;

        if config.server.log_level.trim().is_empty() {
            return Err(ConfigError::Validation("server.log_level is empty".to_string()));
        }

        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
