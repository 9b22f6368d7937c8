//! Configuration loading utilities
//!
//! Provides helper functions for loading configuration from various sources
//! with proper error handling and validation.

use crate::{Result, config::Settings};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Values given on the command line; they win over every other source
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub bundle: Option<String>,
    pub table: Option<String>,
    pub resources_dir: Option<PathBuf>,
    pub verbose: bool,
}

impl ConfigOverrides {
    fn apply(&self, mut settings: Settings) -> Settings {
        if let Some(bundle) = &self.bundle {
            settings.lookup.bundle = Some(bundle.clone());
        }
        if let Some(table) = &self.table {
            settings.lookup.table = Some(table.clone());
        }
        if let Some(dir) = &self.resources_dir {
            settings.lookup.resources_dir = Some(dir.clone());
        }
        if self.verbose {
            settings.logging.verbose = true;
        }
        settings
    }
}

/// Configuration loader with multiple source support
#[derive(Debug)]
pub struct ConfigLoader {
    /// Default settings
    defaults: Settings,
}

impl ConfigLoader {
    /// Create new configuration loader
    pub fn new() -> Self {
        Self {
            defaults: Settings::default(),
        }
    }

    /// Get the config file path from ERROR_PRESENTER_CONFIG environment variable or default location
    ///
    /// Priority:
    /// 1. ERROR_PRESENTER_CONFIG environment variable
    /// 2. ~/.config/error-presenter/config.toml (or platform equivalent)
    pub fn get_config_path() -> Option<PathBuf> {
        if let Ok(config_path) = std::env::var("ERROR_PRESENTER_CONFIG") {
            let path = PathBuf::from(config_path);
            if path.exists() {
                debug!("Using config file from ERROR_PRESENTER_CONFIG: {:?}", path);
                return Some(path);
            } else {
                warn!(
                    "ERROR_PRESENTER_CONFIG points to non-existent file: {:?}",
                    path
                );
            }
        }

        if let Some(config_dir) = dirs::config_dir() {
            let default_path = config_dir.join("error-presenter").join("config.toml");
            if default_path.exists() {
                debug!("Using default config file: {:?}", default_path);
                return Some(default_path);
            }
        }

        debug!("No config file found");
        None
    }

    /// Load configuration with precedence order:
    /// 1. Environment variables
    /// 2. Configuration file
    /// 3. Default values (lowest priority)
    pub fn load(&self, config_file: Option<&Path>) -> Result<Settings> {
        self.load_with_overrides(config_file, &ConfigOverrides::default())
    }

    /// Load configuration with command-line overrides on top of
    /// [`load`](Self::load)'s sources
    pub fn load_with_overrides(
        &self,
        config_file: Option<&Path>,
        overrides: &ConfigOverrides,
    ) -> Result<Settings> {
        let mut settings = self.defaults.clone();

        if let Some(path) = config_file {
            if path.exists() {
                info!("Loading configuration from file: {:?}", path);
                settings = Settings::from_file(path)?;
            } else {
                warn!("Configuration file not found: {:?}, using defaults", path);
            }
        }

        debug!("Applying environment variable overrides");
        settings = settings.merge_with_env()?;
        settings = overrides.apply(settings);

        settings.validate()?;

        debug!("Final configuration: {:?}", settings);

        Ok(settings)
    }

    /// Load configuration from environment only
    pub fn from_env_only(&self) -> Result<Settings> {
        let settings = Settings::from_env()?;
        settings.validate()?;
        Ok(settings)
    }

    /// Get default configuration
    pub fn defaults(&self) -> &Settings {
        &self.defaults
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}
