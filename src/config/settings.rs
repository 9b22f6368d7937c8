//! Configuration settings
//!
//! Settings come from a TOML file, environment variables and command-line
//! overrides. Every section is optional in the file.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::localization::{DEFAULT_BUNDLE, LookupScope};
use crate::manager::builder::DEFAULT_UI_THREAD_NAME;

fn default_log_level() -> String {
    "info".to_string()
}

fn default_thread_name() -> String {
    DEFAULT_UI_THREAD_NAME.to_string()
}

/// Main configuration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Lookup configuration
    #[serde(default)]
    pub lookup: LookupSettings,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingSettings,
    /// UI thread configuration
    #[serde(default)]
    pub ui: UiSettings,
}

/// Where localized strings are looked up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct LookupSettings {
    /// Bundle to look strings up in
    #[serde(default)]
    pub bundle: Option<String>,
    /// Table within the bundle
    #[serde(default)]
    pub table: Option<String>,
    /// Directory holding the string tables
    #[serde(default)]
    pub resources_dir: Option<PathBuf>,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

/// UI thread configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiSettings {
    /// Name of the thread presentation runs on
    #[serde(default = "default_thread_name")]
    pub thread_name: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            verbose: false,
        }
    }
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            thread_name: default_thread_name(),
        }
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from environment variables
    pub fn from_env() -> crate::Result<Self> {
        let mut settings = Self::default();

        settings.lookup.bundle = std::env::var("ERROR_PRESENTER_BUNDLE").ok();
        settings.lookup.table = std::env::var("ERROR_PRESENTER_TABLE").ok();
        settings.lookup.resources_dir = std::env::var("ERROR_PRESENTER_RESOURCES")
            .ok()
            .map(PathBuf::from);

        if let Ok(level) = std::env::var("LOG_LEVEL") {
            settings.logging.level = level;
        }

        if let Ok(verbose) = std::env::var("VERBOSE") {
            settings.logging.verbose = verbose.parse().map_err(|e| {
                crate::Error::config("VERBOSE", &format!("Invalid boolean: {}", e))
            })?;
        }

        Ok(settings)
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::config("file", &format!("Failed to read config file: {}", e))
        })?;

        let settings: Settings = toml::from_str(&content).map_err(|e| {
            crate::Error::config("file", &format!("Failed to parse config file: {}", e))
        })?;

        Ok(settings)
    }

    /// Merge settings with environment variable overrides
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        let env_settings = Self::from_env()?;
        let defaults = Self::default();

        if env_settings.lookup.bundle.is_some() {
            self.lookup.bundle = env_settings.lookup.bundle;
        }
        if env_settings.lookup.table.is_some() {
            self.lookup.table = env_settings.lookup.table;
        }
        if env_settings.lookup.resources_dir.is_some() {
            self.lookup.resources_dir = env_settings.lookup.resources_dir;
        }

        if env_settings.logging.level != defaults.logging.level {
            self.logging.level = env_settings.logging.level;
        }
        if env_settings.logging.verbose {
            self.logging.verbose = true;
        }

        Ok(self)
    }

    /// Lookup scope for the configured bundle and table.
    ///
    /// A table without a bundle is looked up in the default bundle; with
    /// neither, the lookup service's own defaults apply.
    pub fn lookup_scope(&self) -> Option<LookupScope> {
        let scope = match (&self.lookup.bundle, &self.lookup.table) {
            (Some(bundle), _) => LookupScope::new(bundle.clone()),
            (None, Some(_)) => LookupScope::new(DEFAULT_BUNDLE),
            (None, None) => return None,
        };

        Some(match &self.lookup.table {
            Some(table) => scope.with_table(table.clone()),
            None => scope,
        })
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        for (field, value) in [
            ("lookup.bundle", &self.lookup.bundle),
            ("lookup.table", &self.lookup.table),
        ] {
            if let Some(value) = value
                && value.trim().is_empty()
            {
                return Err(crate::Error::config(field, "cannot be empty"));
            }
        }

        if let Some(dir) = &self.lookup.resources_dir
            && !dir.is_dir()
        {
            return Err(crate::Error::config(
                "lookup.resources_dir",
                &format!("Not a directory: {}", dir.display()),
            ));
        }

        match self.logging.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(crate::Error::config(
                    "log_level",
                    &format!("Invalid log level: {}", self.logging.level),
                ));
            }
        }

        if self.ui.thread_name.trim().is_empty() {
            return Err(crate::Error::config(
                "ui.thread_name",
                "Thread name cannot be empty",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_TEST_MUTEX;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.lookup.bundle, None);
        assert_eq!(settings.lookup.table, None);
        assert_eq!(settings.logging.level, "info");
        assert!(!settings.logging.verbose);
        assert_eq!(settings.ui.thread_name, "error-presenter-ui");
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[lookup]
bundle = "shop"
table = "Errors"

[logging]
level = "debug"
        "#
        )
        .unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.lookup.bundle.as_deref(), Some("shop"));
        assert_eq!(settings.lookup.table.as_deref(), Some("Errors"));
        assert_eq!(settings.logging.level, "debug");
        assert_eq!(settings.ui.thread_name, "error-presenter-ui");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[lookup\nbundle = ").unwrap();

        let err = Settings::from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, crate::Error::Config { .. }));
    }

    #[test]
    fn test_env_var_override() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        unsafe {
            std::env::set_var("ERROR_PRESENTER_BUNDLE", "env-bundle");
            std::env::set_var("VERBOSE", "true");
        }

        let settings = Settings::default().merge_with_env();

        unsafe {
            std::env::remove_var("ERROR_PRESENTER_BUNDLE");
            std::env::remove_var("VERBOSE");
        }

        let settings = settings.unwrap();
        assert_eq!(settings.lookup.bundle.as_deref(), Some("env-bundle"));
        assert!(settings.logging.verbose);
    }

    #[test]
    fn test_lookup_scope() {
        let mut settings = Settings::default();
        assert_eq!(settings.lookup_scope(), None);

        settings.lookup.table = Some("Errors".to_string());
        assert_eq!(
            settings.lookup_scope(),
            Some(LookupScope::new("main").with_table("Errors"))
        );

        settings.lookup.bundle = Some("shop".to_string());
        settings.lookup.table = None;
        assert_eq!(settings.lookup_scope(), Some(LookupScope::new("shop")));
    }

    #[test]
    fn test_validation_success() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_validation_invalid_log_level() {
        let mut settings = Settings::default();
        settings.logging.level = "loud".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_empty_bundle() {
        let mut settings = Settings::default();
        settings.lookup.bundle = Some("  ".to_string());
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_missing_resources_dir() {
        let mut settings = Settings::default();
        settings.lookup.resources_dir = Some(PathBuf::from("/definitely/not/here"));
        assert!(settings.validate().is_err());
    }
}
