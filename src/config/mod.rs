//! Configuration management
//!
//! Loads the lookup scope, string table location, logging and UI thread
//! settings from a config file and the environment.

pub mod loader;
pub mod settings;

pub use loader::{ConfigLoader, ConfigOverrides};
pub use settings::{LoggingSettings, LookupSettings, Settings, UiSettings};

// Static mutex to ensure environment variable tests don't interfere with each other
#[cfg(test)]
pub(crate) static ENV_TEST_MUTEX: std::sync::Mutex<()> = std::sync::Mutex::new(());
