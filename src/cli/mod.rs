//! Command-line front end
//!
//! Each subcommand builds an [`ErrorManager`](crate::ErrorManager) from the
//! loaded settings and feeds it errors described on the command line.

pub mod keys;
pub mod present;
pub mod resolve;

use std::fmt;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use tracing::debug;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{ConfigLoader, ConfigOverrides, Settings};
use crate::types::{Described, Keyed, Presentable};

/// Options shared by every subcommand
#[derive(Debug, Clone, Default, Args)]
pub struct GlobalArgs {
    /// Configuration file path
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory holding the string tables
    #[arg(long, global = true, value_name = "DIR")]
    pub resources: Option<PathBuf>,

    /// Bundle to look strings up in
    #[arg(long, global = true)]
    pub bundle: Option<String>,

    /// Table within the bundle
    #[arg(long, global = true)]
    pub table: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            bundle: self.bundle.clone(),
            table: self.table.clone(),
            resources_dir: self.resources.clone(),
            verbose: self.verbose,
        }
    }
}

/// Load settings and install the log subscriber.
///
/// Configuration precedence:
/// 1. Command line arguments (highest priority)
/// 2. Environment variables
/// 3. Configuration file (from --config, ERROR_PRESENTER_CONFIG or default location)
/// 4. Default values (lowest priority)
pub fn prepare(args: &GlobalArgs) -> anyhow::Result<Settings> {
    let config_path = match &args.config {
        Some(path) => Some(path.clone()),
        None => ConfigLoader::get_config_path(),
    };

    let settings =
        ConfigLoader::new().load_with_overrides(config_path.as_deref(), &args.overrides())?;
    init_logging(&settings);
    debug!(
        "error-presenter v{} (scope: {:?})",
        env!("CARGO_PKG_VERSION"),
        settings.lookup_scope()
    );

    Ok(settings)
}

/// Install the log subscriber, writing to stderr.
///
/// Level precedence: `--verbose`, then `RUST_LOG`, then `logging.level`.
pub fn init_logging(settings: &Settings) {
    let env_filter = if settings.logging.verbose {
        EnvFilter::new("debug")
    } else if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(&settings.logging.level)
    };

    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// An error named on the command line
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CliError {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recovery_suggestion: Option<String>,
}

impl CliError {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            ..Default::default()
        }
    }

    fn has_description(&self) -> bool {
        self.description.is_some()
            || self.failure_reason.is_some()
            || self.recovery_suggestion.is_some()
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.key)
    }
}

impl std::error::Error for CliError {}

impl Keyed for CliError {
    fn error_key(&self) -> String {
        self.key.clone()
    }
}

impl Described for CliError {
    fn localized_description(&self) -> Option<String> {
        self.description.clone()
    }

    fn failure_reason(&self) -> Option<String> {
        self.failure_reason.clone()
    }

    fn recovery_suggestion(&self) -> Option<String> {
        self.recovery_suggestion.clone()
    }
}

impl Presentable for CliError {
    fn as_keyed(&self) -> Option<&dyn Keyed> {
        Some(self)
    }

    /// Only errors given explicit strings skip the lookup tiers
    fn as_described(&self) -> Option<&dyn Described> {
        self.has_description().then_some(self as &dyn Described)
    }
}
