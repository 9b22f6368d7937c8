//! Resolve subcommand
//!
//! Prints the title, message and button text an error would be shown with.

use anyhow::Result;
use clap::Args;
use tracing::debug;

use super::{CliError, GlobalArgs, prepare};
use crate::manager::ErrorManagerBuilder;
use crate::surface::ConsoleSurface;

/// Arguments for the resolve subcommand
#[derive(Debug, Clone, Args)]
pub struct ResolveArgs {
    /// Error key, e.g. `Checkout.declined`
    pub key: String,

    /// Description supplied by the error itself
    #[arg(long)]
    pub description: Option<String>,

    /// Failure reason supplied by the error itself
    #[arg(long)]
    pub failure_reason: Option<String>,

    /// Recovery suggestion supplied by the error itself
    #[arg(long)]
    pub recovery_suggestion: Option<String>,

    /// Print the alert as JSON
    #[arg(long)]
    pub json: bool,
}

impl ResolveArgs {
    fn error(&self) -> CliError {
        CliError {
            key: self.key.clone(),
            description: self.description.clone(),
            failure_reason: self.failure_reason.clone(),
            recovery_suggestion: self.recovery_suggestion.clone(),
        }
    }
}

/// Run the resolve subcommand
pub fn run_resolve(global: &GlobalArgs, args: ResolveArgs) -> Result<()> {
    let settings = prepare(global)?;
    let manager = ErrorManagerBuilder::from_settings(&settings)?.build()?;

    let error = args.error();
    let alert = manager.alert_for(&error);
    debug!("Resolved {:?} to {:?}", error, alert);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&alert)?);
    } else {
        print!("{}", ConsoleSurface::render(&alert));
    }

    Ok(())
}
