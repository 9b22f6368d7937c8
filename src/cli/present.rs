//! Present subcommand
//!
//! Presents each error in turn on a console surface.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use tracing::info;

use super::{CliError, GlobalArgs, prepare};
use crate::manager::ErrorManagerBuilder;
use crate::surface::ConsoleSurface;
use crate::types::Presentable;

/// Arguments for the present subcommand
#[derive(Debug, Clone, Args)]
pub struct PresentArgs {
    /// Error keys, presented in order
    #[arg(required = true)]
    pub keys: Vec<String>,

    /// Keep each alert open, so errors arriving while one shows are dropped
    #[arg(long)]
    pub hold: bool,
}

/// Run the present subcommand
pub fn run_present(global: &GlobalArgs, args: PresentArgs) -> Result<()> {
    let settings = prepare(global)?;

    let surface = if args.hold {
        Arc::new(ConsoleSurface::stdout().holding())
    } else {
        Arc::new(ConsoleSurface::stdout())
    };
    let manager = ErrorManagerBuilder::from_settings(&settings)?
        .with_surface(surface.clone())
        .build()?;

    let errors: Vec<Arc<dyn Presentable>> = args
        .keys
        .into_iter()
        .map(|key| Arc::new(CliError::new(key)) as Arc<dyn Presentable>)
        .collect();
    manager.present_all(errors);

    let held = surface.dismiss_held();
    if held > 0 {
        info!("Dismissed {} held alert(s)", held);
    }

    manager.ui_thread().shutdown();
    Ok(())
}
