//! Keys subcommand
//!
//! Lists the lookup keys consulted for an error, which is what a string
//! table needs to contain.

use anyhow::Result;
use clap::Args;

use super::{CliError, GlobalArgs, prepare};
use crate::localization::{field_keys, generic_key};

/// Arguments for the keys subcommand
#[derive(Debug, Clone, Args)]
pub struct KeysArgs {
    /// Error key, e.g. `Checkout.declined`
    pub key: String,
}

/// One line per field: the field, its specific key, then its generic key
pub fn key_lines(key: &str) -> Vec<String> {
    field_keys(&CliError::new(key))
        .into_iter()
        .map(|(kind, specific)| format!("{:<22}{:<48}{}", kind, specific, generic_key(kind)))
        .collect()
}

/// Run the keys subcommand
pub fn run_keys(global: &GlobalArgs, args: KeysArgs) -> Result<()> {
    prepare(global)?;

    for line in key_lines(&args.key) {
        println!("{}", line.trim_end());
    }

    Ok(())
}
