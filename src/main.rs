//! Command-line front end for the error presenter
//!
//! # Usage
//!
//! ## Resolve
//! ```bash
//! error-presenter --resources ./strings resolve Checkout.declined
//! error-presenter resolve Checkout.declined --failure-reason "Card expired" --json
//! ```
//!
//! ## Lookup keys
//! ```bash
//! error-presenter keys Checkout.declined
//! ```
//!
//! ## Present
//! ```bash
//! error-presenter present Checkout.declined Network.offline --hold
//! ```

use clap::{Parser, Subcommand};

use error_presenter::cli::{
    GlobalArgs,
    keys::{KeysArgs, run_keys},
    present::{PresentArgs, run_present},
    resolve::{ResolveArgs, run_resolve},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(name = "error-presenter")]
struct Cli {
    #[command(flatten)]
    global: GlobalArgs,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the alert an error resolves to
    Resolve(ResolveArgs),
    /// List the lookup keys consulted for an error
    Keys(KeysArgs),
    /// Present errors on the console
    Present(PresentArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Resolve(args) => run_resolve(&cli.global, args),
        Commands::Keys(args) => run_keys(&cli.global, args),
        Commands::Present(args) => run_present(&cli.global, args),
    }
}
