//! Receipt - generate receiving addresses for EVM chains and Tron.
//!
//! Generates batches of fresh wallets, prints them, and exports them to CSV.

mod commands;
mod export;

use clap::Parser;
use commands::{Cli, Commands};
use tracing_subscriber::EnvFilter;

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Logs go to stderr so wallet output on stdout stays pipeable.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::New(cmd) => cmd.execute()?,
        Commands::ImportKey(cmd) => cmd.execute()?,
        Commands::Check(cmd) => cmd.execute()?,
    }
    Ok(())
}
