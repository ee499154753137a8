//! CLI command definitions and handlers.

mod check;
mod import_key;
mod new;

pub use check::CheckCommand;
use clap::{Parser, Subcommand};
pub use import_key::ImportKeyCommand;
pub use new::NewCommand;

/// Receipt - generate receiving addresses for EVM chains and Tron.
#[derive(Parser)]
#[command(name = "receipt")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable debug logging (RUST_LOG takes precedence).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output.
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a batch of new wallets.
    #[command(name = "new", alias = "generate")]
    New(NewCommand),

    /// Show the addresses of an existing private key.
    #[command(name = "import-key")]
    ImportKey(ImportKeyCommand),

    /// Validate and classify an address.
    #[command(name = "check")]
    Check(CheckCommand),
}
