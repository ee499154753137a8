//! Batch wallet generation command.

use std::path::PathBuf;

use chrono::Local;
use clap::Args;
use colored::Colorize;
use receipt_chain::{Wallet, generate_batch_parallel};

use crate::export;

/// Largest batch accepted in one invocation.
const MAX_COUNT: u16 = 2000;

/// Generate a batch of new wallets.
#[derive(Args)]
pub struct NewCommand {
    /// Chain selector: TRC20 for Tron, anything else (ERC20, Polygon, ...) for EVM.
    #[arg(short, long, default_value = "ERC20")]
    pub(crate) chain: String,

    /// Number of wallets to generate (1-2000).
    #[arg(
        short = 'n',
        long,
        default_value_t = 10,
        value_parser = clap::value_parser!(u16).range(1..=i64::from(MAX_COUNT))
    )]
    pub(crate) count: u16,

    /// Worker threads; 0 uses every available core.
    #[arg(short, long, default_value_t = 1)]
    pub(crate) jobs: usize,

    /// Export to CSV. A directory gets a timestamped `wallets_*.csv` inside it.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,

    /// Do not print the generated wallets.
    #[arg(long)]
    pub(crate) no_table: bool,
}

impl NewCommand {
    /// Execute the generation command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let count = usize::from(self.count);
        tracing::info!(chain = %self.chain, count, jobs = self.jobs, "generating wallets");

        let batch = generate_batch_parallel(&self.chain, count, self.jobs);

        if !self.no_table {
            print_wallets(&batch.wallets);
        }

        // Export whatever was generated, even if the batch stopped early.
        if let Some(output) = &self.output {
            if batch.wallets.is_empty() {
                tracing::warn!("no wallets generated, skipping CSV export");
            } else {
                let path = export::resolve_path(output, Local::now().naive_local());
                export::write_file(&path, &batch.wallets)?;
                println!(
                    "      {}        {} ({} wallets)",
                    "Saved".cyan().bold(),
                    path.display(),
                    batch.wallets.len()
                );
                println!();
            }
        }

        match batch.error {
            Some(err) => Err(format!(
                "generation stopped after {} of {count} wallets: {err}",
                batch.wallets.len()
            )
            .into()),
            None => Ok(()),
        }
    }
}

#[rustfmt::skip]
fn print_wallets(wallets: &[Wallet]) {
    println!();
    for (i, wallet) in wallets.iter().enumerate() {
        if wallets.len() > 1 {
            println!("      {}        {}", "Index".cyan().bold(), format!("[{i}]").dimmed());
        }
        println!("      {}        {}", "Chain".cyan().bold(), wallet.chain());
        println!("      {}      {}", "Address".cyan().bold(), wallet.address().green());
        println!("      {}  0x{}", "Private Key".cyan().bold(), wallet.private_key_hex());
        if i < wallets.len() - 1 {
            println!();
        }
    }
    println!();
}
