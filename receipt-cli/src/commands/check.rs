//! Address validation command.

use clap::Args;
use colored::Colorize;
use receipt_chain::{Address, TronAddress};

/// Validate and classify an address.
#[derive(Args)]
pub struct CheckCommand {
    /// EVM (0x...) or Tron (T...) address.
    address: String,
}

impl CheckCommand {
    /// Execute the check command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let address = Address::parse(&self.address)?;
        tracing::debug!(kind = %address.kind(), "address parsed");

        // The other encoding of the same 20 bytes.
        let counterpart = match address {
            Address::Evm(evm) => TronAddress::from_evm(evm).to_string(),
            Address::Tron(tron) => tron.to_evm().to_string(),
        };

        print_address(&address, &counterpart);
        Ok(())
    }
}

#[rustfmt::skip]
fn print_address(address: &Address, counterpart: &str) {
    println!();
    println!("      {}       {}", "Family".cyan().bold(), address.kind());
    println!("      {}      {}", "Address".cyan().bold(), address.to_string().green());
    println!("      {}        {}", "Bytes".cyan().bold(), hex::encode(address.as_bytes()).dimmed());
    println!("      {}     {}", "Same key".cyan().bold(), counterpart);
    println!();
}
