//! Address lookup for an existing private key.

use clap::Args;
use colored::Colorize;
use receipt::PrivateKey;
use receipt_chain::{EvmAddress, TronAddress, Wallet};

/// Show the addresses of an existing private key.
#[derive(Args)]
pub struct ImportKeyCommand {
    /// Private key in hex format (with or without 0x prefix).
    #[arg(short, long)]
    key: String,

    /// Chain selector. Shows both the EVM and Tron address when omitted.
    #[arg(short, long)]
    chain: Option<String>,
}

impl ImportKeyCommand {
    /// Execute the import command.
    pub fn execute(self) -> Result<(), Box<dyn std::error::Error>> {
        let private_key = PrivateKey::from_hex(self.key.trim())?;

        match self.chain.as_deref() {
            Some(selector) => print_wallet(&Wallet::from_private_key(selector, &private_key)),
            None => print_all(&private_key),
        }
        Ok(())
    }
}

#[rustfmt::skip]
fn print_wallet(wallet: &Wallet) {
    println!();
    println!("      {}        {}", "Chain".cyan().bold(), wallet.chain());
    println!("      {}      {}", "Address".cyan().bold(), wallet.address().green());
    println!("      {}  0x{}", "Private Key".cyan().bold(), wallet.private_key_hex());
    println!();
}

#[rustfmt::skip]
fn print_all(private_key: &PrivateKey) {
    let public_key = private_key.public_key();
    let evm = EvmAddress::from_public_key(&public_key);
    let tron = TronAddress::from_evm(evm);

    println!();
    println!("      {}          {}", "EVM".cyan().bold(), evm.to_string().green());
    println!("      {}         {}", "Tron".cyan().bold(), tron.to_string().green());
    println!("      {}   0x{}", "Public Key".cyan().bold(), public_key.to_hex().dimmed());
    println!();
}
