//! Receiving-address generation for EVM chains and Tron.
//!
//! Resolves a free-form chain selector, generates a fresh secp256k1 key and
//! renders its receiving address in the chain's encoding.
//!
//! # Usage
//!
//! ```
//! use receipt_chain::{ChainKind, generate_wallet};
//!
//! let wallet = generate_wallet("TRC20")?;
//! assert_eq!(wallet.kind(), ChainKind::Tron);
//! assert!(wallet.address().starts_with('T'));
//!
//! // Anything that is not TRC20 uses the EVM encoding
//! let wallet = generate_wallet("Polygon")?;
//! assert!(wallet.address().starts_with("0x"));
//! # Ok::<(), receipt::Error>(())
//! ```

#![forbid(unsafe_code)]

mod address;
mod batch;
mod chain;
mod evm;
mod tron;
mod wallet;

pub use address::{Address, derive_address};
pub use batch::{Batch, generate_batch, generate_batch_parallel};
pub use chain::{Chain, ChainKind, DEFAULT_LABEL, TRON_LABEL};
pub use evm::EvmAddress;
pub use tron::{ADDRESS_VERSION as TRON_ADDRESS_VERSION, TronAddress};
pub use wallet::{Wallet, generate_wallet};

pub use receipt::{Error, Result};
