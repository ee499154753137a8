//! # Receipt - receiving-address primitives
//!
//! Cryptographic building blocks for generating fresh receiving addresses:
//!
//! - **Keys**: secp256k1 private keys drawn by rejection sampling from the OS
//!   random source, with range-checked import and public key derivation
//! - **Hashing**: SHA-256, double SHA-256 and the original Keccak-256
//! - **Base58**: long-division Base58 codec and Base58Check checksums
//!
//! Chain-specific address rendering lives in `receipt-chain`.
//!
//! ```
//! use receipt::{base58, PrivateKey};
//!
//! let key = PrivateKey::generate()?;
//! let public_key = key.public_key();
//! assert_eq!(public_key.to_raw_bytes().len(), 64);
//!
//! assert_eq!(base58::encode(b"hello world"), "StV1DL6CwTryKyV");
//! # Ok::<(), receipt::Error>(())
//! ```

#![warn(
    missing_docs,
    rust_2018_idioms,
    clippy::all,
    clippy::pedantic,
    clippy::nursery
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::doc_markdown
)]
#![forbid(unsafe_code)]

pub mod base58;
pub mod error;
pub mod hash;
pub mod key;

pub use error::{Error, Result};
pub use key::{PrivateKey, PublicKey, derive_public_key, generate_private_key};

// Re-export rand_core so callers name the same RNG trait versions
pub use rand_core;
