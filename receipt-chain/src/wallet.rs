//! Single-key receiving wallets.
//!
//! A wallet is the (chain, private key, address) triple handed to the
//! caller. It is created once and never mutated; the private key hex is
//! wiped from memory when the record is dropped.

use core::fmt;

use receipt::{PrivateKey, Result};
use zeroize::Zeroizing;

use crate::address::Address;
use crate::chain::{Chain, ChainKind};

/// A freshly generated receiving wallet.
#[derive(Clone)]
pub struct Wallet {
    chain: Chain,
    private_key_hex: Zeroizing<String>,
    address: Address,
    address_text: String,
}

impl Wallet {
    /// Generate a wallet for a free-form chain selector.
    ///
    /// `"TRC20"` in any letter case yields a Tron address; every other
    /// selector, including an empty one, yields an EVM address.
    ///
    /// # Errors
    ///
    /// Returns [`receipt::Error::Entropy`] if the OS random source fails.
    /// No partial wallet is ever returned.
    pub fn generate(selector: &str) -> Result<Self> {
        let chain = Chain::parse(selector);
        let private_key = PrivateKey::generate()?;
        Ok(Self::from_parts(chain, &private_key))
    }

    /// Build the wallet of an existing private key.
    pub fn from_private_key(selector: &str, private_key: &PrivateKey) -> Self {
        Self::from_parts(Chain::parse(selector), private_key)
    }

    /// Import from a hex private key, with or without `0x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the hex is malformed or the key is out of range.
    pub fn from_private_key_hex(selector: &str, hex_str: &str) -> Result<Self> {
        let private_key = PrivateKey::from_hex(hex_str)?;
        Ok(Self::from_private_key(selector, &private_key))
    }

    fn from_parts(chain: Chain, private_key: &PrivateKey) -> Self {
        let address = Address::derive(&private_key.public_key(), chain.kind());
        Self {
            chain,
            private_key_hex: private_key.to_hex(),
            address_text: address.to_string(),
            address,
        }
    }

    /// Label of the chain the wallet was generated for.
    #[inline]
    pub fn chain(&self) -> &str {
        self.chain.label()
    }

    /// Encoding family of the address.
    #[inline]
    pub const fn kind(&self) -> ChainKind {
        self.chain.kind()
    }

    /// Private key as 64 lowercase hex characters without `0x`.
    #[inline]
    pub fn private_key_hex(&self) -> &str {
        &self.private_key_hex
    }

    /// Receiving address as displayed to the user, rendered once at creation.
    #[inline]
    pub fn address(&self) -> &str {
        &self.address_text
    }

    /// Typed receiving address.
    #[inline]
    pub const fn typed_address(&self) -> &Address {
        &self.address
    }
}

impl fmt::Debug for Wallet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Wallet")
            .field("chain", &self.chain.label())
            .field("private_key_hex", &"[REDACTED]")
            .field("address", &self.address_text)
            .finish()
    }
}

/// Generate one wallet for `selector`. See [`Wallet::generate`].
pub fn generate_wallet(selector: &str) -> Result<Wallet> {
    Wallet::generate(selector)
}
