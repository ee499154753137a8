//! Chain-specific receiving addresses.

use core::fmt;
use core::str::FromStr;

use receipt::{Error, PublicKey, Result};

use crate::chain::ChainKind;
use crate::evm::EvmAddress;
use crate::tron::TronAddress;

/// A receiving address in one of the supported encodings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Address {
    /// EVM-compatible chains.
    Evm(EvmAddress),
    /// Tron.
    Tron(TronAddress),
}

impl Address {
    /// Derive the address of `public_key` for the given chain family.
    pub fn derive(public_key: &PublicKey, kind: ChainKind) -> Self {
        match kind {
            ChainKind::EvmLike => Self::Evm(EvmAddress::from_public_key(public_key)),
            ChainKind::Tron => Self::Tron(TronAddress::from_public_key(public_key)),
        }
    }

    /// Classify and validate an address string.
    ///
    /// Strings that decode as a versioned Base58Check payload are Tron
    /// addresses; 40 hex digits (optionally `0x`-prefixed) are EVM.
    pub fn parse(s: &str) -> Result<Self> {
        let s = s.trim();
        if let Ok(evm) = s.parse::<EvmAddress>() {
            return Ok(Self::Evm(evm));
        }
        match s.parse::<TronAddress>() {
            Ok(tron) => Ok(Self::Tron(tron)),
            Err(err @ (Error::InvalidChecksum | Error::InvalidVersion { .. })) => Err(err),
            Err(_) => Err(Error::UnrecognizedAddress),
        }
    }

    /// The encoding family.
    pub const fn kind(&self) -> ChainKind {
        match self {
            Self::Evm(_) => ChainKind::EvmLike,
            Self::Tron(_) => ChainKind::Tron,
        }
    }

    /// The 20 address bytes shared by both encodings.
    pub const fn as_bytes(&self) -> &[u8; 20] {
        match self {
            Self::Evm(addr) => addr.as_bytes(),
            Self::Tron(addr) => addr.as_bytes(),
        }
    }
}

/// Derive the address of `public_key` for the given chain family.
pub fn derive_address(public_key: &PublicKey, kind: ChainKind) -> Address {
    Address::derive(public_key, kind)
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Evm(addr) => fmt::Display::fmt(addr, f),
            Self::Tron(addr) => fmt::Display::fmt(addr, f),
        }
    }
}

impl FromStr for Address {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl From<EvmAddress> for Address {
    fn from(addr: EvmAddress) -> Self {
        Self::Evm(addr)
    }
}

impl From<TronAddress> for Address {
    fn from(addr: TronAddress) -> Self {
        Self::Tron(addr)
    }
}
