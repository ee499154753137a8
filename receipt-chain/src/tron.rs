//! Tron address.
//!
//! A Tron address is the EVM address of the same key with the mainnet
//! version byte `0x41` in front, Base58Check encoded into a 34-character
//! string starting with `T`.

use core::fmt;
use core::str::FromStr;

use receipt::{Error, PublicKey, Result, base58};

use crate::evm::{ADDRESS_LEN, EvmAddress};

/// Mainnet address version byte.
pub const ADDRESS_VERSION: u8 = 0x41;

/// Length of the versioned payload (version byte + 20 address bytes).
pub const PAYLOAD_LEN: usize = 1 + ADDRESS_LEN;

/// Tron address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TronAddress(EvmAddress);

impl TronAddress {
    /// Derive from a public key.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        Self(EvmAddress::from_public_key(public_key))
    }

    /// Re-encode the 20 address bytes of an EVM address for Tron.
    pub const fn from_evm(address: EvmAddress) -> Self {
        Self(address)
    }

    /// The 20 address bytes, without the version byte.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        self.0.as_bytes()
    }

    /// The same 20 bytes as an EVM address.
    pub const fn to_evm(self) -> EvmAddress {
        self.0
    }

    /// Versioned payload: `0x41 || address`.
    pub fn payload(&self) -> [u8; PAYLOAD_LEN] {
        let mut payload = [0u8; PAYLOAD_LEN];
        payload[0] = ADDRESS_VERSION;
        payload[1..].copy_from_slice(self.as_bytes());
        payload
    }

    /// Base58Check string of `payload || double_sha256(payload)[..4]`.
    pub fn to_base58check(&self) -> String {
        base58::check_encode(&self.payload())
    }
}

impl fmt::Display for TronAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_base58check())
    }
}

impl FromStr for TronAddress {
    type Err = Error;

    /// Parse a Base58Check Tron address, checking length, checksum and
    /// version byte.
    fn from_str(s: &str) -> Result<Self> {
        let payload = base58::check_decode(s)?;
        if payload.len() != PAYLOAD_LEN {
            return Err(Error::InvalidLength {
                expected: PAYLOAD_LEN,
                actual: payload.len(),
            });
        }
        if payload[0] != ADDRESS_VERSION {
            return Err(Error::InvalidVersion {
                expected: ADDRESS_VERSION,
                actual: payload[0],
            });
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&payload[1..]);
        Ok(Self(EvmAddress::from_bytes(bytes)))
    }
}

impl From<EvmAddress> for TronAddress {
    fn from(address: EvmAddress) -> Self {
        Self::from_evm(address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use receipt::hash::double_sha256;

    const KEY_ONE: [u8; 32] =
        hex_literal::hex!("0000000000000000000000000000000000000000000000000000000000000001");

    #[test]
    fn test_private_key_one() {
        let public_key = receipt::derive_public_key(&KEY_ONE).unwrap();
        let addr = TronAddress::from_public_key(&public_key);
        assert_eq!(addr.to_string(), "TMVQGm1qAQYVdetCeGRRkTWYYrLXuHK2HC");
        assert_eq!(
            addr.payload(),
            hex_literal::hex!("417e5f4552091a69125d5dfcb7b8c2659029395bdf")
        );
    }

    #[test]
    fn test_known_private_key() {
        let key: receipt::PrivateKey =
            "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318"
                .parse()
                .unwrap();
        let addr = TronAddress::from_public_key(&key.public_key());
        assert_eq!(addr.to_string(), "TE2H9hWjzYdwzDFRJfx9BFhr4MmjH1CHaz");
    }

    #[test]
    fn test_structure_of_generated_address() {
        let key = receipt::PrivateKey::generate().unwrap();
        let addr = TronAddress::from_public_key(&key.public_key()).to_string();
        assert!(addr.starts_with('T'));
        assert_eq!(addr.len(), 34);

        let raw = base58::decode(&addr).unwrap();
        assert_eq!(raw.len(), 25);
        assert_eq!(raw[0], 0x41);
        assert_eq!(raw[21..], double_sha256(&raw[..21])[..4]);
    }

    #[test]
    fn test_shares_bytes_with_evm() {
        let public_key = receipt::derive_public_key(&KEY_ONE).unwrap();
        let evm = EvmAddress::from_public_key(&public_key);
        let tron = TronAddress::from_public_key(&public_key);
        assert_eq!(tron.to_evm(), evm);
        assert_eq!(TronAddress::from(evm), tron);
    }

    #[test]
    fn test_parse_roundtrip() {
        let addr: TronAddress = "TMVQGm1qAQYVdetCeGRRkTWYYrLXuHK2HC".parse().unwrap();
        assert_eq!(
            addr.as_bytes(),
            &hex_literal::hex!("7e5f4552091a69125d5dfcb7b8c2659029395bdf")
        );
        assert_eq!(addr.to_string(), "TMVQGm1qAQYVdetCeGRRkTWYYrLXuHK2HC");
    }

    #[test]
    fn test_parse_rejects_bitcoin_version() {
        // valid Base58Check, but version 0x00 with a 20-byte body
        let result = "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa".parse::<TronAddress>();
        assert!(matches!(
            result,
            Err(Error::InvalidVersion {
                expected: 0x41,
                actual: 0x00
            })
        ));
    }

    #[test]
    fn test_parse_rejects_corrupted_checksum() {
        let result = "TMVQGm1qAQYVdetCeGRRkTWYYrLXuHK2HD".parse::<TronAddress>();
        assert!(matches!(result, Err(Error::InvalidChecksum)));
    }
}
