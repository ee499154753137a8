//! EVM address with EIP-55 checksum encoding.
//!
//! Every EVM-compatible chain (Ethereum, Polygon, BSC, ...) derives the same
//! 20 bytes from a public key; only the label shown to the user differs.

use core::fmt;
use core::str::FromStr;

use receipt::hash::keccak256;
use receipt::{Error, PublicKey, Result};

/// Length of an EVM address in bytes.
pub const ADDRESS_LEN: usize = 20;

/// EVM address (20 bytes).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EvmAddress([u8; ADDRESS_LEN]);

impl EvmAddress {
    /// Create from raw 20-byte address.
    pub const fn from_bytes(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }

    /// Derive from a public key: the last 20 bytes of `keccak256(X || Y)`.
    pub fn from_public_key(public_key: &PublicKey) -> Self {
        let hash = keccak256(&public_key.to_raw_bytes());
        let mut bytes = [0u8; ADDRESS_LEN];
        bytes.copy_from_slice(&hash[12..]);
        Self(bytes)
    }

    /// Get the raw bytes.
    pub const fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Lowercase `0x`-prefixed hex.
    pub fn to_lower_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }

    /// Convert to EIP-55 checksummed string.
    ///
    /// A hex letter is uppercased when the matching nibble of
    /// `keccak256(lowercase_hex)` is 8 or more.
    pub fn to_checksum_string(&self) -> String {
        let hex_addr = hex::encode(self.0);
        let hash = keccak256(hex_addr.as_bytes());

        let mut result = String::with_capacity(2 + ADDRESS_LEN * 2);
        result.push_str("0x");

        for (i, c) in hex_addr.chars().enumerate() {
            let hash_nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };

            if c.is_ascii_alphabetic() && hash_nibble >= 8 {
                result.push(c.to_ascii_uppercase());
            } else {
                result.push(c);
            }
        }

        result
    }
}

impl fmt::Display for EvmAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_checksum_string())
    }
}

impl FromStr for EvmAddress {
    type Err = Error;

    /// Parse 40 hex digits, with or without `0x`/`0X`, in any letter case.
    ///
    /// Checksum casing is not enforced.
    fn from_str(s: &str) -> Result<Self> {
        let s = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .unwrap_or(s);
        if s.len() != ADDRESS_LEN * 2 {
            return Err(Error::InvalidLength {
                expected: ADDRESS_LEN * 2,
                actual: s.len(),
            });
        }

        let mut bytes = [0u8; ADDRESS_LEN];
        hex::decode_to_slice(s, &mut bytes)?;
        Ok(Self(bytes))
    }
}

impl AsRef<[u8]> for EvmAddress {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; ADDRESS_LEN]> for EvmAddress {
    fn from(bytes: [u8; ADDRESS_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<EvmAddress> for [u8; ADDRESS_LEN] {
    fn from(addr: EvmAddress) -> Self {
        addr.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// EIP-55 test address
    const TEST_ADDR_LOWER: &str = "0x5aaeb6053f3e94c9b9a09f33669435e7ef1beaed";
    const TEST_ADDR_CHECKSUM: &str = "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed";

    mod derivation_tests {
        use super::*;

        #[test]
        fn test_private_key_one() {
            let public_key = receipt::derive_public_key(&hex_literal::hex!(
                "0000000000000000000000000000000000000000000000000000000000000001"
            ))
            .unwrap();
            let addr = EvmAddress::from_public_key(&public_key);
            assert_eq!(addr.to_string(), "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
        }

        #[test]
        fn test_known_private_key() {
            let key: receipt::PrivateKey =
                "4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318"
                    .parse()
                    .unwrap();
            let addr = EvmAddress::from_public_key(&key.public_key());
            assert_eq!(
                addr.to_lower_hex(),
                "0x2c7536e3605d9c16a7a3d7b1898e529396a65c23"
            );
        }

        #[test]
        fn test_length_and_determinism() {
            let key = receipt::PrivateKey::generate().unwrap();
            let first = EvmAddress::from_public_key(&key.public_key());
            let second = EvmAddress::from_public_key(&key.public_key());
            assert_eq!(first, second);
            assert_eq!(first.as_bytes().len(), 20);
            assert_eq!(first.to_string().len(), 42);
        }
    }

    mod parsing_tests {
        use super::*;

        #[test]
        fn from_checksum_str() {
            let addr: EvmAddress = TEST_ADDR_CHECKSUM.parse().unwrap();
            let expected = hex_literal::hex!("5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed");
            assert_eq!(addr.as_bytes(), &expected);
        }

        #[test]
        fn from_unprefixed_str() {
            let addr: EvmAddress = TEST_ADDR_LOWER[2..].parse().unwrap();
            assert_eq!(addr.to_lower_hex(), TEST_ADDR_LOWER);
        }

        #[test]
        fn from_upper_prefixed_str() {
            let upper = format!("0X{}", TEST_ADDR_LOWER[2..].to_uppercase());
            let addr: EvmAddress = upper.parse().unwrap();
            assert_eq!(addr.to_lower_hex(), TEST_ADDR_LOWER);
        }

        #[test]
        fn rejects_bad_input() {
            assert!(matches!(
                "0x1234".parse::<EvmAddress>(),
                Err(Error::InvalidLength { expected: 40, actual: 4 })
            ));
            assert!(matches!(
                "0xzzaeb6053f3e94c9b9a09f33669435e7ef1beaed".parse::<EvmAddress>(),
                Err(Error::InvalidHex)
            ));
        }
    }

    mod checksum_tests {
        use super::*;

        #[test]
        fn test_eip55_official_test_vectors() {
            let test_cases: &[(&str, &str)] = &[
                (
                    "5aaeb6053f3e94c9b9a09f33669435e7ef1beaed",
                    "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
                ),
                (
                    "fb6916095ca1df60bb79ce92ce3ea74c37c5d359",
                    "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
                ),
                (
                    "dbf03b407c01e7cd3cbea99509d93f8dddc8c6fb",
                    "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
                ),
                (
                    "d1220a0cf47c7b9be7a2e6ba89f429762e7b9adb",
                    "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
                ),
            ];

            for (input, expected) in test_cases {
                let addr: EvmAddress = input.parse().unwrap();
                assert_eq!(addr.to_checksum_string(), *expected, "Failed for input: {}", input);
            }
        }

        #[test]
        fn test_eip55_all_zeros() {
            let addr = EvmAddress::from_bytes([0u8; 20]);
            assert_eq!(addr.to_string(), "0x0000000000000000000000000000000000000000");
        }

        #[test]
        fn display_uses_checksum() {
            let addr: EvmAddress = TEST_ADDR_LOWER.parse().unwrap();
            assert_eq!(addr.to_string(), TEST_ADDR_CHECKSUM);
        }
    }
}
