//! secp256k1 key pairs.
//!
//! Provides:
//! - Private key generation by rejection sampling over the OS random source
//! - Range-checked import from bytes or hex
//! - Public key derivation and its SEC1 / raw encodings
//! - Automatic memory zeroization of secrets

use core::fmt;
use core::str::FromStr;

use k256::ecdsa::{SigningKey, VerifyingKey};
use rand_core::{CryptoRng, OsRng, RngCore};
use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Order `n` of the secp256k1 group, big-endian.
pub const CURVE_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// Length of a serialized private key.
pub const PRIVATE_KEY_LEN: usize = 32;

/// Returns true if `bytes`, read as a big-endian integer `d`, satisfies `1 <= d < n`.
#[inline]
pub fn is_valid_private_key(bytes: &[u8; PRIVATE_KEY_LEN]) -> bool {
    // Fixed-width big-endian arrays order the same way as the integers they encode.
    bytes.iter().any(|&b| b != 0) && *bytes < CURVE_ORDER
}

/// secp256k1 private key.
///
/// Can only be constructed from a value in `[1, n)`. The scalar is wiped
/// from memory when the key is dropped.
#[derive(Clone)]
pub struct PrivateKey {
    inner: SigningKey,
}

impl PrivateKey {
    /// Generate a new private key from the operating system random source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Entropy`] if the random source fails. A weaker source
    /// is never substituted.
    pub fn generate() -> Result<Self> {
        Self::random(&mut OsRng)
    }

    /// Rejection-sample a key from `rng`.
    ///
    /// Draws 32 bytes, keeps them if they encode a value in `[1, n)` and
    /// draws again otherwise. There is no retry ceiling: a draw is rejected
    /// with probability below 2^-127, so the loop ends after one pass in
    /// practice and the accepted keys stay uniform over the valid range.
    pub(crate) fn random<R: RngCore + CryptoRng>(rng: &mut R) -> Result<Self> {
        let mut candidate = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
        let mut attempts = 0u32;
        loop {
            attempts += 1;
            rng.try_fill_bytes(&mut candidate[..])?;
            if is_valid_private_key(&candidate) {
                break;
            }
            tracing::trace!(attempts, "rejected out-of-range private key candidate");
        }
        if attempts > 1 {
            tracing::debug!(attempts, "private key accepted after rejection sampling");
        }
        Self::from_array(&candidate)
    }

    /// Create from raw big-endian bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidLength`] unless exactly 32 bytes are given and
    /// [`Error::InvalidKeyRange`] if the value is zero or not below `n`.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bytes: &[u8; PRIVATE_KEY_LEN] = bytes.try_into().map_err(|_| Error::InvalidLength {
            expected: PRIVATE_KEY_LEN,
            actual: bytes.len(),
        })?;
        Self::from_array(bytes)
    }

    /// Create from a hex string, with or without a `0x`/`0X` prefix.
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let hex_str = hex_str
            .strip_prefix("0x")
            .or_else(|| hex_str.strip_prefix("0X"))
            .unwrap_or(hex_str);
        if hex_str.len() != PRIVATE_KEY_LEN * 2 {
            return Err(Error::InvalidLength {
                expected: PRIVATE_KEY_LEN * 2,
                actual: hex_str.len(),
            });
        }

        let mut bytes = Zeroizing::new([0u8; PRIVATE_KEY_LEN]);
        hex::decode_to_slice(hex_str, &mut bytes[..])?;
        Self::from_array(&bytes)
    }

    fn from_array(bytes: &[u8; PRIVATE_KEY_LEN]) -> Result<Self> {
        if !is_valid_private_key(bytes) {
            return Err(Error::InvalidKeyRange);
        }
        let inner = SigningKey::from_slice(bytes).map_err(|_| Error::InvalidKeyRange)?;
        Ok(Self { inner })
    }

    /// Serialize to big-endian bytes (zeroized on drop).
    pub fn to_bytes(&self) -> Zeroizing<[u8; PRIVATE_KEY_LEN]> {
        Zeroizing::new(self.inner.to_bytes().into())
    }

    /// Export as lowercase hex without `0x` prefix (zeroized on drop).
    pub fn to_hex(&self) -> Zeroizing<String> {
        let bytes = self.to_bytes();
        Zeroizing::new(hex::encode(&bytes[..]))
    }

    /// Derive the public key `d * G`.
    pub fn public_key(&self) -> PublicKey {
        PublicKey {
            inner: *self.inner.verifying_key(),
        }
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

impl FromStr for PrivateKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_hex(s)
    }
}

/// Generate a fresh private key from the OS random source. See [`PrivateKey::generate`].
pub fn generate_private_key() -> Result<PrivateKey> {
    PrivateKey::generate()
}

/// Derive the public key for raw private key bytes supplied by a caller.
///
/// # Errors
///
/// Rejects values outside `[1, n)` with [`Error::InvalidKeyRange`] rather
/// than reducing them.
pub fn derive_public_key(private_key: &[u8]) -> Result<PublicKey> {
    PrivateKey::from_bytes(private_key).map(|key| key.public_key())
}

/// secp256k1 public key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PublicKey {
    inner: VerifyingKey,
}

impl PublicKey {
    /// Parse a SEC1 encoded point (33-byte compressed or 65-byte uncompressed).
    pub fn from_sec1_bytes(bytes: &[u8]) -> Result<Self> {
        let inner = VerifyingKey::from_sec1_bytes(bytes).map_err(|_| Error::InvalidPublicKey)?;
        Ok(Self { inner })
    }

    /// Serialize to compressed bytes (33 bytes).
    pub fn to_bytes(&self) -> [u8; 33] {
        let point = self.inner.to_encoded_point(true);
        let mut result = [0u8; 33];
        result.copy_from_slice(point.as_bytes());
        result
    }

    /// Serialize to uncompressed bytes (65 bytes with 0x04 prefix).
    pub fn to_uncompressed_bytes(&self) -> [u8; 65] {
        let point = self.inner.to_encoded_point(false);
        let mut result = [0u8; 65];
        result.copy_from_slice(point.as_bytes());
        result
    }

    /// Get the raw 64-byte public key `X || Y` (without 0x04 prefix).
    ///
    /// This is the exact input both EVM and Tron hash into an address.
    pub fn to_raw_bytes(&self) -> [u8; 64] {
        let uncompressed = self.to_uncompressed_bytes();
        let mut result = [0u8; 64];
        result.copy_from_slice(&uncompressed[1..]);
        result
    }

    /// Uncompressed hex encoding without `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(self.to_uncompressed_bytes())
    }
}
