//! Hash functions used for address derivation.

use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Compute SHA-256 hash
#[inline]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// Compute double SHA-256 hash (Base58Check checksums)
#[inline]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Compute Keccak-256 hash.
///
/// This is the original Keccak padding used by Ethereum and Tron, not the
/// NIST SHA3-256 variant; the two disagree on every input.
#[inline]
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
