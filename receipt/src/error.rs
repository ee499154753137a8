//! Error types for key generation and address encoding.

use core::fmt;

/// A convenient Result type alias.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors that can occur while generating keys or encoding addresses.
#[derive(Debug)]
#[non_exhaustive]
pub enum Error {
    /// The operating system random source could not supply bytes.
    Entropy(rand_core::Error),
    /// Private key is zero or not below the secp256k1 group order.
    InvalidKeyRange,
    /// Input has the wrong length.
    InvalidLength {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },
    /// Input is not valid hexadecimal.
    InvalidHex,
    /// Character outside the Base58 alphabet.
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Byte offset of the character in the input.
        index: usize,
    },
    /// Base58Check checksum does not match the payload.
    InvalidChecksum,
    /// Bytes do not encode a point on secp256k1.
    InvalidPublicKey,
    /// Address version byte is not the expected one.
    InvalidVersion {
        /// Expected version byte.
        expected: u8,
        /// Version byte found.
        actual: u8,
    },
    /// String is neither an EVM nor a Tron address.
    UnrecognizedAddress,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entropy(e) => write!(f, "secure random source failed: {e}"),
            Self::InvalidKeyRange => {
                write!(f, "private key out of range, must satisfy 1 <= key < n")
            }
            Self::InvalidLength { expected, actual } => {
                write!(f, "invalid length: expected {expected}, got {actual}")
            }
            Self::InvalidHex => write!(f, "invalid hex string"),
            Self::InvalidCharacter { character, index } => {
                write!(f, "invalid base58 character {character:?} at position {index}")
            }
            Self::InvalidChecksum => write!(f, "base58check checksum mismatch"),
            Self::InvalidPublicKey => write!(f, "invalid secp256k1 public key"),
            Self::InvalidVersion { expected, actual } => {
                write!(f, "invalid version byte 0x{actual:02x}, expected 0x{expected:02x}")
            }
            Self::UnrecognizedAddress => write!(f, "not an EVM or Tron address"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Entropy(e) => Some(e),
            _ => None,
        }
    }
}

impl From<rand_core::Error> for Error {
    fn from(err: rand_core::Error) -> Self {
        Self::Entropy(err)
    }
}

impl From<hex::FromHexError> for Error {
    fn from(_: hex::FromHexError) -> Self {
        Self::InvalidHex
    }
}
