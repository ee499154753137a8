//! Base58 and Base58Check encoding.
//!
//! Base58 treats the input as one big-endian unsigned integer and writes it
//! in radix 58 over the Bitcoin alphabet. Leading zero bytes carry no value,
//! so each one is written as a leading `'1'` to keep the byte length.
//!
//! The conversion is plain long division over the byte buffer: every pass
//! divides the remaining number by 58 in place and emits the remainder as the
//! next least-significant digit.

use crate::error::{Error, Result};
use crate::hash::double_sha256;

/// The Bitcoin Base58 alphabet (no `0`, `O`, `I` or `l`).
pub const ALPHABET: &[u8; 58] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Length of the Base58Check checksum suffix.
pub const CHECKSUM_LEN: usize = 4;

/// Encode bytes as Base58.
///
/// Empty input encodes to an empty string.
pub fn encode(input: &[u8]) -> String {
    let zeros = input.iter().take_while(|&&b| b == 0).count();

    let mut number = input[zeros..].to_vec();
    // log(256) / log(58) ~ 1.37 digits per byte
    let mut digits = Vec::with_capacity(zeros + number.len() * 138 / 100 + 1);

    let mut start = 0;
    while start < number.len() {
        let remainder = div_rem_58(&mut number[start..]);
        // Each pass shrinks the number by less than one byte, so at most
        // the first remaining byte can drop to zero.
        if number[start] == 0 {
            start += 1;
        }
        digits.push(ALPHABET[remainder as usize]);
    }

    digits.extend(core::iter::repeat_n(ALPHABET[0], zeros));
    digits.reverse();

    // Every byte pushed comes from ALPHABET.
    digits.into_iter().map(char::from).collect()
}

/// Decode a Base58 string back into bytes.
///
/// Exact inverse of [`encode`]: each leading `'1'` becomes one zero byte.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let zeros = input.bytes().take_while(|&c| c == ALPHABET[0]).count();

    // Little-endian accumulator of the value read so far.
    let mut number: Vec<u8> = Vec::with_capacity(input.len());
    for (index, character) in input.char_indices().skip(zeros) {
        let mut carry = digit_value(character).ok_or(Error::InvalidCharacter { character, index })?;
        for byte in &mut number {
            carry += u32::from(*byte) * 58;
            *byte = (carry & 0xff) as u8;
            carry >>= 8;
        }
        while carry > 0 {
            number.push((carry & 0xff) as u8);
            carry >>= 8;
        }
    }

    let mut bytes = vec![0u8; zeros];
    bytes.extend(number.iter().rev());
    Ok(bytes)
}

/// Encode a payload with a 4-byte double SHA-256 checksum appended.
pub fn check_encode(payload: &[u8]) -> String {
    let mut data = Vec::with_capacity(payload.len() + CHECKSUM_LEN);
    data.extend_from_slice(payload);
    data.extend_from_slice(&checksum(payload));
    encode(&data)
}

/// Decode a Base58Check string and return the payload without its checksum.
pub fn check_decode(encoded: &str) -> Result<Vec<u8>> {
    let mut data = decode(encoded)?;
    if data.len() < CHECKSUM_LEN {
        return Err(Error::InvalidLength {
            expected: CHECKSUM_LEN,
            actual: data.len(),
        });
    }

    let split = data.len() - CHECKSUM_LEN;
    if data[split..] != checksum(&data[..split]) {
        return Err(Error::InvalidChecksum);
    }

    data.truncate(split);
    Ok(data)
}

/// First four bytes of `double_sha256(payload)`.
pub fn checksum(payload: &[u8]) -> [u8; CHECKSUM_LEN] {
    let hash = double_sha256(payload);
    [hash[0], hash[1], hash[2], hash[3]]
}

/// Divide a big-endian number by 58 in place, returning the remainder.
fn div_rem_58(number: &mut [u8]) -> u32 {
    let mut remainder = 0u32;
    for byte in number.iter_mut() {
        let acc = (remainder << 8) | u32::from(*byte);
        *byte = (acc / 58) as u8;
        remainder = acc % 58;
    }
    remainder
}

fn digit_value(c: char) -> Option<u32> {
    if !c.is_ascii() {
        return None;
    }
    ALPHABET
        .iter()
        .position(|&a| a == c as u8)
        .map(|i| i as u32)
}
