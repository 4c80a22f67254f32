// Bit sequence helpers: validation, parsing and generation

use crate::error::InvalidInput;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Reject empty sequences and anything that is not 0 or 1.
pub fn validate_bits(bits: &[u8]) -> Result<(), InvalidInput> {
    if bits.is_empty() {
        return Err(InvalidInput::EmptySequence);
    }
    match bits
        .iter()
        .enumerate()
        .find(|&(_, &bit)| bit > 1)
    {
        Some((index, &value)) => Err(InvalidInput::NonBinary { index, value }),
        None => Ok(()),
    }
}

/// Parse a textual bit string such as `"1011 0011"` or `"1,0,1"`.
/// Whitespace, `,` and `_` are treated as separators.
pub fn parse_bit_string(text: &str) -> Result<Vec<u8>, InvalidInput> {
    let mut bits = Vec::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '0' => bits.push(0),
            '1' => bits.push(1),
            ',' | '_' => {}
            c if c.is_whitespace() => {}
            c => return Err(InvalidInput::InvalidBitString(c)),
        }
    }
    if bits.is_empty() {
        return Err(InvalidInput::EmptySequence);
    }
    Ok(bits)
}

/// Convert bytes to bits (MSB first)
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for &byte in bytes {
        for i in 0..8 {
            bits.push((byte >> (7 - i)) & 1);
        }
    }
    bits
}

/// Decode a hex string (optional `0x` prefix) into bytes.
pub fn parse_hex(text: &str) -> Result<Vec<u8>, InvalidInput> {
    let digits: String = text
        .trim()
        .trim_start_matches("0x")
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .collect();

    if digits.is_empty()
        || digits.len() % 2 != 0
        || !digits.chars().all(|c| c.is_ascii_hexdigit())
    {
        return Err(InvalidInput::InvalidHex(text.to_string()));
    }

    (0..digits.len())
        .step_by(2)
        .map(|i| {
            u8::from_str_radix(&digits[i..i + 2], 16)
                .map_err(|_| InvalidInput::InvalidHex(text.to_string()))
        })
        .collect()
}

/// Seeded pseudo-random bit sequence, reproducible for a given seed.
pub fn random_bits(len: usize, seed: u64) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..len)
        .map(|_| rng.random_bool(0.5) as u8)
        .collect()
}
