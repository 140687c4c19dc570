//! Fixed-width `bytes32` string codec.
//!
//! The futures indexer stores asset symbols as null-padded `bytes32` hex
//! (`0x7345544800…00` for `sETH`). Strings must leave room for the terminating
//! null byte, so at most 31 bytes fit.

use crate::error::DecodeError;

const WIDTH: usize = 32;

/// Decode a `0x`-prefixed `bytes32` hex value into the string it pads.
pub fn parse_bytes32_string(value: &str) -> Result<String, DecodeError> {
    let stripped = value.strip_prefix("0x").unwrap_or(value);
    let bytes = hex::decode(stripped).map_err(|e| DecodeError::InvalidHex {
        input: value.to_string(),
        reason: e.to_string(),
    })?;

    if bytes.len() != WIDTH {
        return Err(DecodeError::InvalidLength(bytes.len()));
    }
    if bytes[WIDTH - 1] != 0 {
        return Err(DecodeError::Unterminated);
    }

    let end = bytes.iter().position(|b| *b == 0).unwrap_or(WIDTH);
    String::from_utf8(bytes[..end].to_vec()).map_err(|_| DecodeError::InvalidUtf8)
}

/// Encode a string as `0x`-prefixed, null-padded `bytes32` hex.
pub fn format_bytes32_string(s: &str) -> Result<String, DecodeError> {
    let raw = s.as_bytes();
    if raw.len() > WIDTH - 1 {
        return Err(DecodeError::TooLong(raw.len()));
    }
    let mut bytes = [0u8; WIDTH];
    bytes[..raw.len()].copy_from_slice(raw);
    Ok(format!("0x{}", hex::encode(bytes)))
}
