use alloy::primitives::{Address, U256};
use eyre::{eyre, Result};

/// Decodes a hex string with an optional `0x` prefix. An odd number of digits is read as if it
/// carried one leading zero nibble.
pub fn hex_str_to_bytes(s: &str) -> Result<Vec<u8>> {
    let stripped = s.strip_prefix("0x").unwrap_or(s);
    if stripped.len() % 2 == 1 {
        return Ok(hex::decode(format!("0{stripped}"))?);
    }

    Ok(hex::decode(stripped)?)
}

/// Parses a hex quantity such as `0x1bc16d674ec80000` into a 256 bit integer.
pub fn hex_str_to_u256(s: &str) -> Result<U256> {
    let digits = s
        .strip_prefix("0x")
        .ok_or_else(|| eyre!("quantity is missing the 0x prefix: {s}"))?;

    if digits.is_empty() {
        return Err(eyre!("quantity has no digits: {s}"));
    }

    Ok(U256::from_str_radix(digits, 16)?)
}

pub fn hex_str_to_address(s: &str) -> Result<Address> {
    let bytes = hex_str_to_bytes(s)?;
    if bytes.len() != 20 {
        return Err(eyre!("expected 20 address bytes, got {}", bytes.len()));
    }

    Ok(Address::from_slice(&bytes))
}

pub fn address_to_hex_string(address: &Address) -> String {
    format!("0x{}", hex::encode(address.as_slice()))
}

pub fn u64_to_hex_string(val: u64) -> String {
    format!("0x{val:x}")
}
