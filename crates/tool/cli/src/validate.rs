use alloy_primitives::{Address, B256};
use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref ADDRESS_REGEX: Regex =
        Regex::new("^0x[a-fA-F0-9]{40}$").expect("the pattern is valid");
    static ref TX_HASH_REGEX: Regex =
        Regex::new("^0x[a-fA-F0-9]{64}$").expect("the pattern is valid");
}

/// Whether the string is a well-formed Ethereum address. The strict format
/// check and the checksum gate both have to pass.
pub fn is_valid_address(address: &str) -> bool {
    if !ADDRESS_REGEX.is_match(address) {
        return false;
    }

    has_valid_checksum(address)
}

/// Mixed-case addresses must carry a valid EIP-55 checksum. All-lowercase and
/// all-uppercase spellings carry no checksum and are accepted as-is.
fn has_valid_checksum(address: &str) -> bool {
    let digits = &address[2..];
    if digits == digits.to_lowercase() || digits == digits.to_uppercase() {
        return true;
    }

    Address::parse_checksummed(address, None).is_ok()
}

/// Whether the string is a well-formed transaction hash. No checksum applies
/// to hashes.
pub fn is_valid_tx_hash(hash: &str) -> bool {
    TX_HASH_REGEX.is_match(hash)
}

/// Parses an address after validating it, so that a malformed input is
/// rejected before any request is issued.
pub fn parse_address(value: &str) -> Result<Address> {
    if !is_valid_address(value) {
        bail!("Invalid Ethereum address: '{value}'");
    }

    value
        .parse()
        .with_context(|| format!("Invalid Ethereum address: '{value}'"))
}

/// Parses a transaction hash after validating it.
pub fn parse_tx_hash(value: &str) -> Result<B256> {
    if !is_valid_tx_hash(value) {
        bail!("Invalid transaction hash: '{value}'");
    }

    value
        .parse()
        .with_context(|| format!("Invalid transaction hash: '{value}'"))
}
