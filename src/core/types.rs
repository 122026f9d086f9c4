//! core::types
//!
//! Strong types for values taken from the command line.
//!
//! # Types
//!
//! - [`Address`] - 20-byte account address
//! - [`PublicKey`] - 32-byte ed25519 public key
//! - [`HexData`] - arbitrary hex-encoded bytes (call data)
//!
//! # Validation
//!
//! These types enforce validity at construction time. Hex input is
//! case-insensitive and may carry a `0x` prefix; display is upper-case
//! without prefix.
//!
//! # Examples
//!
//! ```
//! use burrow_client::core::types::{Address, PublicKey};
//!
//! let addr = Address::new("0x00112233445566778899aabbccddeeff00112233").unwrap();
//! assert_eq!(addr.to_string(), "00112233445566778899AABBCCDDEEFF00112233");
//!
//! assert!(Address::new("abcd").is_err());
//! assert!(PublicKey::new("not hex").is_err());
//! ```

use std::fmt;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Errors from type validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("invalid address '{0}': expected 20 bytes of hex")]
    InvalidAddress(String),

    #[error("invalid public key '{0}': expected 32 bytes of hex")]
    InvalidPublicKey(String),

    #[error("invalid hex data '{0}'")]
    InvalidHex(String),
}

fn decode_hex(input: &str) -> Option<Vec<u8>> {
    let trimmed = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input);
    hex::decode(trimmed).ok()
}

/// A validated account address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Address([u8; 20]);

impl Address {
    pub const LEN: usize = 20;

    /// Parse an address from hex.
    pub fn new(input: &str) -> Result<Self, TypeError> {
        let bytes = decode_hex(input).ok_or_else(|| TypeError::InvalidAddress(input.into()))?;
        let array: [u8; Self::LEN] = bytes
            .try_into()
            .map_err(|_| TypeError::InvalidAddress(input.into()))?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl Serialize for Address {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A validated ed25519 public key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PublicKey([u8; 32]);

impl PublicKey {
    pub const LEN: usize = 32;

    /// Parse a public key from hex.
    pub fn new(input: &str) -> Result<Self, TypeError> {
        let bytes = decode_hex(input).ok_or_else(|| TypeError::InvalidPublicKey(input.into()))?;
        let array: [u8; Self::LEN] = bytes
            .try_into()
            .map_err(|_| TypeError::InvalidPublicKey(input.into()))?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.0))
    }
}

impl Serialize for PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Hex-encoded bytes of any length, including empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HexData(Vec<u8>);

impl HexData {
    pub fn new(input: &str) -> Result<Self, TypeError> {
        decode_hex(input)
            .map(Self)
            .ok_or_else(|| TypeError::InvalidHex(input.into()))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for HexData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}

impl Serialize for HexData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADDR: &str = "00112233445566778899AABBCCDDEEFF00112233";

    #[test]
    fn address_accepts_prefix_and_lowercase() {
        let a = Address::new(&format!("0x{}", ADDR.to_lowercase())).unwrap();
        let b = Address::new(ADDR).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.to_string(), ADDR);
    }

    #[test]
    fn address_rejects_wrong_length() {
        assert_eq!(
            Address::new("0011"),
            Err(TypeError::InvalidAddress("0011".into()))
        );
        assert!(Address::new(&format!("{ADDR}00")).is_err());
        assert!(Address::new("").is_err());
    }

    #[test]
    fn public_key_length_checked() {
        let key = "AB".repeat(32);
        assert!(PublicKey::new(&key).is_ok());
        assert!(PublicKey::new(ADDR).is_err());
    }

    #[test]
    fn hex_data_allows_empty() {
        assert!(HexData::new("").unwrap().is_empty());
        assert_eq!(HexData::new("0xdeadBEEF").unwrap().as_bytes(), &[0xde, 0xad, 0xbe, 0xef]);
        assert!(HexData::new("abc").is_err());
    }

    #[test]
    fn serializes_as_hex_string() {
        let addr = Address::new(ADDR).unwrap();
        assert_eq!(serde_json::to_string(&addr).unwrap(), format!("\"{ADDR}\""));
    }
}
