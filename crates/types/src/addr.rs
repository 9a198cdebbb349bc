//! Network-layer destination address type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// A 16-byte network-layer destination address.
///
/// This is the destination field of the simulated stack's fixed header,
/// treated as an opaque matchable key. Equality is exact byte-for-byte
/// comparison and the type is safe to use as a HashMap key.
///
/// Addresses display in IPv6 textual notation, which is also what
/// [`FromStr`] and the serde impls accept.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Addr([u8; 16]);

impl Addr {
    /// Size of an address in bytes.
    pub const BYTES: usize = 16;

    /// The unspecified address (all bytes are 0x00).
    pub const UNSPECIFIED: Self = Self([0u8; 16]);

    /// Create an address from raw bytes.
    pub const fn new(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Create an address from a byte slice, checking the length.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, AddrParseError> {
        let arr: [u8; 16] = bytes
            .try_into()
            .map_err(|_| AddrParseError::InvalidLength {
                expected: Self::BYTES,
                actual: bytes.len(),
            })?;
        Ok(Self(arr))
    }

    /// Parse an address from a 32-character hex string.
    pub fn from_hex(hex: &str) -> Result<Self, AddrParseError> {
        if hex.len() != 32 {
            return Err(AddrParseError::InvalidLength {
                expected: 32,
                actual: hex.len(),
            });
        }

        let mut bytes = [0u8; 16];
        hex::decode_to_slice(hex, &mut bytes).map_err(|_| AddrParseError::InvalidHex)?;

        Ok(Self(bytes))
    }

    /// Convert the address to a hex string.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Get bytes as slice reference.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Convert to bytes array.
    pub fn to_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Check if this is the unspecified (all-zero) address.
    pub fn is_unspecified(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl From<[u8; 16]> for Addr {
    fn from(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }
}

impl From<Ipv6Addr> for Addr {
    fn from(addr: Ipv6Addr) -> Self {
        Self(addr.octets())
    }
}

impl From<Addr> for Ipv6Addr {
    fn from(addr: Addr) -> Self {
        Ipv6Addr::from(addr.0)
    }
}

impl FromStr for Addr {
    type Err = AddrParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<Ipv6Addr>()
            .map(Self::from)
            .map_err(|_| AddrParseError::InvalidNotation)
    }
}

impl fmt::Display for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Ipv6Addr::from(self.0).fmt(f)
    }
}

impl fmt::Debug for Addr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Addr({})", self)
    }
}

impl Serialize for Addr {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Addr {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Errors that can occur when parsing addresses.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddrParseError {
    /// Invalid input length.
    #[error("Invalid address length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Expected length.
        expected: usize,
        /// Actual length.
        actual: usize,
    },

    /// Invalid hex characters.
    #[error("Invalid hex string")]
    InvalidHex,

    /// Not valid IPv6 textual notation.
    #[error("Invalid address notation")]
    InvalidNotation,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_roundtrip() {
        let addr: Addr = "ff02::ee:da".parse().unwrap();
        assert_eq!(addr.to_string(), "ff02::ee:da");
        assert_eq!(
            addr.as_bytes(),
            b"\xff\x02\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\x00\xee\x00\xda"
        );
    }

    #[test]
    fn test_hex_roundtrip() {
        let original: Addr = "fc07:0:0:4::1".parse().unwrap();
        let hex = original.to_hex();
        assert_eq!(hex.len(), 32);

        let parsed = Addr::from_hex(&hex).unwrap();
        assert_eq!(original, parsed);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert_eq!(
            Addr::from_hex("fc07"),
            Err(AddrParseError::InvalidLength {
                expected: 32,
                actual: 4,
            })
        );
        assert_eq!(
            Addr::from_hex("zz070000000000040000000000000001"),
            Err(AddrParseError::InvalidHex)
        );
    }

    #[test]
    fn test_from_slice_checks_length() {
        let bytes = [0xfc; 16];
        assert_eq!(Addr::from_slice(&bytes), Ok(Addr::new(bytes)));

        assert_eq!(
            Addr::from_slice(&[0xfc; 15]),
            Err(AddrParseError::InvalidLength {
                expected: 16,
                actual: 15,
            })
        );
    }

    #[test]
    fn test_ipv6_conversion() {
        let v6 = Ipv6Addr::new(0xfc07, 0, 0, 4, 0, 0, 0, 1);
        let addr = Addr::from(v6);
        assert_eq!(Ipv6Addr::from(addr), v6);
    }

    #[test]
    fn test_is_unspecified() {
        assert!(Addr::UNSPECIFIED.is_unspecified());
        assert!(!"ff02::ea:ea".parse::<Addr>().unwrap().is_unspecified());
    }

    #[test]
    fn test_serde_textual_form() {
        let addr: Addr = "ff02::a:b:b:ae".parse().unwrap();
        let json = serde_json::to_string(&addr).unwrap();
        assert_eq!(json, "\"ff02::a:b:b:ae\"");

        let back: Addr = serde_json::from_str(&json).unwrap();
        assert_eq!(back, addr);
    }
}
