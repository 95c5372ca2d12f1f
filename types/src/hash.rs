//! 256-bit content identifiers (transaction ids, ledger object ids, ledger hashes).

use crate::error::{decode_hex, FormatError};
use std::fmt;
use std::str::FromStr;

/// A 32-byte hash, written on the wire as 64 hex characters.
///
/// The canonical textual form is uppercase; decoding accepts either case.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    pub const ZERO: Self = Self([0u8; 32]);

    /// Number of hex characters in the textual form.
    pub const HEX_LEN: usize = 64;

    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Parse a hash from exactly 64 hex characters.
    pub fn of(value: &str) -> Result<Self, FormatError> {
        if value.is_empty() {
            return Err(FormatError::Empty { kind: "hash256" });
        }
        if value.len() != Self::HEX_LEN {
            return Err(FormatError::WrongLength {
                kind: "hash256",
                expected: Self::HEX_LEN,
                actual: value.len(),
            });
        }
        let bytes = decode_hex("hash256", value)?;
        let mut out = [0u8; 32];
        out.copy_from_slice(&bytes);
        Ok(Self(out))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }
}

impl FromStr for Hash256 {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl fmt::Debug for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash256({})", hex::encode_upper(&self.0[..4]))
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode_upper(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TX_ID: &str = "E08D6E9754025BA2534A78707605E0601F03ACE063687A0CA1BDDACFCD1698C7";

    #[test]
    fn parses_uppercase_and_lowercase() {
        let upper = Hash256::of(TX_ID).unwrap();
        let lower = Hash256::of(&TX_ID.to_lowercase()).unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper.to_string(), TX_ID);
    }

    #[test]
    fn wrong_length_is_named() {
        let err = Hash256::of("ABCD").unwrap_err();
        assert_eq!(
            err,
            FormatError::WrongLength {
                kind: "hash256",
                expected: 64,
                actual: 4
            }
        );
    }

    #[test]
    fn non_hex_rejected() {
        let bad = format!("{}ZZ", &TX_ID[..62]);
        assert!(matches!(
            Hash256::of(&bad),
            Err(FormatError::NonHex { kind: "hash256", .. })
        ));
    }

    #[test]
    fn empty_rejected() {
        assert_eq!(
            Hash256::of("").unwrap_err(),
            FormatError::Empty { kind: "hash256" }
        );
    }

    #[test]
    fn zero_hash() {
        assert!(Hash256::ZERO.is_zero());
        assert!(!Hash256::of(TX_ID).unwrap().is_zero());
    }
}
