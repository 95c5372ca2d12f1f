//! Classic XRP Ledger account addresses.
//!
//! Address format: base58 (Ripple alphabet) of
//! `0x00 version byte || 20-byte account id || 4-byte checksum`,
//! where the checksum is the first 4 bytes of SHA-256(SHA-256(version || account id)).
//! The leading zero version byte always encodes as `r`.

use crate::error::FormatError;
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;

/// Version byte for classic account addresses.
const ACCOUNT_ID_PREFIX: u8 = 0x00;
/// Length of the account id payload in bytes.
const ACCOUNT_ID_LEN: usize = 20;
const CHECKSUM_LEN: usize = 4;
/// Decoded length: version + account id + checksum.
const DECODED_LEN: usize = 1 + ACCOUNT_ID_LEN + CHECKSUM_LEN;

/// A validated classic address (`r...`).
///
/// Only constructible through [`Address::of`] / [`Address::from_account_id`], so every
/// value in memory has a valid checksum.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address {
    text: String,
    account_id: [u8; ACCOUNT_ID_LEN],
}

impl Address {
    /// Parse and checksum-validate a classic address.
    pub fn of(value: &str) -> Result<Self, FormatError> {
        if value.is_empty() {
            return Err(FormatError::Empty { kind: "address" });
        }
        if !value.starts_with('r') {
            return Err(FormatError::invalid("address", "classic addresses start with 'r'"));
        }

        let decoded = bs58::decode(value)
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .into_vec()
            .map_err(|_| FormatError::InvalidAlphabet {
                kind: "address",
                value: value.to_string(),
            })?;

        if decoded.len() != DECODED_LEN {
            return Err(FormatError::WrongLength {
                kind: "address",
                expected: DECODED_LEN,
                actual: decoded.len(),
            });
        }
        if decoded[0] != ACCOUNT_ID_PREFIX {
            return Err(FormatError::invalid("address", "unexpected version byte"));
        }

        let (payload, checksum) = decoded.split_at(1 + ACCOUNT_ID_LEN);
        if checksum != calc_checksum(payload) {
            return Err(FormatError::InvalidChecksum {
                kind: "address",
                value: value.to_string(),
            });
        }

        let mut account_id = [0u8; ACCOUNT_ID_LEN];
        account_id.copy_from_slice(&payload[1..]);
        Ok(Self {
            text: value.to_string(),
            account_id,
        })
    }

    /// Encode a 20-byte account id as a classic address.
    pub fn from_account_id(account_id: [u8; ACCOUNT_ID_LEN]) -> Self {
        let mut bytes = Vec::with_capacity(DECODED_LEN);
        bytes.push(ACCOUNT_ID_PREFIX);
        bytes.extend_from_slice(&account_id);
        let checksum = calc_checksum(&bytes);
        bytes.extend_from_slice(&checksum);

        let text = bs58::encode(bytes)
            .with_alphabet(bs58::Alphabet::RIPPLE)
            .into_string();
        Self { text, account_id }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn account_id(&self) -> &[u8; ACCOUNT_ID_LEN] {
        &self.account_id
    }
}

fn calc_checksum(bytes: &[u8]) -> [u8; CHECKSUM_LEN] {
    let digest = Sha256::digest(Sha256::digest(bytes));
    let mut out = [0u8; CHECKSUM_LEN];
    out.copy_from_slice(&digest[..CHECKSUM_LEN]);
    out
}

impl FromStr for Address {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl TryFrom<String> for Address {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of(&value)
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.text)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
