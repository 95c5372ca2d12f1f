//! PREIMAGE-SHA-256 crypto-conditions, the only condition type escrows accept.
//!
//! Both values travel as uppercase hex of their DER encoding:
//!
//! ```text
//! fulfillment: A0 len ( 80 len preimage )
//! condition:   A0 len ( 80 20 sha256(preimage)  81 len cost )
//! ```
//!
//! The cost of a preimage condition is the preimage length in bytes.

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use sha2::{Digest, Sha256};
use std::fmt;
use std::str::FromStr;
use xrpl_types::FormatError;

const TAG_PREIMAGE_SHA256: u8 = 0xA0;
const TAG_PREIMAGE: u8 = 0x80;
const TAG_FINGERPRINT: u8 = 0x80;
const TAG_COST: u8 = 0x81;
const FINGERPRINT_LEN: usize = 32;

// ── Fulfillment ─────────────────────────────────────────────────────────

#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Fulfillment {
    preimage: Vec<u8>,
}

impl Fulfillment {
    pub fn from_preimage(preimage: impl Into<Vec<u8>>) -> Self {
        Self {
            preimage: preimage.into(),
        }
    }

    pub fn from_hex(value: &str) -> Result<Self, FormatError> {
        let der = decode_hex("fulfillment", value)?;
        let mut reader = DerReader::new("fulfillment", &der);
        let body = reader.expect_element(TAG_PREIMAGE_SHA256)?;
        reader.finish()?;

        let mut inner = DerReader::new("fulfillment", body);
        let preimage = inner.expect_element(TAG_PREIMAGE)?;
        inner.finish()?;
        Ok(Self::from_preimage(preimage))
    }

    pub fn preimage(&self) -> &[u8] {
        &self.preimage
    }

    /// Cost of the condition this fulfillment satisfies.
    pub fn cost(&self) -> u64 {
        self.preimage.len() as u64
    }

    pub fn derived_condition(&self) -> Condition {
        let mut fingerprint = [0u8; FINGERPRINT_LEN];
        fingerprint.copy_from_slice(&Sha256::digest(&self.preimage));
        Condition::new(fingerprint, self.cost())
    }

    pub fn to_der(&self) -> Vec<u8> {
        let inner = der_element(TAG_PREIMAGE, &self.preimage);
        der_element(TAG_PREIMAGE_SHA256, &inner)
    }
}

impl fmt::Debug for Fulfillment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Fulfillment({} byte preimage)", self.preimage.len())
    }
}

impl fmt::Display for Fulfillment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.to_der()))
    }
}

impl FromStr for Fulfillment {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ── Condition ───────────────────────────────────────────────────────────

#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Condition {
    fingerprint: [u8; FINGERPRINT_LEN],
    cost: u64,
}

impl Condition {
    pub fn new(fingerprint: [u8; FINGERPRINT_LEN], cost: u64) -> Self {
        Self { fingerprint, cost }
    }

    pub fn from_hex(value: &str) -> Result<Self, FormatError> {
        let der = decode_hex("condition", value)?;
        let mut reader = DerReader::new("condition", &der);
        let body = reader.expect_element(TAG_PREIMAGE_SHA256)?;
        reader.finish()?;

        let mut inner = DerReader::new("condition", body);
        let fingerprint_bytes = inner.expect_element(TAG_FINGERPRINT)?;
        let cost_bytes = inner.expect_element(TAG_COST)?;
        inner.finish()?;

        if fingerprint_bytes.len() != FINGERPRINT_LEN {
            return Err(FormatError::WrongLength {
                kind: "condition fingerprint",
                expected: FINGERPRINT_LEN,
                actual: fingerprint_bytes.len(),
            });
        }
        if cost_bytes.is_empty() || cost_bytes.len() > 9 {
            return Err(invalid("condition", "cost must be 1 to 9 bytes"));
        }
        let mut cost: u64 = 0;
        for byte in cost_bytes {
            cost = cost
                .checked_mul(256)
                .map(|c| c | u64::from(*byte))
                .ok_or_else(|| invalid("condition", "cost exceeds 64 bits"))?;
        }

        let mut fingerprint = [0u8; FINGERPRINT_LEN];
        fingerprint.copy_from_slice(fingerprint_bytes);
        Ok(Self { fingerprint, cost })
    }

    pub fn fingerprint(&self) -> &[u8; FINGERPRINT_LEN] {
        &self.fingerprint
    }

    pub fn cost(&self) -> u64 {
        self.cost
    }

    pub fn to_der(&self) -> Vec<u8> {
        let mut inner = der_element(TAG_FINGERPRINT, &self.fingerprint);
        inner.extend(der_element(TAG_COST, &der_unsigned(self.cost)));
        der_element(TAG_PREIMAGE_SHA256, &inner)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Condition({}.., cost {})",
            hex::encode_upper(&self.fingerprint[..4]),
            self.cost
        )
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(self.to_der()))
    }
}

impl FromStr for Condition {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

// ── DER helpers ─────────────────────────────────────────────────────────

fn invalid(kind: &'static str, reason: &str) -> FormatError {
    FormatError::Invalid {
        kind,
        reason: reason.to_string(),
    }
}

fn decode_hex(kind: &'static str, value: &str) -> Result<Vec<u8>, FormatError> {
    if value.is_empty() {
        return Err(FormatError::Empty { kind });
    }
    hex::decode(value).map_err(|_| FormatError::NonHex {
        kind,
        value: value.to_string(),
    })
}

fn der_length(len: usize) -> Vec<u8> {
    if len < 0x80 {
        return vec![len as u8];
    }
    let bytes: Vec<u8> = len
        .to_be_bytes()
        .into_iter()
        .skip_while(|b| *b == 0)
        .collect();
    let mut out = Vec::with_capacity(bytes.len() + 1);
    out.push(0x80 | bytes.len() as u8);
    out.extend(bytes);
    out
}

fn der_element(tag: u8, content: &[u8]) -> Vec<u8> {
    let mut out = vec![tag];
    out.extend(der_length(content.len()));
    out.extend_from_slice(content);
    out
}

/// Minimal big-endian encoding of a non-negative DER integer.
fn der_unsigned(value: u64) -> Vec<u8> {
    let mut bytes: Vec<u8> = value
        .to_be_bytes()
        .into_iter()
        .skip_while(|b| *b == 0)
        .collect();
    if bytes.first().map_or(true, |b| b & 0x80 != 0) {
        bytes.insert(0, 0);
    }
    bytes
}

struct DerReader<'a> {
    kind: &'static str,
    bytes: &'a [u8],
}

impl<'a> DerReader<'a> {
    fn new(kind: &'static str, bytes: &'a [u8]) -> Self {
        Self { kind, bytes }
    }

    fn take(&mut self, n: usize) -> Result<&'a [u8], FormatError> {
        if self.bytes.len() < n {
            return Err(invalid(self.kind, "truncated DER"));
        }
        let (head, rest) = self.bytes.split_at(n);
        self.bytes = rest;
        Ok(head)
    }

    fn read_length(&mut self) -> Result<usize, FormatError> {
        let first = self.take(1)?[0];
        if first < 0x80 {
            return Ok(usize::from(first));
        }
        let count = usize::from(first & 0x7F);
        if count == 0 || count > std::mem::size_of::<usize>() {
            return Err(invalid(self.kind, "unsupported DER length"));
        }
        let mut len = 0usize;
        for byte in self.take(count)? {
            len = (len << 8) | usize::from(*byte);
        }
        Ok(len)
    }

    fn expect_element(&mut self, tag: u8) -> Result<&'a [u8], FormatError> {
        let actual = self.take(1)?[0];
        if actual != tag {
            return Err(FormatError::Invalid {
                kind: self.kind,
                reason: format!("expected tag {tag:#04X}, found {actual:#04X}"),
            });
        }
        let len = self.read_length()?;
        self.take(len)
    }

    fn finish(&self) -> Result<(), FormatError> {
        if self.bytes.is_empty() {
            Ok(())
        } else {
            Err(invalid(self.kind, "trailing bytes after DER element"))
        }
    }
}

// ── Serde ───────────────────────────────────────────────────────────────

macro_rules! hex_codec {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let text = String::deserialize(deserializer)?;
                text.parse().map_err(de::Error::custom)
            }
        }
    };
}

hex_codec!(Fulfillment);
hex_codec!(Condition);

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_FULFILLMENT: &str = "A0028000";
    const EMPTY_CONDITION: &str =
        "A0258020E3B0C44298FC1C149AFBF4C8996FB92427AE41E4649B934CA495991B7852B855810100";
    const ZEROS_CONDITION: &str =
        "A025802066687AADF862BD776C8FC18B8E9F8E20089714856EE233B3902A591D0D5F2925810120";
    const LONG_CONDITION: &str =
        "A0268020C2A908D98F5DF987ADE41B5FCE213067EFBCC21EF2240212A41E54B5E7C28AE5810200C8";

    #[test]
    fn empty_preimage_encoding() {
        let fulfillment = Fulfillment::from_preimage(Vec::new());
        assert_eq!(fulfillment.to_string(), EMPTY_FULFILLMENT);
        assert_eq!(fulfillment.derived_condition().to_string(), EMPTY_CONDITION);
        assert_eq!(fulfillment.derived_condition().cost(), 0);
    }

    #[test]
    fn thirty_two_byte_preimage() {
        let fulfillment = Fulfillment::from_preimage(vec![0u8; 32]);
        let expected = format!("A0228020{}", "00".repeat(32));
        assert_eq!(fulfillment.to_string(), expected);
        let condition = fulfillment.derived_condition();
        assert_eq!(condition.cost(), 32);
        assert_eq!(condition.to_string(), ZEROS_CONDITION);
    }

    #[test]
    fn long_preimage_uses_long_form_length() {
        let fulfillment = Fulfillment::from_preimage(vec![b'a'; 200]);
        assert!(fulfillment.to_string().starts_with("A081CB8081C8"));
        assert_eq!(fulfillment.derived_condition().to_string(), LONG_CONDITION);

        let parsed = Fulfillment::from_hex(&fulfillment.to_string()).unwrap();
        assert_eq!(parsed, fulfillment);
    }

    #[test]
    fn condition_parses_back() {
        for text in [EMPTY_CONDITION, ZEROS_CONDITION, LONG_CONDITION] {
            let condition = Condition::from_hex(text).unwrap();
            assert_eq!(condition.to_string(), text);
        }
        assert_eq!(Condition::from_hex(LONG_CONDITION).unwrap().cost(), 200);
    }

    #[test]
    fn fulfillment_parses_lowercase() {
        let parsed = Fulfillment::from_hex("a0028000").unwrap();
        assert!(parsed.preimage().is_empty());
    }

    #[test]
    fn malformed_der_rejected() {
        assert!(Fulfillment::from_hex("").is_err());
        assert!(Fulfillment::from_hex("A002").is_err());
        assert!(Fulfillment::from_hex("A10280FF").is_err());
        assert!(Fulfillment::from_hex("A002800000").is_err());
        assert!(Condition::from_hex("A0028000").is_err());
        assert!(Condition::from_hex("ZZ").is_err());
    }

    #[test]
    fn serde_uses_hex() {
        let fulfillment = Fulfillment::from_preimage(Vec::new());
        let json = serde_json::to_value(&fulfillment).unwrap();
        assert_eq!(json, serde_json::json!(EMPTY_FULFILLMENT));
        let back: Fulfillment = serde_json::from_value(json).unwrap();
        assert_eq!(back, fulfillment);
    }
}
