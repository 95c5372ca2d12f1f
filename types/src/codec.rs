//! JSON wire encoding for the primitive types.
//!
//! The node's JSON is irregular: drop amounts are numbers written as strings, ledger
//! indices are numbers or keywords, markers are usually strings but occasionally
//! objects. Everything below decodes leniently where the node is inconsistent and
//! encodes one canonical form. Validation always runs on decode; an invalid literal
//! is a decode error, never a silently accepted value.

use crate::address::Address;
use crate::amount::{CurrencyAmount, IssuedCurrencyAmount, XrpCurrencyAmount};
use crate::hash::Hash256;
use crate::keys::{PublicKey, Signature};
use crate::ledger_index::LedgerIndex;
use crate::marker::Marker;
use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

// ── Text-form primitives ────────────────────────────────────────────────

/// Types whose wire form is exactly their `Display`/`FromStr` text.
macro_rules! text_codec {
    ($ty:ty, $expecting:literal) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                struct TextVisitor;

                impl<'de> Visitor<'de> for TextVisitor {
                    type Value = $ty;

                    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                        f.write_str($expecting)
                    }

                    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                        v.parse().map_err(E::custom)
                    }
                }

                deserializer.deserialize_str(TextVisitor)
            }
        }
    };
}

text_codec!(Address, "a classic address string");
text_codec!(Hash256, "64 hex characters");
text_codec!(PublicKey, "a hex public key");
text_codec!(Signature, "a hex signature");

// ── Amounts ─────────────────────────────────────────────────────────────

impl Serialize for XrpCurrencyAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

struct DropsVisitor;

impl<'de> Visitor<'de> for DropsVisitor {
    type Value = XrpCurrencyAmount;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a drop count as a decimal string or integer")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        v.parse().map_err(E::custom)
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(XrpCurrencyAmount::of_drops(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u64::try_from(v)
            .map(XrpCurrencyAmount::of_drops)
            .map_err(|_| E::custom(format!("xrp amount must not be negative: {v}")))
    }
}

impl<'de> Deserialize<'de> for XrpCurrencyAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(DropsVisitor)
    }
}

#[derive(Serialize, Deserialize)]
struct IssuedWire {
    currency: String,
    issuer: Address,
    value: String,
}

impl Serialize for IssuedCurrencyAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        IssuedWire {
            currency: self.currency().to_string(),
            issuer: self.issuer().clone(),
            value: self.value().to_string(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IssuedCurrencyAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = IssuedWire::deserialize(deserializer)?;
        IssuedCurrencyAmount::new(wire.currency, wire.issuer, wire.value).map_err(de::Error::custom)
    }
}

impl Serialize for CurrencyAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CurrencyAmount::Xrp(drops) => drops.serialize(serializer),
            CurrencyAmount::Issued(issued) => issued.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for CurrencyAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct AmountVisitor;

        impl<'de> Visitor<'de> for AmountVisitor {
            type Value = CurrencyAmount;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a drop string or an issued amount object")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                DropsVisitor.visit_str(v).map(CurrencyAmount::Xrp)
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                DropsVisitor.visit_u64(v).map(CurrencyAmount::Xrp)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                DropsVisitor.visit_i64(v).map(CurrencyAmount::Xrp)
            }

            fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Self::Value, A::Error> {
                IssuedCurrencyAmount::deserialize(de::value::MapAccessDeserializer::new(map))
                    .map(CurrencyAmount::Issued)
            }
        }

        deserializer.deserialize_any(AmountVisitor)
    }
}

// ── Ledger index ────────────────────────────────────────────────────────

impl Serialize for LedgerIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            LedgerIndex::Sequence(seq) => serializer.serialize_u32(*seq),
            other => serializer.collect_str(other),
        }
    }
}

struct LedgerIndexVisitor;

impl<'de> Visitor<'de> for LedgerIndexVisitor {
    type Value = LedgerIndex;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a ledger sequence number or current|closed|validated")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        u32::try_from(v)
            .map(LedgerIndex::Sequence)
            .map_err(|_| E::custom(format!("ledger index out of range: {v}")))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        u32::try_from(v)
            .map(LedgerIndex::Sequence)
            .map_err(|_| E::custom(format!("ledger index out of range: {v}")))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        LedgerIndex::of(v).map_err(E::custom)
    }
}

impl<'de> Deserialize<'de> for LedgerIndex {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(LedgerIndexVisitor)
    }
}

/// `#[serde(with = "ledger_index_string")]`: a ledger index written as a string even
/// when it is a sequence number, as the `ledger` header does.
pub mod ledger_index_string {
    use super::*;

    pub fn serialize<S: Serializer>(value: &LedgerIndex, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<LedgerIndex, D::Error> {
        deserializer.deserialize_any(LedgerIndexVisitor)
    }
}

// ── Marker ──────────────────────────────────────────────────────────────

impl Serialize for Marker {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl<'de> Deserialize<'de> for Marker {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match serde_json::Value::deserialize(deserializer)? {
            serde_json::Value::String(text) => Ok(Marker::of(text)),
            other => Ok(Marker::of(other.to_string())),
        }
    }
}

// ── Numbers as strings ──────────────────────────────────────────────────

/// `#[serde(with = "u64_string")]`: an unsigned counter the node writes as a decimal
/// string. Decoding also accepts a bare integer.
pub mod u64_string {
    use super::*;

    pub fn serialize<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
        struct CounterVisitor;

        impl<'de> Visitor<'de> for CounterVisitor {
            type Value = u64;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an unsigned integer or its decimal string")
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<u64, E> {
                Ok(v)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<u64, E> {
                u64::try_from(v).map_err(|_| E::custom(format!("negative counter: {v}")))
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<u64, E> {
                v.parse()
                    .map_err(|_| E::custom(format!("not an unsigned integer: {v:?}")))
            }
        }

        deserializer.deserialize_any(CounterVisitor)
    }
}
