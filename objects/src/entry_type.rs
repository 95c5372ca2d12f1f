//! The `LedgerEntryType` discriminator and the fixed-value fields derived from it.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LedgerEntryType {
    AccountRoot,
    Offer,
    DepositPreauth,
    SignerList,
    Escrow,
    PayChannel,
}

impl LedgerEntryType {
    pub const ALL: [Self; 6] = [
        Self::AccountRoot,
        Self::Offer,
        Self::DepositPreauth,
        Self::SignerList,
        Self::Escrow,
        Self::PayChannel,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AccountRoot => "AccountRoot",
            Self::Offer => "Offer",
            Self::DepositPreauth => "DepositPreauth",
            Self::SignerList => "SignerList",
            Self::Escrow => "Escrow",
            Self::PayChannel => "PayChannel",
        }
    }

    pub fn of(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == name)
    }
}

impl fmt::Display for LedgerEntryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Declares a single-valued `LedgerEntryType` field type for one object kind.
///
/// The type has exactly one value, so an object can never carry the wrong tag. It
/// always encodes its name; decoding rejects any other name. Objects mark the field
/// `#[serde(default)]` because some responses omit the tag.
macro_rules! entry_type_tag {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
        pub struct $name;

        impl $name {
            pub const KIND: LedgerEntryType = LedgerEntryType::$kind;
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(Self::KIND.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let name = String::deserialize(deserializer)?;
                if name == Self::KIND.as_str() {
                    Ok($name)
                } else {
                    Err(de::Error::custom(format!(
                        "expected LedgerEntryType {}, found {name}",
                        Self::KIND
                    )))
                }
            }
        }
    };
}

entry_type_tag!(AccountRootType => AccountRoot);
entry_type_tag!(OfferType => Offer);
entry_type_tag!(DepositPreauthType => DepositPreauth);
entry_type_tag!(SignerListType => SignerList);
entry_type_tag!(EscrowType => Escrow);
entry_type_tag!(PayChannelType => PayChannel);

/// `Flags` of an object kind that defines no flags: always 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NoFlags;

impl Serialize for NoFlags {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(0)
    }
}

impl<'de> Deserialize<'de> for NoFlags {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match u32::deserialize(deserializer)? {
            0 => Ok(NoFlags),
            other => Err(de::Error::custom(format!(
                "object defines no flags, found {other:#x}"
            ))),
        }
    }
}
