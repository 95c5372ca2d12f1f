//! Flag bitmask families.
//!
//! Every family is a `u32` newtype produced by [`flag_set!`]. Masks keep bits they do
//! not recognise, so a value decoded from a newer node re-encodes unchanged.
//!
//! Transaction-level families hide `tfFullyCanonicalSig` (`0x8000_0000`): it is stripped
//! on [`from_bits`](TransactionFlags::from_bits) and always present in
//! [`bits`](TransactionFlags::bits), so there is no way to build a transaction without it.

use crate::error::FormatError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The transaction flag every transaction carries on the wire.
pub const FULLY_CANONICAL_SIG: u32 = 0x8000_0000;

macro_rules! flag_set {
    (
        $(#[$meta:meta])*
        pub struct $name:ident: hidden = $hidden:tt {
            $( $(#[$fmeta:meta])* const $flag:ident = $bit:expr; )*
        }
        exclusive: [ $( ($a:ident, $b:ident) ),* ]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(u32);

        // Each named bit is a single bit, distinct from the others and from the
        // hidden bit. Violations fail the build.
        const _: () = {
            let bits: &[u32] = &[$($bit),*];
            let mut i = 0;
            while i < bits.len() {
                assert!(bits[i].count_ones() == 1, "flag must be a single bit");
                assert!(bits[i] & $hidden == 0, "flag overlaps the hidden bit");
                let mut j = i + 1;
                while j < bits.len() {
                    assert!(bits[i] != bits[j], "two flags claim the same bit");
                    j += 1;
                }
                i += 1;
            }
        };

        impl $name {
            pub const UNSET: Self = Self(0);

            $( $(#[$fmeta])* pub const $flag: Self = Self($bit); )*

            /// Bit always ORed into the wire value and never stored.
            pub const HIDDEN: u32 = $hidden;

            /// Union of every named bit.
            pub const KNOWN: u32 = 0 $(| $bit)*;

            const NAMED: &'static [(&'static str, u32)] = &[$((stringify!($flag), $bit)),*];

            const EXCLUSIVE: &'static [(&'static str, u32, &'static str, u32)] =
                &[$((stringify!($a), Self::$a.0, stringify!($b), Self::$b.0)),*];

            /// Build from a raw wire value, keeping unknown bits and dropping the hidden bit.
            pub const fn from_bits(bits: u32) -> Self {
                Self(bits & !$hidden)
            }

            /// Wire value, hidden bit included.
            pub const fn bits(&self) -> u32 {
                self.0 | $hidden
            }

            pub const fn with(self, flag: Self) -> Self {
                Self(self.0 | flag.0)
            }

            pub const fn without(self, flag: Self) -> Self {
                Self(self.0 & !flag.0)
            }

            pub const fn is_set(&self, flag: Self) -> bool {
                flag.0 != 0 && self.0 & flag.0 == flag.0
            }

            pub const fn is_empty(&self) -> bool {
                self.0 == 0
            }

            /// Bits with no name in this family.
            pub const fn unknown_bits(&self) -> u32 {
                self.0 & !Self::KNOWN
            }

            /// First mutually exclusive pair set together, if any.
            pub fn conflict(&self) -> Option<(&'static str, &'static str)> {
                Self::EXCLUSIVE
                    .iter()
                    .find(|(_, a, _, b)| self.0 & a != 0 && self.0 & b != 0)
                    .map(|(a, _, b, _)| (*a, *b))
            }

            /// Names of the known bits that are set, in declaration order.
            pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
                Self::NAMED
                    .iter()
                    .filter(move |(_, bit)| self.0 & bit != 0)
                    .map(|(name, _)| *name)
            }
        }

        impl std::ops::BitOr for $name {
            type Output = Self;

            fn bitor(self, rhs: Self) -> Self {
                self.with(rhs)
            }
        }

        impl std::ops::BitOrAssign for $name {
            fn bitor_assign(&mut self, rhs: Self) {
                *self = self.with(rhs);
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}(", stringify!($name))?;
                let mut first = true;
                for name in self.names() {
                    if !first {
                        f.write_str(" | ")?;
                    }
                    f.write_str(name)?;
                    first = false;
                }
                let unknown = self.unknown_bits();
                if unknown != 0 {
                    if !first {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{unknown:#x}")?;
                }
                f.write_str(")")
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_u32(self.bits())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                u32::deserialize(deserializer).map(Self::from_bits)
            }
        }
    };
}

// ── Ledger object flags ─────────────────────────────────────────────────

flag_set! {
    /// `AccountRoot.Flags` (lsf*).
    pub struct AccountRootFlags: hidden = 0 {
        const PASSWORD_SPENT = 0x0001_0000;
        const REQUIRE_DEST_TAG = 0x0002_0000;
        const REQUIRE_AUTH = 0x0004_0000;
        const DISALLOW_XRP = 0x0008_0000;
        const DISABLE_MASTER = 0x0010_0000;
        const NO_FREEZE = 0x0020_0000;
        const GLOBAL_FREEZE = 0x0040_0000;
        const DEFAULT_RIPPLE = 0x0080_0000;
        const DEPOSIT_AUTH = 0x0100_0000;
    }
    exclusive: []
}

flag_set! {
    /// `Offer.Flags`.
    pub struct OfferFlags: hidden = 0 {
        const PASSIVE = 0x0001_0000;
        const SELL = 0x0002_0000;
    }
    exclusive: []
}

flag_set! {
    /// `SignerList.Flags`.
    pub struct SignerListFlags: hidden = 0 {
        /// The list counts as a single owned object toward the owner reserve.
        const ONE_OWNER_COUNT = 0x0001_0000;
    }
    exclusive: []
}

// ── Transaction flags ───────────────────────────────────────────────────

flag_set! {
    /// Flags for transaction kinds with no kind-specific bits.
    pub struct TransactionFlags: hidden = FULLY_CANONICAL_SIG {}
    exclusive: []
}

flag_set! {
    pub struct PaymentFlags: hidden = FULLY_CANONICAL_SIG {
        const NO_DIRECT_RIPPLE = 0x0001_0000;
        const PARTIAL_PAYMENT = 0x0002_0000;
        const LIMIT_QUALITY = 0x0004_0000;
    }
    exclusive: []
}

flag_set! {
    pub struct OfferCreateFlags: hidden = FULLY_CANONICAL_SIG {
        const PASSIVE = 0x0001_0000;
        const IMMEDIATE_OR_CANCEL = 0x0002_0000;
        const FILL_OR_KILL = 0x0004_0000;
        const SELL = 0x0008_0000;
    }
    exclusive: [(IMMEDIATE_OR_CANCEL, FILL_OR_KILL)]
}

flag_set! {
    pub struct PaymentChannelClaimFlags: hidden = FULLY_CANONICAL_SIG {
        /// Clear the channel's expiration.
        const RENEW = 0x0001_0000;
        /// Request the channel be closed.
        const CLOSE = 0x0002_0000;
    }
    exclusive: [(RENEW, CLOSE)]
}

flag_set! {
    pub struct TrustSetFlags: hidden = FULLY_CANONICAL_SIG {
        const SET_AUTH = 0x0001_0000;
        const SET_NO_RIPPLE = 0x0002_0000;
        const CLEAR_NO_RIPPLE = 0x0004_0000;
        const SET_FREEZE = 0x0010_0000;
        const CLEAR_FREEZE = 0x0020_0000;
    }
    exclusive: [(SET_NO_RIPPLE, CLEAR_NO_RIPPLE), (SET_FREEZE, CLEAR_FREEZE)]
}

// ── AccountSet flag selector ────────────────────────────────────────────

/// Account-level switch toggled by `AccountSet.SetFlag` / `ClearFlag` (asf*).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u32)]
pub enum AccountSetFlag {
    RequireDest = 1,
    RequireAuth = 2,
    DisallowXrp = 3,
    DisableMaster = 4,
    AccountTxnId = 5,
    NoFreeze = 6,
    GlobalFreeze = 7,
    DefaultRipple = 8,
    DepositAuth = 9,
}

impl AccountSetFlag {
    pub const ALL: [Self; 9] = [
        Self::RequireDest,
        Self::RequireAuth,
        Self::DisallowXrp,
        Self::DisableMaster,
        Self::AccountTxnId,
        Self::NoFreeze,
        Self::GlobalFreeze,
        Self::DefaultRipple,
        Self::DepositAuth,
    ];

    pub const fn value(self) -> u32 {
        self as u32
    }

    /// The `AccountRoot` flag this switch sets or clears.
    ///
    /// `AccountTxnId` toggles tracking of the `AccountTxnID` field instead of a flag
    /// bit, so it has none.
    pub const fn ledger_flag(self) -> Option<AccountRootFlags> {
        match self {
            Self::RequireDest => Some(AccountRootFlags::REQUIRE_DEST_TAG),
            Self::RequireAuth => Some(AccountRootFlags::REQUIRE_AUTH),
            Self::DisallowXrp => Some(AccountRootFlags::DISALLOW_XRP),
            Self::DisableMaster => Some(AccountRootFlags::DISABLE_MASTER),
            Self::AccountTxnId => None,
            Self::NoFreeze => Some(AccountRootFlags::NO_FREEZE),
            Self::GlobalFreeze => Some(AccountRootFlags::GLOBAL_FREEZE),
            Self::DefaultRipple => Some(AccountRootFlags::DEFAULT_RIPPLE),
            Self::DepositAuth => Some(AccountRootFlags::DEPOSIT_AUTH),
        }
    }
}

impl TryFrom<u32> for AccountSetFlag {
    type Error = FormatError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|flag| flag.value() == value)
            .ok_or_else(|| FormatError::invalid("account set flag", format!("unknown value {value}")))
    }
}

impl Serialize for AccountSetFlag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(self.value())
    }
}

impl<'de> Deserialize<'de> for AccountSetFlag {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = u32::deserialize(deserializer)?;
        Self::try_from(value).map_err(serde::de::Error::custom)
    }
}
