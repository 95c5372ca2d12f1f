//! XRP Ledger transactions: the closed family of supported kinds, their validation,
//! and their JSON wire form.
//!
//! Transaction kinds:
//! - **Payment**: deliver XRP or an issued currency
//! - **AccountSet** / **SetRegularKey** / **SignerListSet**: account settings and keys
//! - **EscrowCreate** / **EscrowFinish** / **EscrowCancel**: time- or condition-locked XRP
//! - **OfferCreate** / **OfferCancel**: exchange orders
//! - **PaymentChannelCreate** / **PaymentChannelFund** / **PaymentChannelClaim**
//! - **DepositPreAuth**: deposit authorization
//! - **TrustSet**: trust lines
//!
//! Every kind is a validated newtype: construction and decoding run the same checks,
//! so a value in memory is always one the node could accept structurally.

#[macro_use]
mod macros;

pub mod account_set;
pub mod common;
pub mod condition;
pub mod deposit_preauth;
pub mod error;
pub mod escrow;
pub mod offer;
pub mod payment;
pub mod payment_channel;
pub mod set_regular_key;
pub mod signer_list_set;
pub mod signing;
pub mod trust_set;
pub mod validation;

pub use account_set::{AccountSet, AccountSetFields};
pub use common::{Memo, TransactionCommon};
pub use condition::{Condition, Fulfillment};
pub use deposit_preauth::{DepositPreAuth, DepositPreAuthFields};
pub use error::TransactionError;
pub use escrow::{
    EscrowCancel, EscrowCancelFields, EscrowCreate, EscrowCreateFields, EscrowFinish,
    EscrowFinishFields,
};
pub use offer::{OfferCancel, OfferCancelFields, OfferCreate, OfferCreateFields};
pub use payment::{Payment, PaymentFields};
pub use payment_channel::{
    PaymentChannelClaim, PaymentChannelClaimFields, PaymentChannelCreate,
    PaymentChannelCreateFields, PaymentChannelFund, PaymentChannelFundFields,
};
pub use set_regular_key::{SetRegularKey, SetRegularKeyFields};
pub use signer_list_set::{SignerListSet, SignerListSetFields};
pub use signing::{SignedTransaction, Signer, SigningError};
pub use trust_set::{TrustSet, TrustSetFields};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use xrpl_types::{Address, Hash256, PublicKey, Signature, XrpCurrencyAmount};

// ── Discriminator ───────────────────────────────────────────────────────

/// The `TransactionType` discriminator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TransactionType {
    Payment,
    AccountSet,
    SetRegularKey,
    EscrowCreate,
    EscrowFinish,
    EscrowCancel,
    OfferCreate,
    OfferCancel,
    PaymentChannelCreate,
    PaymentChannelFund,
    PaymentChannelClaim,
    DepositPreAuth,
    TrustSet,
    SignerListSet,
}

impl TransactionType {
    pub const ALL: [Self; 14] = [
        Self::Payment,
        Self::AccountSet,
        Self::SetRegularKey,
        Self::EscrowCreate,
        Self::EscrowFinish,
        Self::EscrowCancel,
        Self::OfferCreate,
        Self::OfferCancel,
        Self::PaymentChannelCreate,
        Self::PaymentChannelFund,
        Self::PaymentChannelClaim,
        Self::DepositPreAuth,
        Self::TrustSet,
        Self::SignerListSet,
    ];

    /// Wire name. Note the node spells deposit preauthorization `DepositPreauth`.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Payment => "Payment",
            Self::AccountSet => "AccountSet",
            Self::SetRegularKey => "SetRegularKey",
            Self::EscrowCreate => "EscrowCreate",
            Self::EscrowFinish => "EscrowFinish",
            Self::EscrowCancel => "EscrowCancel",
            Self::OfferCreate => "OfferCreate",
            Self::OfferCancel => "OfferCancel",
            Self::PaymentChannelCreate => "PaymentChannelCreate",
            Self::PaymentChannelFund => "PaymentChannelFund",
            Self::PaymentChannelClaim => "PaymentChannelClaim",
            Self::DepositPreAuth => "DepositPreauth",
            Self::TrustSet => "TrustSet",
            Self::SignerListSet => "SignerListSet",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = TransactionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| TransactionError::invalid("TransactionType", format!("unknown kind {s:?}")))
    }
}

// ── Transaction ─────────────────────────────────────────────────────────

/// Any supported transaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Transaction {
    Payment(Payment),
    AccountSet(AccountSet),
    SetRegularKey(SetRegularKey),
    EscrowCreate(EscrowCreate),
    EscrowFinish(EscrowFinish),
    EscrowCancel(EscrowCancel),
    OfferCreate(OfferCreate),
    OfferCancel(OfferCancel),
    PaymentChannelCreate(PaymentChannelCreate),
    PaymentChannelFund(PaymentChannelFund),
    PaymentChannelClaim(PaymentChannelClaim),
    DepositPreAuth(DepositPreAuth),
    TrustSet(TrustSet),
    SignerListSet(SignerListSet),
}

impl Transaction {
    pub fn transaction_type(&self) -> TransactionType {
        match self {
            Self::Payment(_) => TransactionType::Payment,
            Self::AccountSet(_) => TransactionType::AccountSet,
            Self::SetRegularKey(_) => TransactionType::SetRegularKey,
            Self::EscrowCreate(_) => TransactionType::EscrowCreate,
            Self::EscrowFinish(_) => TransactionType::EscrowFinish,
            Self::EscrowCancel(_) => TransactionType::EscrowCancel,
            Self::OfferCreate(_) => TransactionType::OfferCreate,
            Self::OfferCancel(_) => TransactionType::OfferCancel,
            Self::PaymentChannelCreate(_) => TransactionType::PaymentChannelCreate,
            Self::PaymentChannelFund(_) => TransactionType::PaymentChannelFund,
            Self::PaymentChannelClaim(_) => TransactionType::PaymentChannelClaim,
            Self::DepositPreAuth(_) => TransactionType::DepositPreAuth,
            Self::TrustSet(_) => TransactionType::TrustSet,
            Self::SignerListSet(_) => TransactionType::SignerListSet,
        }
    }

    pub fn common(&self) -> &TransactionCommon {
        match self {
            Self::Payment(tx) => &tx.common,
            Self::AccountSet(tx) => &tx.common,
            Self::SetRegularKey(tx) => &tx.common,
            Self::EscrowCreate(tx) => &tx.common,
            Self::EscrowFinish(tx) => &tx.common,
            Self::EscrowCancel(tx) => &tx.common,
            Self::OfferCreate(tx) => &tx.common,
            Self::OfferCancel(tx) => &tx.common,
            Self::PaymentChannelCreate(tx) => &tx.common,
            Self::PaymentChannelFund(tx) => &tx.common,
            Self::PaymentChannelClaim(tx) => &tx.common,
            Self::DepositPreAuth(tx) => &tx.common,
            Self::TrustSet(tx) => &tx.common,
            Self::SignerListSet(tx) => &tx.common,
        }
    }

    fn common_mut(&mut self) -> &mut TransactionCommon {
        match self {
            Self::Payment(tx) => tx.common_mut(),
            Self::AccountSet(tx) => tx.common_mut(),
            Self::SetRegularKey(tx) => tx.common_mut(),
            Self::EscrowCreate(tx) => tx.common_mut(),
            Self::EscrowFinish(tx) => tx.common_mut(),
            Self::EscrowCancel(tx) => tx.common_mut(),
            Self::OfferCreate(tx) => tx.common_mut(),
            Self::OfferCancel(tx) => tx.common_mut(),
            Self::PaymentChannelCreate(tx) => tx.common_mut(),
            Self::PaymentChannelFund(tx) => tx.common_mut(),
            Self::PaymentChannelClaim(tx) => tx.common_mut(),
            Self::DepositPreAuth(tx) => tx.common_mut(),
            Self::TrustSet(tx) => tx.common_mut(),
            Self::SignerListSet(tx) => tx.common_mut(),
        }
    }

    /// The `Flags` wire value, canonical-signature bit included.
    pub fn flags(&self) -> u32 {
        match self {
            Self::Payment(tx) => tx.flags.bits(),
            Self::AccountSet(tx) => tx.flags.bits(),
            Self::SetRegularKey(tx) => tx.flags.bits(),
            Self::EscrowCreate(tx) => tx.flags.bits(),
            Self::EscrowFinish(tx) => tx.flags.bits(),
            Self::EscrowCancel(tx) => tx.flags.bits(),
            Self::OfferCreate(tx) => tx.flags.bits(),
            Self::OfferCancel(tx) => tx.flags.bits(),
            Self::PaymentChannelCreate(tx) => tx.flags.bits(),
            Self::PaymentChannelFund(tx) => tx.flags.bits(),
            Self::PaymentChannelClaim(tx) => tx.flags.bits(),
            Self::DepositPreAuth(tx) => tx.flags.bits(),
            Self::TrustSet(tx) => tx.flags.bits(),
            Self::SignerListSet(tx) => tx.flags.bits(),
        }
    }

    pub fn account(&self) -> &Address {
        &self.common().account
    }

    pub fn fee(&self) -> XrpCurrencyAmount {
        self.common().fee
    }

    pub fn sequence(&self) -> u32 {
        self.common().sequence
    }

    pub fn hash(&self) -> Option<&Hash256> {
        self.common().hash.as_ref()
    }

    pub fn signature(&self) -> Option<&Signature> {
        self.common().txn_signature.as_ref()
    }

    /// Canonical unsigned JSON: what a signer signs. Carries no `TxnSignature` and no
    /// node-assigned `hash`.
    pub fn unsigned_payload(&self) -> Result<serde_json::Value, TransactionError> {
        let mut unsigned = self.clone();
        let common = unsigned.common_mut();
        common.txn_signature = None;
        common.hash = None;
        Ok(serde_json::to_value(&unsigned)?)
    }

    /// Copy with the signing key set, ready for [`Transaction::unsigned_payload`].
    pub fn with_signing_key(&self, key: PublicKey) -> Self {
        let mut tx = self.clone();
        tx.common_mut().signing_pub_key = Some(key);
        tx
    }

    /// Copy carrying an externally produced signature.
    pub fn with_signature(&self, signature: Signature) -> Self {
        let mut tx = self.clone();
        tx.common_mut().txn_signature = Some(signature);
        tx
    }

    /// Copy carrying the identifying hash of its signed form.
    pub fn with_hash(&self, hash: Hash256) -> Self {
        let mut tx = self.clone();
        tx.common_mut().hash = Some(hash);
        tx
    }
}

impl Serialize for Transaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Payment(tx) => tx.serialize(serializer),
            Self::AccountSet(tx) => tx.serialize(serializer),
            Self::SetRegularKey(tx) => tx.serialize(serializer),
            Self::EscrowCreate(tx) => tx.serialize(serializer),
            Self::EscrowFinish(tx) => tx.serialize(serializer),
            Self::EscrowCancel(tx) => tx.serialize(serializer),
            Self::OfferCreate(tx) => tx.serialize(serializer),
            Self::OfferCancel(tx) => tx.serialize(serializer),
            Self::PaymentChannelCreate(tx) => tx.serialize(serializer),
            Self::PaymentChannelFund(tx) => tx.serialize(serializer),
            Self::PaymentChannelClaim(tx) => tx.serialize(serializer),
            Self::DepositPreAuth(tx) => tx.serialize(serializer),
            Self::TrustSet(tx) => tx.serialize(serializer),
            Self::SignerListSet(tx) => tx.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Transaction {
    /// Reads `TransactionType` first, then decodes the matching kind.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        let tag = value
            .get("TransactionType")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| D::Error::missing_field("TransactionType"))?;
        let kind: TransactionType = tag.parse().map_err(D::Error::custom)?;

        fn decode<T: serde::de::DeserializeOwned, E: Error>(value: serde_json::Value) -> Result<T, E> {
            serde_json::from_value(value).map_err(E::custom)
        }

        Ok(match kind {
            TransactionType::Payment => Self::Payment(decode(value)?),
            TransactionType::AccountSet => Self::AccountSet(decode(value)?),
            TransactionType::SetRegularKey => Self::SetRegularKey(decode(value)?),
            TransactionType::EscrowCreate => Self::EscrowCreate(decode(value)?),
            TransactionType::EscrowFinish => Self::EscrowFinish(decode(value)?),
            TransactionType::EscrowCancel => Self::EscrowCancel(decode(value)?),
            TransactionType::OfferCreate => Self::OfferCreate(decode(value)?),
            TransactionType::OfferCancel => Self::OfferCancel(decode(value)?),
            TransactionType::PaymentChannelCreate => Self::PaymentChannelCreate(decode(value)?),
            TransactionType::PaymentChannelFund => Self::PaymentChannelFund(decode(value)?),
            TransactionType::PaymentChannelClaim => Self::PaymentChannelClaim(decode(value)?),
            TransactionType::DepositPreAuth => Self::DepositPreAuth(decode(value)?),
            TransactionType::TrustSet => Self::TrustSet(decode(value)?),
            TransactionType::SignerListSet => Self::SignerListSet(decode(value)?),
        })
    }
}
