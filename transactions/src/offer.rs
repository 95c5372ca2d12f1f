//! Offer transactions on the decentralized exchange.

use crate::common::TransactionCommon;
use crate::validation::{validate_offer_cancel, validate_offer_create};
use serde::{Deserialize, Serialize};
use xrpl_types::{CurrencyAmount, OfferCreateFlags, TransactionFlags};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferCreateFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: OfferCreateFlags,
    pub taker_gets: CurrencyAmount,
    pub taker_pays: CurrencyAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u32>,
    /// An offer to replace, cancelled before this one is placed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offer_sequence: Option<u32>,
}

impl OfferCreateFields {
    pub fn new(
        common: TransactionCommon,
        taker_gets: CurrencyAmount,
        taker_pays: CurrencyAmount,
    ) -> Self {
        Self {
            common,
            flags: OfferCreateFlags::UNSET,
            taker_gets,
            taker_pays,
            expiration: None,
            offer_sequence: None,
        }
    }
}

transaction_variant! {
    /// A validated OfferCreate.
    OfferCreate(OfferCreateFields) => validate_offer_create
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferCancelFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: TransactionFlags,
    pub offer_sequence: u32,
}

impl OfferCancelFields {
    pub fn new(common: TransactionCommon, offer_sequence: u32) -> Self {
        Self {
            common,
            flags: TransactionFlags::UNSET,
            offer_sequence,
        }
    }
}

transaction_variant! {
    /// A validated OfferCancel.
    OfferCancel(OfferCancelFields) => validate_offer_cancel
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TransactionError;
    use xrpl_types::{Address, IssuedCurrencyAmount, XrpCurrencyAmount};

    fn fields(flags: OfferCreateFlags) -> OfferCreateFields {
        let account = Address::of("rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn").unwrap();
        let issuer = Address::of("rAR8rR8sUkBoCZFawhkWzY4Y5YoyuznwD").unwrap();
        let mut fields = OfferCreateFields::new(
            TransactionCommon::new(account, XrpCurrencyAmount::of_drops(10), 4),
            XrpCurrencyAmount::of_drops(5_000_000).into(),
            IssuedCurrencyAmount::new("USD", issuer, "5").unwrap().into(),
        );
        fields.flags = flags;
        fields
    }

    #[test]
    fn ioc_and_fok_conflict() {
        let err = OfferCreate::new(fields(
            OfferCreateFlags::IMMEDIATE_OR_CANCEL | OfferCreateFlags::FILL_OR_KILL,
        ))
        .unwrap_err();
        assert!(matches!(
            err,
            TransactionError::ConflictingFlags {
                first: "IMMEDIATE_OR_CANCEL",
                second: "FILL_OR_KILL"
            }
        ));
    }

    #[test]
    fn compatible_flags_accepted() {
        let offer = OfferCreate::new(fields(OfferCreateFlags::PASSIVE | OfferCreateFlags::SELL)).unwrap();
        assert_eq!(offer.flags.bits(), 0x8009_0000);
    }

    #[test]
    fn conflicting_flags_rejected_on_decode() {
        let mut doc = serde_json::to_value(OfferCreate::new(fields(OfferCreateFlags::UNSET)).unwrap()).unwrap();
        doc["Flags"] = serde_json::json!(0x8006_0000u32);
        assert!(serde_json::from_value::<OfferCreate>(doc).is_err());
    }
}
