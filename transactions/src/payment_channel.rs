//! Payment channel transactions: open, top up, and claim from a unidirectional XRP
//! channel.

use crate::common::TransactionCommon;
use crate::validation::{
    validate_payment_channel_claim, validate_payment_channel_create, validate_payment_channel_fund,
};
use serde::{Deserialize, Serialize};
use xrpl_types::{
    Address, Hash256, PaymentChannelClaimFlags, PublicKey, Signature, TransactionFlags,
    XrpCurrencyAmount,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentChannelCreateFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: TransactionFlags,
    pub amount: XrpCurrencyAmount,
    pub destination: Address,
    /// Seconds the source must wait to close a channel with unclaimed XRP.
    pub settle_delay: u32,
    /// Key that signs claims against this channel.
    pub public_key: PublicKey,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<u32>,
}

transaction_variant! {
    /// A validated PaymentChannelCreate.
    PaymentChannelCreate(PaymentChannelCreateFields) => validate_payment_channel_create
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentChannelFundFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: TransactionFlags,
    pub channel: Hash256,
    pub amount: XrpCurrencyAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u32>,
}

transaction_variant! {
    /// A validated PaymentChannelFund.
    PaymentChannelFund(PaymentChannelFundFields) => validate_payment_channel_fund
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentChannelClaimFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: PaymentChannelClaimFlags,
    pub channel: Hash256,
    /// Total amount delivered by the channel after this claim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<XrpCurrencyAmount>,
    /// Amount authorized by `signature`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<XrpCurrencyAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signature: Option<Signature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_key: Option<PublicKey>,
}

impl PaymentChannelClaimFields {
    pub fn new(common: TransactionCommon, channel: Hash256) -> Self {
        Self {
            common,
            flags: PaymentChannelClaimFlags::UNSET,
            channel,
            balance: None,
            amount: None,
            signature: None,
            public_key: None,
        }
    }
}

transaction_variant! {
    /// A validated PaymentChannelClaim.
    PaymentChannelClaim(PaymentChannelClaimFields) => validate_payment_channel_claim
}
