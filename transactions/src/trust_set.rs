//! TrustSet: create or modify a trust line.

use crate::common::TransactionCommon;
use crate::validation::validate_trust_set;
use serde::{Deserialize, Serialize};
use xrpl_types::{IssuedCurrencyAmount, TrustSetFlags};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TrustSetFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: TrustSetFlags,
    /// Currency, counterparty (as issuer) and limit of the line.
    pub limit_amount: IssuedCurrencyAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_in: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality_out: Option<u32>,
}

impl TrustSetFields {
    pub fn new(common: TransactionCommon, limit_amount: IssuedCurrencyAmount) -> Self {
        Self {
            common,
            flags: TrustSetFlags::UNSET,
            limit_amount,
            quality_in: None,
            quality_out: None,
        }
    }
}

transaction_variant! {
    /// A validated TrustSet.
    TrustSet(TrustSetFields) => validate_trust_set
}
