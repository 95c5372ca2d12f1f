//! Payment: move value from one account to another, optionally across currencies.

use crate::common::TransactionCommon;
use crate::validation::validate_payment;
use serde::{Deserialize, Serialize};
use xrpl_types::{Address, CurrencyAmount, Hash256, PathStep, PaymentFlags};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: PaymentFlags,
    pub amount: CurrencyAmount,
    pub destination: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<u32>,
    #[serde(rename = "InvoiceID", default, skip_serializing_if = "Option::is_none")]
    pub invoice_id: Option<Hash256>,
    /// Each path is a list of steps; empty for direct payments.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub paths: Vec<Vec<PathStep>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_max: Option<CurrencyAmount>,
    /// Only meaningful with `tfPartialPayment`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deliver_min: Option<CurrencyAmount>,
}

impl PaymentFields {
    pub fn new(common: TransactionCommon, amount: CurrencyAmount, destination: Address) -> Self {
        Self {
            common,
            flags: PaymentFlags::UNSET,
            amount,
            destination,
            destination_tag: None,
            invoice_id: None,
            paths: Vec::new(),
            send_max: None,
            deliver_min: None,
        }
    }
}

transaction_variant! {
    /// A validated Payment.
    Payment(PaymentFields) => validate_payment
}
