//! SetRegularKey: assign, change or remove an account's regular key pair.

use crate::common::TransactionCommon;
use crate::validation::validate_set_regular_key;
use serde::{Deserialize, Serialize};
use xrpl_types::{Address, TransactionFlags};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SetRegularKeyFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: TransactionFlags,
    /// Absent removes the current regular key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_key: Option<Address>,
}

impl SetRegularKeyFields {
    pub fn new(common: TransactionCommon, regular_key: Option<Address>) -> Self {
        Self {
            common,
            flags: TransactionFlags::UNSET,
            regular_key,
        }
    }
}

transaction_variant! {
    /// A validated SetRegularKey.
    SetRegularKey(SetRegularKeyFields) => validate_set_regular_key
}
