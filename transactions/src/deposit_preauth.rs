//! DepositPreauth: allow or revoke another account's permission to pay an account
//! that requires deposit authorization.

use crate::common::TransactionCommon;
use crate::validation::validate_deposit_preauth;
use serde::{Deserialize, Serialize};
use xrpl_types::{Address, TransactionFlags};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositPreAuthFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: TransactionFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorize: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unauthorize: Option<Address>,
}

impl DepositPreAuthFields {
    pub fn authorize(common: TransactionCommon, account: Address) -> Self {
        Self {
            common,
            flags: TransactionFlags::UNSET,
            authorize: Some(account),
            unauthorize: None,
        }
    }

    pub fn unauthorize(common: TransactionCommon, account: Address) -> Self {
        Self {
            common,
            flags: TransactionFlags::UNSET,
            authorize: None,
            unauthorize: Some(account),
        }
    }
}

transaction_variant! {
    /// A validated DepositPreauth.
    DepositPreAuth(DepositPreAuthFields) => validate_deposit_preauth
}
