//! AccountSet: change account-level settings.

use crate::common::TransactionCommon;
use crate::validation::validate_account_set;
use serde::{Deserialize, Serialize};
use xrpl_types::{AccountSetFlag, TransactionFlags};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountSetFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: TransactionFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clear_flag: Option<AccountSetFlag>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set_flag: Option<AccountSetFlag>,
    /// Hex of the lowercase ASCII domain.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    /// Hex MD5 of an email address, for avatar lookup.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_key: Option<String>,
    /// Billionths; 0 clears, otherwise 1_000_000_000..=2_000_000_000.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_rate: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_size: Option<u8>,
}

impl AccountSetFields {
    pub fn new(common: TransactionCommon) -> Self {
        Self {
            common,
            flags: TransactionFlags::UNSET,
            clear_flag: None,
            set_flag: None,
            domain: None,
            email_hash: None,
            message_key: None,
            transfer_rate: None,
            tick_size: None,
        }
    }

    pub fn set(common: TransactionCommon, flag: AccountSetFlag) -> Self {
        Self {
            set_flag: Some(flag),
            ..Self::new(common)
        }
    }

    pub fn clear(common: TransactionCommon, flag: AccountSetFlag) -> Self {
        Self {
            clear_flag: Some(flag),
            ..Self::new(common)
        }
    }
}

transaction_variant! {
    /// A validated AccountSet.
    AccountSet(AccountSetFields) => validate_account_set
}
