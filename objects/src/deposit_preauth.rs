//! DepositPreauth: a standing permission for one account to pay another that
//! requires deposit authorization.

use crate::entry_type::{DepositPreauthType, NoFlags};
use serde::{Deserialize, Serialize};
use xrpl_types::{Address, Hash256};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DepositPreAuthObject {
    #[serde(default)]
    pub ledger_entry_type: DepositPreauthType,
    /// The account that granted the preauthorization.
    pub account: Address,
    /// The account allowed to send payments to `account`.
    pub authorize: Address,
    #[serde(default)]
    pub flags: NoFlags,
    pub owner_node: String,
    #[serde(rename = "PreviousTxnID")]
    pub previous_txn_id: Hash256,
    pub previous_txn_lgr_seq: u32,
    #[serde(rename = "index")]
    pub index: Hash256,
}
