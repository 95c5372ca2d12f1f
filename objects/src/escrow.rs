//! Escrow: XRP held until a time or a crypto-condition releases it.

use crate::entry_type::{EscrowType, NoFlags};
use serde::{Deserialize, Serialize};
use xrpl_transactions::Condition;
use xrpl_types::{Address, Hash256, XrpCurrencyAmount};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EscrowObject {
    #[serde(default)]
    pub ledger_entry_type: EscrowType,
    pub account: Address,
    pub destination: Address,
    pub amount: XrpCurrencyAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_after: Option<u32>,
    #[serde(default)]
    pub flags: NoFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<u32>,
    pub owner_node: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_node: Option<String>,
    #[serde(rename = "PreviousTxnID")]
    pub previous_txn_id: Hash256,
    pub previous_txn_lgr_seq: u32,
    #[serde(rename = "index")]
    pub index: Hash256,
}
