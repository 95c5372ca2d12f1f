//! `submit`: hand a signed transaction blob to the node.
//!
//! The engine result is provisional. A `tesSUCCESS` here only means the transaction
//! applied to the open ledger; finality needs a validated `tx` lookup.

use serde::{Deserialize, Serialize};
use xrpl_transactions::{SignedTransaction, Transaction};
use xrpl_types::{Hash256, XrpCurrencyAmount};

pub const TES_SUCCESS: &str = "tesSUCCESS";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitRequestParams {
    pub tx_blob: String,
    /// Reject instead of queueing or retrying locally on any failure.
    #[serde(default)]
    pub fail_hard: bool,
}

impl SubmitRequestParams {
    pub fn of(signed: &SignedTransaction) -> Self {
        Self {
            tx_blob: signed.tx_blob.clone(),
            fail_hard: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitResult {
    pub engine_result: String,
    pub engine_result_code: i32,
    pub engine_result_message: String,
    pub tx_blob: String,
    pub tx_json: Transaction,
    #[serde(default)]
    pub accepted: bool,
    #[serde(default)]
    pub applied: bool,
    #[serde(default)]
    pub broadcast: bool,
    #[serde(default)]
    pub kept: bool,
    #[serde(default)]
    pub queued: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_sequence_available: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_sequence_next: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub open_ledger_cost: Option<XrpCurrencyAmount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validated_ledger_index: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl SubmitResult {
    /// Whether the transaction applied to the open ledger.
    pub fn is_success(&self) -> bool {
        self.engine_result == TES_SUCCESS
    }

    /// The identifying hash to look the transaction up with `tx`.
    pub fn transaction_hash(&self) -> Option<&Hash256> {
        self.tx_json.hash()
    }
}
