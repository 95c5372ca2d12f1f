//! `account_info` and `account_objects`.

use serde::{Deserialize, Serialize};
use xrpl_objects::{AccountRootObject, LedgerObject};
use xrpl_types::codec::u64_string;
use xrpl_types::{Address, Hash256, LedgerIndex, Marker, XrpCurrencyAmount};

fn default_true() -> bool {
    true
}

// ── account_info ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfoRequestParams {
    pub account: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_hash: Option<Hash256>,
    #[serde(default)]
    pub ledger_index: LedgerIndex,
    /// Only accept a classic address or public key as `account`.
    #[serde(default = "default_true")]
    pub strict: bool,
    /// Include queued transactions; only valid against the current ledger.
    #[serde(default)]
    pub queue: bool,
    #[serde(default)]
    pub signer_lists: bool,
}

impl AccountInfoRequestParams {
    /// Query the current (open) ledger.
    pub fn of(account: Address) -> Self {
        Self::at(account, LedgerIndex::Current)
    }

    pub fn at(account: Address, ledger_index: LedgerIndex) -> Self {
        Self {
            account,
            ledger_hash: None,
            ledger_index,
            strict: true,
            queue: false,
            signer_lists: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInfoResult {
    pub account_data: AccountRootObject,
    /// Set when the query ran against the open ledger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_current_index: Option<LedgerIndex>,
    /// Set when the query ran against a closed or validated ledger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<LedgerIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queue_data: Option<QueueData>,
    #[serde(default)]
    pub validated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// The account's transactions waiting in the node's queue.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueData {
    pub txn_count: u32,
    #[serde(default)]
    pub auth_change_queued: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lowest_sequence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highest_sequence: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_spend_drops_total: Option<XrpCurrencyAmount>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<QueueTransaction>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueTransaction {
    /// Whether this transaction changes how the account is authorized.
    pub auth_change: bool,
    pub fee: XrpCurrencyAmount,
    #[serde(with = "u64_string")]
    pub fee_level: u64,
    pub max_spend_drops: XrpCurrencyAmount,
    pub seq: u32,
    #[serde(rename = "LastLedgerSequence", default, skip_serializing_if = "Option::is_none")]
    pub last_ledger_sequence: Option<u32>,
}

// ── account_objects ─────────────────────────────────────────────────────

/// Filter for `account_objects`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountObjectType {
    Check,
    DepositPreauth,
    Escrow,
    Offer,
    PaymentChannel,
    SignerList,
    Ticket,
    State,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountObjectsRequestParams {
    pub account: Address,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub object_type: Option<AccountObjectType>,
    /// Only objects that would block deleting the account.
    #[serde(default)]
    pub deletion_blockers_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_hash: Option<Hash256>,
    #[serde(default)]
    pub ledger_index: LedgerIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    /// Resume after the page that returned this marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
}

impl AccountObjectsRequestParams {
    pub fn of(account: Address) -> Self {
        Self {
            account,
            object_type: None,
            deletion_blockers_only: false,
            ledger_hash: None,
            ledger_index: LedgerIndex::Current,
            limit: None,
            marker: None,
        }
    }

    /// The request for the page after `result`, or `None` on the last page.
    pub fn next_page(&self, result: &AccountObjectsResult) -> Option<Self> {
        let marker = result.marker.clone()?;
        Some(Self {
            marker: Some(marker),
            ..self.clone()
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountObjectsResult {
    pub account: Address,
    pub account_objects: Vec<LedgerObject>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_hash: Option<Hash256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<LedgerIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_current_index: Option<LedgerIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(default)]
    pub validated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}
