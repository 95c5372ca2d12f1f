//! `ledger` and the admin-only `ledger_accept`.

use serde::{Deserialize, Serialize};
use xrpl_types::codec::ledger_index_string;
use xrpl_types::{Hash256, LedgerIndex, XrpCurrencyAmount};

fn default_true() -> bool {
    true
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRequestParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_hash: Option<Hash256>,
    #[serde(default)]
    pub ledger_index: LedgerIndex,
    /// Admin only: the complete state tree.
    #[serde(default)]
    pub accounts: bool,
    /// Admin only: every field of the ledger.
    #[serde(default)]
    pub full: bool,
    #[serde(default)]
    pub transactions: bool,
    /// Full JSON for listed transactions and accounts instead of hashes.
    #[serde(default = "default_true")]
    pub expand: bool,
    #[serde(default)]
    pub binary: bool,
    #[serde(default)]
    pub queue: bool,
    #[serde(default)]
    pub owner_funds: bool,
}

impl LedgerRequestParams {
    pub fn of(ledger_index: LedgerIndex) -> Self {
        Self {
            ledger_index,
            ..Self::default()
        }
    }
}

impl Default for LedgerRequestParams {
    fn default() -> Self {
        Self {
            ledger_hash: None,
            ledger_index: LedgerIndex::Current,
            accounts: false,
            full: false,
            transactions: false,
            expand: true,
            binary: false,
            queue: false,
            owner_funds: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerResult {
    pub ledger: LedgerHeader,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_hash: Option<Hash256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<LedgerIndex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_current_index: Option<LedgerIndex>,
    #[serde(default)]
    pub validated: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl LedgerResult {
    /// Sequence of the returned ledger, open or closed.
    pub fn sequence(&self) -> Option<u32> {
        self.ledger.ledger_index.sequence()
    }
}

/// Ledger header. Hashes are absent while the ledger is still open.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerHeader {
    /// Written as a string by the node, even though it is a sequence number.
    #[serde(with = "ledger_index_string")]
    pub ledger_index: LedgerIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_hash: Option<Hash256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_hash: Option<Hash256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_hash: Option<Hash256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_hash: Option<Hash256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_flags: Option<u32>,
    /// Seconds since the Ripple epoch (2000-01-01T00:00:00Z).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time_human: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub close_time_resolution: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_close_time: Option<u32>,
    #[serde(default)]
    pub closed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_coins: Option<XrpCurrencyAmount>,
    /// Transaction hashes, or full transactions when `expand` was requested.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transactions: Vec<serde_json::Value>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptLedgerResult {
    /// Sequence of the new open ledger.
    pub ledger_current_index: LedgerIndex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_params_defaults() {
        let params = LedgerRequestParams::of(LedgerIndex::Validated);
        let doc = json!({
            "ledger_index": "validated",
            "accounts": false,
            "full": false,
            "transactions": false,
            "expand": true,
            "binary": false,
            "queue": false,
            "owner_funds": false
        });
        assert_eq!(serde_json::to_value(&params).unwrap(), doc);
        assert_eq!(serde_json::from_value::<LedgerRequestParams>(doc).unwrap(), params);

        let sparse: LedgerRequestParams = serde_json::from_value(json!({})).unwrap();
        assert_eq!(sparse, LedgerRequestParams::default());
    }

    #[test]
    fn decodes_validated_ledger() {
        let doc = json!({
            "ledger": {
                "account_hash": "B258A8BB4743FB74CBBD6E9F67E4A56C4432EA09E5805E4CC2DA26F2DBE8F3D1",
                "close_flags": 0,
                "close_time": 638329271,
                "close_time_human": "2020-Mar-24 01:41:11.000000000 UTC",
                "close_time_resolution": 10,
                "closed": true,
                "ledger_hash": "3652D7FD0576BC452C0D2E9B747BDD733075971D1A9A1D98125055DEF428721A",
                "ledger_index": "54300940",
                "parent_close_time": 638329270,
                "parent_hash": "AE996778246BC81F85D5AF051241DAA577C23BCA04C034A7074F93700194520D",
                "total_coins": "99991024049618156",
                "transaction_hash": "FC6FFCB71B2527DDD630EE5409D38913B4D4C026AA6C3B14A3E9D4ED45CFE30D"
            },
            "ledger_hash": "3652D7FD0576BC452C0D2E9B747BDD733075971D1A9A1D98125055DEF428721A",
            "ledger_index": 54300940,
            "status": "success",
            "validated": true
        });
        let result: LedgerResult = serde_json::from_value(doc.clone()).unwrap();
        assert!(result.validated);
        assert!(result.ledger.closed);
        assert_eq!(result.sequence(), Some(54_300_940));
        assert_eq!(result.ledger_index, Some(LedgerIndex::Sequence(54_300_940)));
        assert_eq!(serde_json::to_value(&result).unwrap(), doc);
    }

    #[test]
    fn decodes_open_ledger() {
        let doc = json!({
            "ledger": {
                "closed": false,
                "ledger_index": "54300941",
                "parent_hash": "3652D7FD0576BC452C0D2E9B747BDD733075971D1A9A1D98125055DEF428721A"
            },
            "ledger_current_index": 54300941,
            "validated": false
        });
        let result: LedgerResult = serde_json::from_value(doc.clone()).unwrap();
        assert!(result.ledger.ledger_hash.is_none());
        assert_eq!(result.ledger_current_index, Some(LedgerIndex::Sequence(54_300_941)));
        assert_eq!(serde_json::to_value(&result).unwrap(), doc);
    }

    #[test]
    fn accept_ledger_result() {
        let result: AcceptLedgerResult =
            serde_json::from_value(json!({"ledger_current_index": 6, "status": "success"})).unwrap();
        assert_eq!(result.ledger_current_index, LedgerIndex::Sequence(6));
    }
}
