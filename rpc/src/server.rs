//! `server_info`: what the node knows about itself and the last validated ledger.

use serde::{Deserialize, Serialize};
use xrpl_types::Hash256;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerInfoResult {
    pub info: ServerInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServerInfo {
    pub build_version: String,
    /// Ledger ranges held locally, e.g. `"32570-62964740"`, or `"empty"`.
    pub complete_ledgers: String,
    /// `"full"`, `"syncing"`, `"proposing"`, ...
    pub server_state: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hostid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub io_latency_ms: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub load_factor: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_id: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub peers: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pubkey_node: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uptime: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validation_quorum: Option<u32>,
    /// Absent until the node has validated a ledger.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub validated_ledger: Option<ValidatedLedgerInfo>,
}

impl ServerInfo {
    /// Whether `seq` falls inside one of the `complete_ledgers` ranges.
    pub fn has_ledger(&self, seq: u32) -> bool {
        self.complete_ledgers.split(',').any(|range| {
            let range = range.trim();
            let (low, high) = range.split_once('-').unwrap_or((range, range));
            match (low.parse::<u32>(), high.parse::<u32>()) {
                (Ok(low), Ok(high)) => (low..=high).contains(&seq),
                _ => false,
            }
        })
    }

    pub fn validated_sequence(&self) -> Option<u32> {
        self.validated_ledger.as_ref().map(|ledger| ledger.seq)
    }
}

/// Summary of the latest validated ledger. Fee and reserves are in XRP, not drops.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidatedLedgerInfo {
    /// Seconds since the ledger closed.
    #[serde(default)]
    pub age: u32,
    pub base_fee_xrp: f64,
    pub hash: Hash256,
    pub reserve_base_xrp: f64,
    pub reserve_inc_xrp: f64,
    pub seq: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decodes_node_response() {
        let doc = json!({
            "info": {
                "build_version": "1.7.0",
                "complete_ledgers": "61881385-62562429",
                "hostid": "LARD",
                "io_latency_ms": 2,
                "load_factor": 1.0,
                "peers": 21,
                "pubkey_node": "n9KAa2zVWjPHgfzsE3iZ8HAbzJtPrnoh4H2M2HgE7dfqtvyEb1KJ",
                "server_state": "full",
                "uptime": 17070,
                "validated_ledger": {
                    "age": 2,
                    "base_fee_xrp": 0.00001,
                    "hash": "0D2D30837E05995AAAAA117294BB45AB0699AB1219605FFD23318E050C7166E9",
                    "reserve_base_xrp": 20.0,
                    "reserve_inc_xrp": 5.0,
                    "seq": 62562429
                },
                "validation_quorum": 29
            },
            "status": "success"
        });
        let result: ServerInfoResult = serde_json::from_value(doc.clone()).unwrap();
        let info = &result.info;
        assert_eq!(info.server_state, "full");
        assert_eq!(info.validated_sequence(), Some(62_562_429));
        let ledger = info.validated_ledger.as_ref().unwrap();
        assert_eq!(ledger.base_fee_xrp, 0.00001);
        assert_eq!(ledger.reserve_base_xrp, 20.0);
        assert!(info.network_id.is_none());
        assert_eq!(serde_json::to_value(&result).unwrap(), doc);
    }

    #[test]
    fn syncing_node_has_no_validated_ledger() {
        let result: ServerInfoResult = serde_json::from_value(json!({
            "info": {
                "build_version": "1.7.0",
                "complete_ledgers": "empty",
                "server_state": "syncing"
            }
        }))
        .unwrap();
        assert_eq!(result.info.validated_sequence(), None);
        assert!(!result.info.has_ledger(1));
    }

    #[test]
    fn complete_ledgers_ranges() {
        let info = ServerInfo {
            build_version: "1.7.0".into(),
            complete_ledgers: "5-10, 12,20-22".into(),
            server_state: "full".into(),
            hostid: None,
            io_latency_ms: None,
            load_factor: None,
            network_id: None,
            peers: None,
            pubkey_node: None,
            uptime: None,
            validation_quorum: None,
            validated_ledger: None,
        };
        assert!(info.has_ledger(5));
        assert!(info.has_ledger(10));
        assert!(!info.has_ledger(11));
        assert!(info.has_ledger(12));
        assert!(info.has_ledger(21));
        assert!(!info.has_ledger(23));
    }
}
