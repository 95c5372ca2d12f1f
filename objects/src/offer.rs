//! Offer: a standing order on the decentralized exchange.

use crate::entry_type::OfferType;
use serde::{Deserialize, Serialize};
use xrpl_types::{Address, CurrencyAmount, Hash256, OfferFlags};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OfferObject {
    #[serde(default)]
    pub ledger_entry_type: OfferType,
    pub account: Address,
    pub flags: OfferFlags,
    /// Sequence of the OfferCreate that placed this offer.
    pub sequence: u32,
    pub taker_pays: CurrencyAmount,
    pub taker_gets: CurrencyAmount,
    pub book_directory: Hash256,
    /// Hint into the book directory; hex u64 as a string.
    pub book_node: String,
    pub owner_node: String,
    #[serde(rename = "PreviousTxnID")]
    pub previous_txn_id: Hash256,
    pub previous_txn_lgr_seq: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u32>,
    #[serde(rename = "index")]
    pub index: Hash256,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn offer_roundtrip() {
        let doc = json!({
            "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "BookDirectory": "ACC27DE91DBA86FC509069EAF4BC511D73128B780F2E54BF5E07A369E2446000",
            "BookNode": "0000000000000000",
            "Flags": 131072,
            "LedgerEntryType": "Offer",
            "OwnerNode": "0000000000000000",
            "PreviousTxnID": "F0AB71E777B2DA54B86231E19B82554EF1F8211F92ECA473121C655BFC5329BF",
            "PreviousTxnLgrSeq": 14524914,
            "Sequence": 866,
            "TakerGets": {
                "currency": "XAG",
                "issuer": "rvYAfWj5gh67oV6fW32ZzP3Aw4Eubs59B",
                "value": "37"
            },
            "TakerPays": "79550000000",
            "index": "96F76F27D8A327FC48753167EC04A46AA0E382E6F57F32FD12274144D00F1797"
        });
        let offer: OfferObject = serde_json::from_value(doc.clone()).unwrap();
        assert!(offer.flags.is_set(OfferFlags::SELL));
        assert!(offer.taker_pays.is_xrp());
        assert_eq!(serde_json::to_value(&offer).unwrap(), doc);
    }
}
