//! AccountRoot: an account's settings and XRP balance.

use crate::entry_type::AccountRootType;
use crate::signer_list::SignerListObject;
use serde::{Deserialize, Serialize};
use xrpl_types::{AccountRootFlags, Address, Hash256, XrpCurrencyAmount};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AccountRootObject {
    #[serde(default)]
    pub ledger_entry_type: AccountRootType,
    pub account: Address,
    pub balance: XrpCurrencyAmount,
    pub flags: AccountRootFlags,
    pub owner_count: u32,
    #[serde(rename = "PreviousTxnID")]
    pub previous_txn_id: Hash256,
    pub previous_txn_lgr_seq: u32,
    pub sequence: u32,
    /// Present only while `asfAccountTxnID` tracking is enabled.
    #[serde(rename = "AccountTxnID", default, skip_serializing_if = "Option::is_none")]
    pub account_txn_id: Option<Hash256>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_key: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regular_key: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tick_size: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transfer_rate: Option<u32>,
    /// Returned by `account_info` only when `signer_lists` is requested.
    #[serde(rename = "signer_lists", default, skip_serializing_if = "Vec::is_empty")]
    pub signer_lists: Vec<SignerListObject>,
    #[serde(rename = "index")]
    pub index: Hash256,
}

impl AccountRootObject {
    pub fn has_flag(&self, flag: AccountRootFlags) -> bool {
        self.flags.is_set(flag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fixture() -> serde_json::Value {
        json!({
            "Account": "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn",
            "Balance": "148446663",
            "Domain": "6D64756F31332E636F6D",
            "EmailHash": "98B4375E1D753E5B91627516F6D70977",
            "Flags": 8388608,
            "LedgerEntryType": "AccountRoot",
            "MessageKey": "0000000000000000000000070000000300",
            "OwnerCount": 3,
            "PreviousTxnID": "0D5FB50FA65C9FE1538FD7E398FFFE9D1908DFA4576D8D7A020040686F93C77D",
            "PreviousTxnLgrSeq": 14091160,
            "Sequence": 336,
            "TransferRate": 1004999999,
            "index": "13F1A95D7AAB7108D5CE7EEAF504B2894B8C674E6D68499076441C4837282BF8"
        })
    }

    #[test]
    fn decodes_and_reencodes() {
        let object: AccountRootObject = serde_json::from_value(fixture()).unwrap();
        assert!(object.has_flag(AccountRootFlags::DEFAULT_RIPPLE));
        assert_eq!(object.balance.drops(), 148_446_663);
        assert_eq!(serde_json::to_value(&object).unwrap(), fixture());
    }

    #[test]
    fn missing_tag_is_filled_in() {
        let mut doc = fixture();
        doc.as_object_mut().unwrap().remove("LedgerEntryType");
        let object: AccountRootObject = serde_json::from_value(doc).unwrap();
        assert_eq!(serde_json::to_value(&object).unwrap(), fixture());
    }

    #[test]
    fn wrong_tag_rejected() {
        let mut doc = fixture();
        doc["LedgerEntryType"] = json!("Offer");
        assert!(serde_json::from_value::<AccountRootObject>(doc).is_err());
    }
}
