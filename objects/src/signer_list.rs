//! SignerList: the multi-signing list owned by an account.

use crate::entry_type::SignerListType;
use serde::{Deserialize, Serialize};
use xrpl_types::{Hash256, SignerEntry, SignerListFlags};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignerListObject {
    #[serde(default)]
    pub ledger_entry_type: SignerListType,
    pub flags: SignerListFlags,
    pub owner_node: String,
    #[serde(rename = "PreviousTxnID")]
    pub previous_txn_id: Hash256,
    pub previous_txn_lgr_seq: u32,
    pub signer_entries: Vec<SignerEntry>,
    /// Always 0 today; reserved for multiple lists per account.
    #[serde(rename = "SignerListID")]
    pub signer_list_id: u32,
    pub signer_quorum: u32,
    #[serde(rename = "index")]
    pub index: Hash256,
}

impl SignerListObject {
    pub fn total_weight(&self) -> u32 {
        self.signer_entries
            .iter()
            .map(|entry| u32::from(entry.signer_weight))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn signer_list_roundtrip() {
        let doc = json!({
            "Flags": 65536,
            "LedgerEntryType": "SignerList",
            "OwnerNode": "0",
            "PreviousTxnID": "5904C0DC72C58A83AEFED2FFC5386356AA83FCA6A88C89D00646E51E687CDBE4",
            "PreviousTxnLgrSeq": 16061435,
            "SignerEntries": [
                {"SignerEntry": {"Account": "rAR8rR8sUkBoCZFawhkWzY4Y5YoyuznwD", "SignerWeight": 2}},
                {"SignerEntry": {"Account": "rPT1Sjq2YGrBMTttX4GZHjKu9dyfzbpAYe", "SignerWeight": 1}}
            ],
            "SignerListID": 0,
            "SignerQuorum": 3,
            "index": "A9C28A28B85CD533217F5C0A0C7767666B093FA58A0F2D80026FCC4CD932DDC7"
        });
        let list: SignerListObject = serde_json::from_value(doc.clone()).unwrap();
        assert!(list.flags.is_set(SignerListFlags::ONE_OWNER_COUNT));
        assert_eq!(list.total_weight(), 3);
        assert_eq!(serde_json::to_value(&list).unwrap(), doc);
    }
}
