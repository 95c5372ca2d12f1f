//! PayChannel: a unidirectional XRP payment channel.

use crate::entry_type::{NoFlags, PayChannelType};
use serde::{Deserialize, Serialize};
use xrpl_types::{Address, Hash256, PublicKey, XrpCurrencyAmount};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PayChannelObject {
    #[serde(default)]
    pub ledger_entry_type: PayChannelType,
    pub account: Address,
    pub destination: Address,
    /// Total XRP allocated to the channel.
    pub amount: XrpCurrencyAmount,
    /// XRP already paid out.
    pub balance: XrpCurrencyAmount,
    pub public_key: PublicKey,
    pub settle_delay: u32,
    #[serde(default)]
    pub flags: NoFlags,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub expiration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<u32>,
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

impl PayChannelObject {
    /// XRP still claimable from the channel.
    pub fn remaining(&self) -> XrpCurrencyAmount {
        self.amount
            .checked_sub(self.balance.drops())
            .unwrap_or(XrpCurrencyAmount::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn channel_roundtrip() {
        let doc = json!({
            "Account": "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn",
            "Amount": "4325800",
            "Balance": "2323423",
            "Destination": "rAR8rR8sUkBoCZFawhkWzY4Y5YoyuznwD",
            "Flags": 0,
            "LedgerEntryType": "PayChannel",
            "OwnerNode": "0000000000000000",
            "PreviousTxnID": "F0AB71E777B2DA54B86231E19B82554EF1F8211F92ECA473121C655BFC5329BF",
            "PreviousTxnLgrSeq": 14524914,
            "PublicKey": "32D2471DB72B27E3310F355BB33E339BF26F8392D5A93D3BC0FC3B566612DA0F0A",
            "SettleDelay": 3600,
            "Expiration": 536027313,
            "CancelAfter": 536891313,
            "SourceTag": 0,
            "DestinationTag": 1002341,
            "index": "C1AE6DDDEEC05CF2978C0BAD6FE302948E9533691DC749DCDD3B9E5992CA6198"
        });
        let channel: PayChannelObject = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(channel.remaining().drops(), 4_325_800 - 2_323_423);
        assert_eq!(serde_json::to_value(&channel).unwrap(), doc);
    }
}
