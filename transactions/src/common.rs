//! Fields shared by every transaction kind.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use xrpl_types::{Address, Hash256, PublicKey, Signature, XrpCurrencyAmount};

/// Common transaction fields, flattened into each variant's wire object.
///
/// `Flags` is not here: its type differs per kind and it lives on each variant.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionCommon {
    pub account: Address,
    pub fee: XrpCurrencyAmount,
    pub sequence: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub signing_pub_key: Option<PublicKey>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub txn_signature: Option<Signature>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_ledger_sequence: Option<u32>,
    #[serde(
        rename = "AccountTxnID",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub account_txn_id: Option<Hash256>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub memos: Vec<Memo>,
    /// Assigned by the node once the transaction is signed; echoed in `tx` and
    /// `submit` results.
    #[serde(rename = "hash", default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<Hash256>,
}

impl TransactionCommon {
    pub fn new(account: Address, fee: XrpCurrencyAmount, sequence: u32) -> Self {
        Self {
            account,
            fee,
            sequence,
            signing_pub_key: None,
            txn_signature: None,
            source_tag: None,
            last_ledger_sequence: None,
            account_txn_id: None,
            memos: Vec::new(),
            hash: None,
        }
    }

    pub fn is_signed(&self) -> bool {
        self.txn_signature.is_some()
    }
}

/// Arbitrary data attached to a transaction; every field is hex on the wire.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Memo {
    pub memo_data: Option<String>,
    pub memo_format: Option<String>,
    pub memo_type: Option<String>,
}

impl Memo {
    /// Build a memo from plain text, hex-encoding each part.
    pub fn text(memo_type: &str, data: &str) -> Self {
        Self {
            memo_data: Some(hex::encode_upper(data)),
            memo_format: None,
            memo_type: Some(hex::encode_upper(memo_type)),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct MemoBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    memo_data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    memo_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    memo_type: Option<String>,
}

#[derive(Serialize, Deserialize)]
struct WrappedMemo {
    #[serde(rename = "Memo")]
    memo: MemoBody,
}

impl Serialize for Memo {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        WrappedMemo {
            memo: MemoBody {
                memo_data: self.memo_data.clone(),
                memo_format: self.memo_format.clone(),
                memo_type: self.memo_type.clone(),
            },
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Memo {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let WrappedMemo { memo } = WrappedMemo::deserialize(deserializer)?;
        Ok(Self {
            memo_data: memo.memo_data,
            memo_format: memo.memo_format,
            memo_type: memo.memo_type,
        })
    }
}
