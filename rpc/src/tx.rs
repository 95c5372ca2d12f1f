//! `tx`: look up one transaction by hash.

use serde::{Deserialize, Deserializer, Serialize};
use xrpl_transactions::{Transaction, TransactionError};
use xrpl_types::{CurrencyAmount, Hash256, LedgerIndex};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequestParams {
    pub transaction: Hash256,
    #[serde(default)]
    pub binary: bool,
    /// With `max_ledger`, bounds the search so a miss is definitive.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_ledger: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_ledger: Option<u32>,
}

impl TransactionRequestParams {
    pub fn of(transaction: Hash256) -> Self {
        Self {
            transaction,
            binary: false,
            min_ledger: None,
            max_ledger: None,
        }
    }
}

/// A transaction as the node currently knows it.
///
/// The outcome metadata is only meaningful once the transaction is in a validated
/// ledger; [`TransactionResult::metadata`] withholds it until then.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult<T = Transaction> {
    #[serde(flatten)]
    pub transaction: T,
    pub hash: Hash256,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_index: Option<LedgerIndex>,
    #[serde(default)]
    pub validated: bool,
    /// Close time of the containing ledger, Ripple epoch seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<u32>,
    #[serde(rename = "meta", default, skip_serializing_if = "Option::is_none")]
    meta: Option<TransactionMetadata>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl<T> TransactionResult<T> {
    /// Outcome metadata, present only for a validated transaction.
    pub fn metadata(&self) -> Option<&TransactionMetadata> {
        self.meta.as_ref().filter(|_| self.validated)
    }

    /// Final engine result, once validated.
    pub fn engine_result(&self) -> Option<&str> {
        self.metadata().map(|meta| meta.transaction_result.as_str())
    }

    /// Narrow the transaction to a specific kind.
    pub fn try_map<U>(self) -> Result<TransactionResult<U>, TransactionError>
    where
        U: TryFrom<T, Error = TransactionError>,
    {
        Ok(TransactionResult {
            transaction: U::try_from(self.transaction)?,
            hash: self.hash,
            ledger_index: self.ledger_index,
            validated: self.validated,
            date: self.date,
            meta: self.meta,
            status: self.status,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionMetadata {
    /// Position of the transaction within its ledger.
    #[serde(rename = "TransactionIndex")]
    pub transaction_index: u32,
    /// Final engine result code, e.g. `tesSUCCESS`.
    #[serde(rename = "TransactionResult")]
    pub transaction_result: String,
    /// What a payment actually delivered. `None` both when absent and when the node
    /// reports it as `"unavailable"` (ledgers older than 2014-01-20).
    #[serde(
        default,
        deserialize_with = "delivered_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub delivered_amount: Option<CurrencyAmount>,
    /// Created, modified and deleted ledger entries, kept as the node sent them.
    #[serde(rename = "AffectedNodes", default)]
    pub affected_nodes: Vec<serde_json::Value>,
}

fn delivered_amount<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<CurrencyAmount>, D::Error> {
    use serde::de::Error;

    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) if s == "unavailable" => Ok(None),
        serde_json::Value::Null => Ok(None),
        other => serde_json::from_value(other).map(Some).map_err(D::Error::custom),
    }
}
