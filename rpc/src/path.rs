//! `ripple_path_find`: one-shot search for payment paths.

use serde::{Deserialize, Serialize};
use xrpl_types::{Address, CurrencyAmount, Hash256, LedgerIndex, PathCurrency, PathStep};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RipplePathFindRequestParams {
    pub source_account: Address,
    pub destination_account: Address,
    /// What the destination should receive.
    pub destination_amount: CurrencyAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub send_max: Option<CurrencyAmount>,
    /// Currencies the source is willing to spend; at most 18.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub source_currencies: Vec<PathCurrency>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ledger_hash: Option<Hash256>,
    #[serde(default)]
    pub ledger_index: LedgerIndex,
}

impl RipplePathFindRequestParams {
    pub fn new(
        source_account: Address,
        destination_account: Address,
        destination_amount: CurrencyAmount,
    ) -> Self {
        Self {
            source_account,
            destination_account,
            destination_amount,
            send_max: None,
            source_currencies: Vec::new(),
            ledger_hash: None,
            ledger_index: LedgerIndex::Current,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RipplePathFindResult {
    pub alternatives: Vec<PathAlternative>,
    pub destination_account: Address,
    /// Currencies the destination accepts.
    #[serde(default)]
    pub destination_currencies: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// One way to deliver the requested amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathAlternative {
    /// Ready to use as a payment's `Paths`.
    pub paths_computed: Vec<Vec<PathStep>>,
    /// What the source would spend.
    pub source_amount: CurrencyAmount,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_amount: Option<CurrencyAmount>,
}
