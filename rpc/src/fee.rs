//! `fee`: the current transaction cost and queue state.

use serde::{Deserialize, Serialize};
use xrpl_types::codec::u64_string;
use xrpl_types::{LedgerIndex, XrpCurrencyAmount};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeResult {
    #[serde(with = "u64_string")]
    pub current_ledger_size: u64,
    #[serde(with = "u64_string")]
    pub current_queue_size: u64,
    pub drops: FeeDrops,
    #[serde(with = "u64_string")]
    pub expected_ledger_size: u64,
    pub ledger_current_index: LedgerIndex,
    pub levels: FeeLevels,
    #[serde(with = "u64_string")]
    pub max_queue_size: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Costs in drops.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeDrops {
    /// Cost of the reference transaction at zero load.
    pub base_fee: XrpCurrencyAmount,
    pub median_fee: XrpCurrencyAmount,
    /// Lowest cost that still gets into the queue.
    pub minimum_fee: XrpCurrencyAmount,
    /// Lowest cost that gets into the open ledger right now.
    pub open_ledger_fee: XrpCurrencyAmount,
}

/// Costs in fee levels, where 256 is the reference cost.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeLevels {
    #[serde(with = "u64_string")]
    pub median_level: u64,
    #[serde(with = "u64_string")]
    pub minimum_level: u64,
    #[serde(with = "u64_string")]
    pub open_ledger_level: u64,
    #[serde(with = "u64_string")]
    pub reference_level: u64,
}
