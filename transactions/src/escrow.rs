//! Escrow transactions: lock XRP until a time or a crypto-condition, then release or
//! return it.

use crate::common::TransactionCommon;
use crate::condition::{Condition, Fulfillment};
use crate::error::TransactionError;
use crate::validation::{validate_escrow_cancel, validate_escrow_create, validate_escrow_finish};
use serde::{Deserialize, Serialize};
use xrpl_types::{Address, ArithmeticOverflow, TransactionFlags, XrpCurrencyAmount};

/// Flat surcharge the node charges for evaluating a fulfillment.
const FULFILLMENT_BASE_SURCHARGE: u64 = 320;
/// Drops per whole 16 bytes of preimage; a partial chunk is free.
const FULFILLMENT_DROPS_PER_CHUNK: u64 = 10;
const FULFILLMENT_CHUNK_BYTES: u64 = 16;

// ── EscrowCreate ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EscrowCreateFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: TransactionFlags,
    pub amount: XrpCurrencyAmount,
    pub destination: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub destination_tag: Option<u32>,
    /// Seconds since the ripple epoch after which the escrow expires.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cancel_after: Option<u32>,
    /// Seconds since the ripple epoch after which the escrow can be finished.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_after: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
}

impl EscrowCreateFields {
    pub fn new(common: TransactionCommon, amount: XrpCurrencyAmount, destination: Address) -> Self {
        Self {
            common,
            flags: TransactionFlags::UNSET,
            amount,
            destination,
            destination_tag: None,
            cancel_after: None,
            finish_after: None,
            condition: None,
        }
    }
}

transaction_variant! {
    /// A validated EscrowCreate.
    EscrowCreate(EscrowCreateFields) => validate_escrow_create
}

// ── EscrowFinish ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EscrowFinishFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: TransactionFlags,
    /// Account that created the escrow.
    pub owner: Address,
    /// Sequence of the EscrowCreate that created the escrow.
    pub offer_sequence: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<Condition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fulfillment: Option<Fulfillment>,
}

impl EscrowFinishFields {
    pub fn new(common: TransactionCommon, owner: Address, offer_sequence: u32) -> Self {
        Self {
            common,
            flags: TransactionFlags::UNSET,
            owner,
            offer_sequence,
            condition: None,
            fulfillment: None,
        }
    }

    /// Attach a fulfillment together with the condition it satisfies.
    pub fn with_fulfillment(mut self, fulfillment: Fulfillment) -> Self {
        self.condition = Some(fulfillment.derived_condition());
        self.fulfillment = Some(fulfillment);
        self
    }

    /// Check that the fulfillment satisfies the declared condition.
    ///
    /// Not part of construction: the ledger records mismatched pairs as
    /// `tecCRYPTOCONDITION_ERROR`, and those documents still have to decode.
    pub fn verify_fulfillment(&self) -> Result<(), TransactionError> {
        match (&self.condition, &self.fulfillment) {
            (Some(condition), Some(fulfillment)) if fulfillment.derived_condition() != *condition => {
                Err(TransactionError::invalid(
                    "Fulfillment",
                    "does not satisfy the declared condition",
                ))
            }
            _ => Ok(()),
        }
    }
}

transaction_variant! {
    /// A validated EscrowFinish.
    EscrowFinish(EscrowFinishFields) => validate_escrow_finish
}

impl EscrowFinish {
    /// Fee the node charges to finish an escrow with `fulfillment`:
    /// `base + 320 + 10 * floor(cost / 16)` drops.
    pub fn compute_fee(
        base: XrpCurrencyAmount,
        fulfillment: &Fulfillment,
    ) -> Result<XrpCurrencyAmount, ArithmeticOverflow> {
        let chunks = fulfillment.derived_condition().cost() / FULFILLMENT_CHUNK_BYTES;
        let per_chunk = FULFILLMENT_DROPS_PER_CHUNK
            .checked_mul(chunks)
            .ok_or(ArithmeticOverflow {
                op: '*',
                lhs: FULFILLMENT_DROPS_PER_CHUNK,
                rhs: chunks,
            })?;
        base.checked_add(FULFILLMENT_BASE_SURCHARGE)?
            .checked_add(per_chunk)
    }
}

// ── EscrowCancel ────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EscrowCancelFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: TransactionFlags,
    pub owner: Address,
    pub offer_sequence: u32,
}

impl EscrowCancelFields {
    pub fn new(common: TransactionCommon, owner: Address, offer_sequence: u32) -> Self {
        Self {
            common,
            flags: TransactionFlags::UNSET,
            owner,
            offer_sequence,
        }
    }
}

transaction_variant! {
    /// A validated EscrowCancel.
    EscrowCancel(EscrowCancelFields) => validate_escrow_cancel
}
