//! Construction-time validation, one function per transaction kind.
//!
//! These are stateless checks on the transaction's own fields. Anything that depends
//! on ledger state (balances, reserves, existing objects) is the node's job.

use crate::account_set::AccountSetFields;
use crate::deposit_preauth::DepositPreAuthFields;
use crate::error::TransactionError;
use crate::escrow::{EscrowCancelFields, EscrowCreateFields, EscrowFinishFields};
use crate::offer::{OfferCancelFields, OfferCreateFields};
use crate::payment::PaymentFields;
use crate::payment_channel::{
    PaymentChannelClaimFields, PaymentChannelCreateFields, PaymentChannelFundFields,
};
use crate::set_regular_key::SetRegularKeyFields;
use crate::signer_list_set::{SignerListSetFields, MAX_SIGNER_ENTRIES};
use crate::trust_set::TrustSetFields;
use std::collections::BTreeSet;
use xrpl_types::{CurrencyAmount, PaymentFlags, XrpCurrencyAmount};

/// Minimum fee for an EscrowFinish that carries a fulfillment.
pub const ESCROW_FINISH_MIN_FEE: XrpCurrencyAmount = XrpCurrencyAmount::of_drops(330);

/// Smallest non-zero `TransferRate` (no fee); 2_000_000_000 is a 100% fee.
const TRANSFER_RATE_MIN: u32 = 1_000_000_000;
const TRANSFER_RATE_MAX: u32 = 2_000_000_000;

fn conflicting(conflict: Option<(&'static str, &'static str)>) -> Result<(), TransactionError> {
    match conflict {
        Some((first, second)) => Err(TransactionError::ConflictingFlags { first, second }),
        None => Ok(()),
    }
}

fn non_zero(field: &'static str, amount: XrpCurrencyAmount) -> Result<(), TransactionError> {
    if amount.is_zero() {
        return Err(TransactionError::invalid(field, "must be greater than zero"));
    }
    Ok(())
}

fn hex_field(field: &'static str, value: &str) -> Result<(), TransactionError> {
    if value.len() % 2 != 0 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(TransactionError::invalid(field, format!("not hex: {value}")));
    }
    Ok(())
}

pub fn validate_payment(tx: &PaymentFields) -> Result<(), TransactionError> {
    if tx.deliver_min.is_some() && !tx.flags.is_set(PaymentFlags::PARTIAL_PAYMENT) {
        return Err(TransactionError::MissingCorrelatedField {
            present: "DeliverMin",
            missing: "tfPartialPayment",
        });
    }
    let xrp_to_xrp = matches!(tx.amount, CurrencyAmount::Xrp(_)) && tx.send_max.is_none();
    if xrp_to_xrp && !tx.paths.is_empty() {
        return Err(TransactionError::invalid(
            "Paths",
            "an XRP-to-XRP payment cannot specify paths",
        ));
    }
    Ok(())
}

pub fn validate_account_set(tx: &AccountSetFields) -> Result<(), TransactionError> {
    if let (Some(set), Some(clear)) = (tx.set_flag, tx.clear_flag) {
        if set == clear {
            return Err(TransactionError::invalid(
                "ClearFlag",
                format!("{set:?} cannot be set and cleared in the same transaction"),
            ));
        }
    }
    if let Some(rate) = tx.transfer_rate {
        if rate != 0 && !(TRANSFER_RATE_MIN..=TRANSFER_RATE_MAX).contains(&rate) {
            return Err(TransactionError::invalid(
                "TransferRate",
                format!("{rate} is neither 0 nor within {TRANSFER_RATE_MIN}..={TRANSFER_RATE_MAX}"),
            ));
        }
    }
    if let Some(tick) = tx.tick_size {
        if tick != 0 && !(3..=15).contains(&tick) {
            return Err(TransactionError::invalid(
                "TickSize",
                format!("{tick} is neither 0 nor within 3..=15"),
            ));
        }
    }
    if let Some(hash) = &tx.email_hash {
        hex_field("EmailHash", hash)?;
        if hash.len() != 32 {
            return Err(TransactionError::invalid(
                "EmailHash",
                format!("expected 32 hex characters, got {}", hash.len()),
            ));
        }
    }
    if let Some(domain) = &tx.domain {
        hex_field("Domain", domain)?;
    }
    if let Some(key) = &tx.message_key {
        hex_field("MessageKey", key)?;
    }
    Ok(())
}

pub fn validate_set_regular_key(_tx: &SetRegularKeyFields) -> Result<(), TransactionError> {
    Ok(())
}

pub fn validate_escrow_create(tx: &EscrowCreateFields) -> Result<(), TransactionError> {
    non_zero("Amount", tx.amount)?;
    if let (Some(finish_after), Some(cancel_after)) = (tx.finish_after, tx.cancel_after) {
        if finish_after >= cancel_after {
            return Err(TransactionError::InvalidTemporalOrdering {
                finish_after,
                cancel_after,
            });
        }
    }
    Ok(())
}

pub fn validate_escrow_finish(tx: &EscrowFinishFields) -> Result<(), TransactionError> {
    match (&tx.condition, &tx.fulfillment) {
        (None, None) => Ok(()),
        (None, Some(_)) => Err(TransactionError::MissingCorrelatedField {
            present: "Fulfillment",
            missing: "Condition",
        }),
        (Some(_), None) => Err(TransactionError::MissingCorrelatedField {
            present: "Condition",
            missing: "Fulfillment",
        }),
        (Some(_), Some(_)) => {
            if tx.common.fee < ESCROW_FINISH_MIN_FEE {
                return Err(TransactionError::InsufficientFee {
                    required: ESCROW_FINISH_MIN_FEE,
                    actual: tx.common.fee,
                });
            }
            Ok(())
        }
    }
}

pub fn validate_escrow_cancel(_tx: &EscrowCancelFields) -> Result<(), TransactionError> {
    Ok(())
}

pub fn validate_offer_create(tx: &OfferCreateFields) -> Result<(), TransactionError> {
    conflicting(tx.flags.conflict())
}

pub fn validate_offer_cancel(_tx: &OfferCancelFields) -> Result<(), TransactionError> {
    Ok(())
}

pub fn validate_payment_channel_create(
    tx: &PaymentChannelCreateFields,
) -> Result<(), TransactionError> {
    non_zero("Amount", tx.amount)?;
    if tx.public_key.is_placeholder() {
        return Err(TransactionError::invalid(
            "PublicKey",
            "a channel needs the key that will sign claims",
        ));
    }
    Ok(())
}

pub fn validate_payment_channel_fund(
    tx: &PaymentChannelFundFields,
) -> Result<(), TransactionError> {
    non_zero("Amount", tx.amount)
}

pub fn validate_payment_channel_claim(
    tx: &PaymentChannelClaimFields,
) -> Result<(), TransactionError> {
    conflicting(tx.flags.conflict())?;
    if tx.signature.is_some() {
        if tx.public_key.is_none() {
            return Err(TransactionError::MissingCorrelatedField {
                present: "Signature",
                missing: "PublicKey",
            });
        }
        if tx.balance.is_none() {
            return Err(TransactionError::MissingCorrelatedField {
                present: "Signature",
                missing: "Balance",
            });
        }
    }
    Ok(())
}

pub fn validate_deposit_preauth(tx: &DepositPreAuthFields) -> Result<(), TransactionError> {
    match (&tx.authorize, &tx.unauthorize) {
        (Some(_), None) | (None, Some(_)) => Ok(()),
        _ => Err(TransactionError::ExactlyOneRequired {
            first: "Authorize",
            second: "Unauthorize",
        }),
    }
}

pub fn validate_trust_set(tx: &TrustSetFields) -> Result<(), TransactionError> {
    conflicting(tx.flags.conflict())
}

pub fn validate_signer_list_set(tx: &SignerListSetFields) -> Result<(), TransactionError> {
    if tx.signer_quorum == 0 {
        if !tx.signer_entries.is_empty() {
            return Err(TransactionError::invalid(
                "SignerEntries",
                "must be empty when SignerQuorum is 0 (list deletion)",
            ));
        }
        return Ok(());
    }

    if tx.signer_entries.is_empty() || tx.signer_entries.len() > MAX_SIGNER_ENTRIES {
        return Err(TransactionError::invalid(
            "SignerEntries",
            format!(
                "expected 1..={MAX_SIGNER_ENTRIES} entries, got {}",
                tx.signer_entries.len()
            ),
        ));
    }

    let mut seen = BTreeSet::new();
    let mut total_weight: u32 = 0;
    for entry in &tx.signer_entries {
        if entry.account == tx.common.account {
            return Err(TransactionError::invalid(
                "SignerEntries",
                "the list owner cannot be one of its signers",
            ));
        }
        if !seen.insert(&entry.account) {
            return Err(TransactionError::invalid(
                "SignerEntries",
                format!("duplicate signer {}", entry.account),
            ));
        }
        total_weight += u32::from(entry.signer_weight);
    }

    if total_weight < tx.signer_quorum {
        return Err(TransactionError::invalid(
            "SignerQuorum",
            format!(
                "quorum {} exceeds total signer weight {total_weight}",
                tx.signer_quorum
            ),
        ));
    }
    Ok(())
}
