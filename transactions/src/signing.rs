//! The boundary to an external signer.
//!
//! Key management and signature algorithms live outside this workspace. A [`Signer`]
//! receives the transaction, signs its canonical unsigned payload, and hands back the
//! signed transaction together with the encoded blob the node accepts.

use crate::Transaction;
use thiserror::Error;
use xrpl_types::{Hash256, PublicKey};

#[derive(Debug, Error)]
pub enum SigningError {
    #[error("key material rejected: {0}")]
    InvalidKey(String),

    #[error("signing failed: {0}")]
    Failed(String),

    #[error("cannot encode transaction for signing: {0}")]
    Encode(#[from] crate::error::TransactionError),
}

/// A transaction with its signature attached, ready for `submit`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignedTransaction {
    /// The signed transaction; its `TxnSignature` and `SigningPubKey` are set.
    pub transaction: Transaction,
    /// Hex of the canonical binary encoding, as accepted by `submit`.
    pub tx_blob: String,
    /// Identifying hash of the signed transaction.
    pub hash: Hash256,
}

/// Signs transactions with key material it alone understands.
pub trait Signer {
    type KeyMaterial;

    fn derive_public_key(&self, key: &Self::KeyMaterial) -> Result<PublicKey, SigningError>;

    fn sign(
        &self,
        transaction: &Transaction,
        key: &Self::KeyMaterial,
    ) -> Result<SignedTransaction, SigningError>;
}
