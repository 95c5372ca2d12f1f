//! Nullable signer: deterministic keys and signatures without real cryptography.
//!
//! Keys and signatures are SHA-256 digests of a seed and the payload. They look like
//! the real thing on the wire but only [`SimulatedNode`](crate::SimulatedNode) accepts
//! them. The "blob" is the hex of the signed transaction's JSON, so the simulated node
//! can decode it back.

use sha2::{Digest, Sha256};
use xrpl_transactions::{SignedTransaction, Signer, SigningError, Transaction};
use xrpl_types::{Address, Hash256, PublicKey, Signature};

/// Key material for [`NullSigner`]: any non-empty seed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NullKey {
    seed: String,
}

impl NullKey {
    pub fn new(seed: impl Into<String>) -> Self {
        Self { seed: seed.into() }
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }

    /// 33-byte key: an `ED` prefix followed by the seed's digest.
    pub fn public_key(&self) -> Result<PublicKey, SigningError> {
        if self.seed.is_empty() {
            return Err(SigningError::InvalidKey("empty seed".into()));
        }
        let mut bytes = Vec::with_capacity(33);
        bytes.push(0xED);
        bytes.extend_from_slice(&Sha256::digest(self.seed.as_bytes()));
        PublicKey::from_bytes(bytes).map_err(|e| SigningError::InvalidKey(e.to_string()))
    }

    /// The account this key controls.
    pub fn address(&self) -> Result<Address, SigningError> {
        let public_key = self.public_key()?;
        let digest = Sha256::digest(public_key.as_bytes());
        let mut account_id = [0u8; 20];
        account_id.copy_from_slice(&digest[..20]);
        Ok(Address::from_account_id(account_id))
    }
}

/// Identifying hash of a blob produced by [`NullSigner`].
pub fn blob_hash(blob: &[u8]) -> Hash256 {
    let mut hasher = Sha256::new();
    hasher.update(b"TXN\0");
    hasher.update(blob);
    Hash256::new(hasher.finalize().into())
}

#[derive(Clone, Copy, Debug, Default)]
pub struct NullSigner;

impl Signer for NullSigner {
    type KeyMaterial = NullKey;

    fn derive_public_key(&self, key: &NullKey) -> Result<PublicKey, SigningError> {
        key.public_key()
    }

    fn sign(&self, transaction: &Transaction, key: &NullKey) -> Result<SignedTransaction, SigningError> {
        let unsigned = transaction.with_signing_key(key.public_key()?);
        let mut payload = unsigned.unsigned_payload()?;
        let payload_bytes =
            serde_json::to_vec(&payload).map_err(|e| SigningError::Failed(e.to_string()))?;

        let mut signature = Vec::with_capacity(64);
        signature.extend_from_slice(&Sha256::digest([key.seed.as_bytes(), &payload_bytes[..]].concat()));
        signature.extend_from_slice(&Sha256::digest([&payload_bytes[..], key.seed.as_bytes()].concat()));
        let signature =
            Signature::from_bytes(signature).map_err(|e| SigningError::Failed(e.to_string()))?;

        payload["TxnSignature"] = serde_json::Value::String(signature.to_string());
        let blob = serde_json::to_vec(&payload).map_err(|e| SigningError::Failed(e.to_string()))?;
        let hash = blob_hash(&blob);

        Ok(SignedTransaction {
            transaction: unsigned.with_signature(signature).with_hash(hash),
            tx_blob: hex::encode_upper(&blob),
            hash,
        })
    }
}
