//! Public key and signature blobs as they appear in transactions.
//!
//! These are opaque to this crate: no curve arithmetic happens here, key material
//! belongs to the signer collaborator.

use crate::error::{decode_hex, FormatError};
use std::fmt;
use std::str::FromStr;

/// Compressed secp256k1 keys and `0xED`-prefixed Ed25519 keys are both 33 bytes.
pub const PUBLIC_KEY_LEN: usize = 33;

/// A signing public key, or the empty placeholder used by multi-signed transactions.
#[derive(Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PublicKey(Vec<u8>);

impl PublicKey {
    /// The empty key a multi-signed transaction carries in `SigningPubKey`.
    pub const fn multisign_placeholder() -> Self {
        Self(Vec::new())
    }

    pub fn from_hex(value: &str) -> Result<Self, FormatError> {
        let bytes = decode_hex("public key", value)?;
        Self::from_bytes(bytes)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, FormatError> {
        if !bytes.is_empty() && bytes.len() != PUBLIC_KEY_LEN {
            return Err(FormatError::WrongLength {
                kind: "public key",
                expected: PUBLIC_KEY_LEN,
                actual: bytes.len(),
            });
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for PublicKey {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({})", hex::encode_upper(&self.0))
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}

/// A DER or raw signature, always non-empty.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Signature(Vec<u8>);

impl Signature {
    pub fn from_hex(value: &str) -> Result<Self, FormatError> {
        if value.is_empty() {
            return Err(FormatError::Empty { kind: "signature" });
        }
        decode_hex("signature", value).map(Self)
    }

    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, FormatError> {
        if bytes.is_empty() {
            return Err(FormatError::Empty { kind: "signature" });
        }
        Ok(Self(bytes))
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Signature {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl fmt::Debug for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = &self.0[..self.0.len().min(8)];
        write!(f, "Signature({}..)", hex::encode_upper(head))
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode_upper(&self.0))
    }
}
