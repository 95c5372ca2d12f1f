//! Error types for primitive construction and amount arithmetic.

use thiserror::Error;

/// A primitive literal did not satisfy its type's constraints.
///
/// `kind` names the type being constructed (e.g. `"address"`, `"hash256"`), so a
/// caller can build a user-facing message without string matching.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("{kind} must not be empty")]
    Empty { kind: &'static str },

    #[error("{kind} has wrong length: expected {expected}, got {actual}")]
    WrongLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{kind} contains non-hex characters: {value}")]
    NonHex { kind: &'static str, value: String },

    #[error("{kind} contains characters outside its alphabet: {value}")]
    InvalidAlphabet { kind: &'static str, value: String },

    #[error("{kind} has an invalid checksum: {value}")]
    InvalidChecksum { kind: &'static str, value: String },

    #[error("{kind} must not be negative: {value}")]
    Negative { kind: &'static str, value: String },

    #[error("invalid {kind}: {reason}")]
    Invalid { kind: &'static str, reason: String },
}

impl FormatError {
    pub(crate) fn invalid(kind: &'static str, reason: impl Into<String>) -> Self {
        Self::Invalid {
            kind,
            reason: reason.into(),
        }
    }
}

/// Drop arithmetic left the unsigned 64-bit range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("arithmetic overflow: {lhs} {op} {rhs} drops")]
pub struct ArithmeticOverflow {
    pub op: char,
    pub lhs: u64,
    pub rhs: u64,
}

/// Decode a hex string into bytes, mapping failures to [`FormatError::NonHex`].
pub(crate) fn decode_hex(kind: &'static str, value: &str) -> Result<Vec<u8>, FormatError> {
    if value.len() % 2 != 0 || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(FormatError::NonHex {
            kind,
            value: value.to_string(),
        });
    }
    hex::decode(value).map_err(|_| FormatError::NonHex {
        kind,
        value: value.to_string(),
    })
}
