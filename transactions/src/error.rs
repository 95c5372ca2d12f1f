use crate::TransactionType;
use thiserror::Error;
use xrpl_types::{ArithmeticOverflow, FormatError, XrpCurrencyAmount};

#[derive(Debug, Error)]
pub enum TransactionError {
    #[error("FinishAfter ({finish_after}) must be earlier than CancelAfter ({cancel_after})")]
    InvalidTemporalOrdering { finish_after: u32, cancel_after: u32 },

    #[error("{present} requires {missing}")]
    MissingCorrelatedField {
        present: &'static str,
        missing: &'static str,
    },

    #[error("fee of {actual} drops is below the required {required} drops")]
    InsufficientFee {
        required: XrpCurrencyAmount,
        actual: XrpCurrencyAmount,
    },

    #[error("flags {first} and {second} are mutually exclusive")]
    ConflictingFlags {
        first: &'static str,
        second: &'static str,
    },

    #[error("exactly one of {first} or {second} must be present")]
    ExactlyOneRequired {
        first: &'static str,
        second: &'static str,
    },

    #[error("invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("expected a {expected} transaction, got {actual}")]
    WrongVariant {
        expected: TransactionType,
        actual: TransactionType,
    },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Overflow(#[from] ArithmeticOverflow),

    #[error("transaction encoding failed: {0}")]
    Encode(#[from] serde_json::Error),
}

impl TransactionError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
