//! Ledger selectors: a concrete sequence number or one of the node's shortcuts.

use crate::error::FormatError;
use std::fmt;
use std::str::FromStr;

/// Sequences order numerically and sort before the shortcuts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LedgerIndex {
    Sequence(u32),
    /// The open ledger being built.
    Current,
    /// The most recently closed ledger, possibly not yet validated.
    Closed,
    /// The most recent ledger validated by consensus.
    Validated,
}

impl LedgerIndex {
    pub const CURRENT: &'static str = "current";
    pub const CLOSED: &'static str = "closed";
    pub const VALIDATED: &'static str = "validated";

    /// Parse integer text or one of the shortcut keywords.
    pub fn of(value: &str) -> Result<Self, FormatError> {
        match value {
            "" => Err(FormatError::Empty {
                kind: "ledger index",
            }),
            Self::CURRENT => Ok(Self::Current),
            Self::CLOSED => Ok(Self::Closed),
            Self::VALIDATED => Ok(Self::Validated),
            other if other.bytes().all(|b| b.is_ascii_digit()) => other
                .parse()
                .map(Self::Sequence)
                .map_err(|_| FormatError::invalid("ledger index", format!("out of range: {other}"))),
            other => Err(FormatError::invalid(
                "ledger index",
                format!("expected a sequence number or current|closed|validated, got {other:?}"),
            )),
        }
    }

    /// The sequence number, when this is not a shortcut.
    pub fn sequence(&self) -> Option<u32> {
        match self {
            Self::Sequence(seq) => Some(*seq),
            _ => None,
        }
    }

    pub fn is_shortcut(&self) -> bool {
        self.sequence().is_none()
    }
}

impl Default for LedgerIndex {
    fn default() -> Self {
        Self::Current
    }
}

impl From<u32> for LedgerIndex {
    fn from(seq: u32) -> Self {
        Self::Sequence(seq)
    }
}

impl FromStr for LedgerIndex {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl fmt::Display for LedgerIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Sequence(seq) => write!(f, "{seq}"),
            Self::Current => f.write_str(Self::CURRENT),
            Self::Closed => f.write_str(Self::CLOSED),
            Self::Validated => f.write_str(Self::VALIDATED),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequences_order_numerically() {
        assert!(LedgerIndex::Sequence(9) < LedgerIndex::Sequence(10));
        assert!(LedgerIndex::Sequence(u32::MAX) < LedgerIndex::Current);

        let mut indexes = vec![
            LedgerIndex::Validated,
            LedgerIndex::Sequence(300),
            LedgerIndex::Current,
            LedgerIndex::Sequence(20),
        ];
        indexes.sort();
        assert_eq!(
            indexes,
            [
                LedgerIndex::Sequence(20),
                LedgerIndex::Sequence(300),
                LedgerIndex::Current,
                LedgerIndex::Validated
            ]
        );
    }

    #[test]
    fn parses_numbers_and_keywords() {
        assert_eq!(LedgerIndex::of("1234").unwrap(), LedgerIndex::Sequence(1234));
        assert_eq!(LedgerIndex::of("current").unwrap(), LedgerIndex::Current);
        assert_eq!(LedgerIndex::of("closed").unwrap(), LedgerIndex::Closed);
        assert_eq!(LedgerIndex::of("validated").unwrap(), LedgerIndex::Validated);
    }

    #[test]
    fn rejects_other_text() {
        assert!(LedgerIndex::of("").is_err());
        assert!(LedgerIndex::of("latest").is_err());
        assert!(LedgerIndex::of("-5").is_err());
        assert!(LedgerIndex::of("4294967296").is_err());
    }

    #[test]
    fn sequence_accessor() {
        assert_eq!(LedgerIndex::Sequence(7).sequence(), Some(7));
        assert_eq!(LedgerIndex::Validated.sequence(), None);
        assert!(LedgerIndex::Closed.is_shortcut());
    }

    #[test]
    fn display_matches_input() {
        for text in ["42", "current", "closed", "validated"] {
            assert_eq!(LedgerIndex::of(text).unwrap().to_string(), text);
        }
    }
}
