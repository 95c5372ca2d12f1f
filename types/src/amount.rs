//! Currency amounts: native XRP (in drops) and issued currencies.
//!
//! Native amounts are held as `u64` drops in memory and travel as decimal strings on
//! the wire. Issued amounts keep their decimal `value` as text, since the node's
//! issued-currency precision (16 significant digits, exponent -96..=80) does not fit
//! any primitive float.

use crate::address::Address;
use crate::error::{ArithmeticOverflow, FormatError};
use std::fmt;
use std::str::FromStr;

/// Drops per XRP.
pub const DROPS_PER_XRP: u64 = 1_000_000;

/// Total XRP supply in drops; no native amount on ledger can exceed it.
pub const MAX_XRP_DROPS: u64 = 100_000_000_000 * DROPS_PER_XRP;

/// Characters allowed in a 3-character currency code besides ASCII alphanumerics.
const CURRENCY_SYMBOLS: &str = "?!@#$%^&*<>(){}[]|";

// ── Native amounts ──────────────────────────────────────────────────────

/// A native-currency amount in drops.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct XrpCurrencyAmount(u64);

impl XrpCurrencyAmount {
    pub const ZERO: Self = Self(0);

    pub const fn of_drops(drops: u64) -> Self {
        Self(drops)
    }

    /// Parse a whole-XRP decimal string (at most 6 fractional digits) into drops.
    ///
    /// `"1.5"` is 1_500_000 drops. Conversion is exact; extra precision is an error
    /// rather than a rounding.
    pub fn of_xrp_str(value: &str) -> Result<Self, FormatError> {
        const KIND: &str = "xrp amount";
        if value.is_empty() {
            return Err(FormatError::Empty { kind: KIND });
        }
        if value.starts_with('-') {
            return Err(FormatError::Negative {
                kind: KIND,
                value: value.to_string(),
            });
        }

        let (whole, fraction) = value.split_once('.').unwrap_or((value, ""));
        if whole.is_empty() && fraction.is_empty() {
            return Err(FormatError::invalid(KIND, "no digits"));
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(FormatError::invalid(KIND, format!("not a decimal number: {value}")));
        }
        if fraction.len() > 6 {
            return Err(FormatError::invalid(
                KIND,
                format!("more than 6 fractional digits: {value}"),
            ));
        }

        let whole: u64 = if whole.is_empty() {
            0
        } else {
            whole
                .parse()
                .map_err(|_| FormatError::invalid(KIND, format!("out of range: {value}")))?
        };
        let fraction_drops: u64 = format!("{fraction:0<6}")
            .parse()
            .map_err(|_| FormatError::invalid(KIND, format!("not a decimal number: {value}")))?;

        whole
            .checked_mul(DROPS_PER_XRP)
            .and_then(|d| d.checked_add(fraction_drops))
            .map(Self)
            .ok_or_else(|| FormatError::invalid(KIND, format!("out of range: {value}")))
    }

    pub fn drops(&self) -> u64 {
        self.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Add a raw drop count, failing on wrap-around.
    pub fn checked_add(self, drops: u64) -> Result<Self, ArithmeticOverflow> {
        self.0.checked_add(drops).map(Self).ok_or(ArithmeticOverflow {
            op: '+',
            lhs: self.0,
            rhs: drops,
        })
    }

    /// Subtract a raw drop count, failing on wrap-around below zero.
    pub fn checked_sub(self, drops: u64) -> Result<Self, ArithmeticOverflow> {
        self.0.checked_sub(drops).map(Self).ok_or(ArithmeticOverflow {
            op: '-',
            lhs: self.0,
            rhs: drops,
        })
    }

    pub fn plus(self, other: Self) -> Result<Self, ArithmeticOverflow> {
        self.checked_add(other.0)
    }

    pub fn minus(self, other: Self) -> Result<Self, ArithmeticOverflow> {
        self.checked_sub(other.0)
    }

    /// Render as whole XRP with trailing fractional zeros trimmed (`"1.5"`, `"12"`).
    pub fn to_xrp_string(&self) -> String {
        let whole = self.0 / DROPS_PER_XRP;
        let fraction = self.0 % DROPS_PER_XRP;
        if fraction == 0 {
            whole.to_string()
        } else {
            let digits = format!("{fraction:06}");
            format!("{whole}.{}", digits.trim_end_matches('0'))
        }
    }
}

impl FromStr for XrpCurrencyAmount {
    type Err = FormatError;

    /// Parse a decimal drop count, as written on the wire.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const KIND: &str = "xrp amount";
        if s.is_empty() {
            return Err(FormatError::Empty { kind: KIND });
        }
        if s.starts_with('-') {
            return Err(FormatError::Negative {
                kind: KIND,
                value: s.to_string(),
            });
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FormatError::invalid(KIND, format!("not a drop count: {s}")));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| FormatError::invalid(KIND, format!("exceeds 64 bits: {s}")))
    }
}

impl From<u64> for XrpCurrencyAmount {
    fn from(drops: u64) -> Self {
        Self(drops)
    }
}

impl fmt::Display for XrpCurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Issued currencies ───────────────────────────────────────────────────

/// An amount of an issued (non-XRP) currency.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IssuedCurrencyAmount {
    currency: String,
    issuer: Address,
    value: String,
}

impl IssuedCurrencyAmount {
    pub fn new(
        currency: impl Into<String>,
        issuer: Address,
        value: impl Into<String>,
    ) -> Result<Self, FormatError> {
        let currency = currency.into();
        let value = value.into();
        validate_currency_code(&currency)?;
        validate_decimal(&value)?;
        Ok(Self {
            currency,
            issuer,
            value,
        })
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn issuer(&self) -> &Address {
        &self.issuer
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Validate a currency code: a 3-character standard code other than `XRP`, or a
/// 160-bit code written as 40 hex characters that is not all zero.
pub fn validate_currency_code(code: &str) -> Result<(), FormatError> {
    const KIND: &str = "currency code";
    match code.len() {
        0 => Err(FormatError::Empty { kind: KIND }),
        3 => {
            if code == "XRP" {
                return Err(FormatError::invalid(KIND, "XRP is reserved for the native currency"));
            }
            if code
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || CURRENCY_SYMBOLS.contains(c))
            {
                Ok(())
            } else {
                Err(FormatError::InvalidAlphabet {
                    kind: KIND,
                    value: code.to_string(),
                })
            }
        }
        40 => {
            let bytes = crate::error::decode_hex(KIND, code)?;
            if bytes.iter().all(|b| *b == 0) {
                return Err(FormatError::invalid(KIND, "all-zero code is reserved"));
            }
            Ok(())
        }
        other => Err(FormatError::WrongLength {
            kind: KIND,
            expected: 3,
            actual: other,
        }),
    }
}

/// Validate a signed decimal literal with an optional exponent (`-1.5e3`).
fn validate_decimal(value: &str) -> Result<(), FormatError> {
    const KIND: &str = "issued value";
    if value.is_empty() {
        return Err(FormatError::Empty { kind: KIND });
    }
    let unsigned = value.strip_prefix(['-', '+']).unwrap_or(value);
    let (mantissa, exponent) = match unsigned.split_once(['e', 'E']) {
        Some((m, e)) => (m, Some(e)),
        None => (unsigned, None),
    };
    let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let digits_ok = !(whole.is_empty() && fraction.is_empty())
        && whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit());
    let exponent_ok = exponent.map_or(true, |e| {
        let e = e.strip_prefix(['-', '+']).unwrap_or(e);
        !e.is_empty() && e.bytes().all(|b| b.is_ascii_digit())
    });

    if digits_ok && exponent_ok {
        Ok(())
    } else {
        Err(FormatError::invalid(KIND, format!("not a decimal number: {value}")))
    }
}

// ── Either ──────────────────────────────────────────────────────────────

/// Native or issued amount. Exactly one case is populated by construction.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum CurrencyAmount {
    Xrp(XrpCurrencyAmount),
    Issued(IssuedCurrencyAmount),
}

impl CurrencyAmount {
    pub fn is_xrp(&self) -> bool {
        matches!(self, Self::Xrp(_))
    }

    pub fn as_xrp(&self) -> Option<XrpCurrencyAmount> {
        match self {
            Self::Xrp(drops) => Some(*drops),
            Self::Issued(_) => None,
        }
    }

    pub fn as_issued(&self) -> Option<&IssuedCurrencyAmount> {
        match self {
            Self::Xrp(_) => None,
            Self::Issued(issued) => Some(issued),
        }
    }
}

impl From<XrpCurrencyAmount> for CurrencyAmount {
    fn from(value: XrpCurrencyAmount) -> Self {
        Self::Xrp(value)
    }
}

impl From<IssuedCurrencyAmount> for CurrencyAmount {
    fn from(value: IssuedCurrencyAmount) -> Self {
        Self::Issued(value)
    }
}
