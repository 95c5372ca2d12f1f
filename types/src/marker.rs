//! Opaque pagination cursor returned by list-style RPC methods.

use std::fmt;

/// Passed back verbatim to fetch the next page. Nodes sometimes send a structured
/// JSON value instead of a string; the codec folds those into their compact text.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Marker(String);

impl Marker {
    pub fn of(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
