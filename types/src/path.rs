//! Payment path elements.

use crate::address::Address;
use serde::{Deserialize, Serialize};

/// One hop of a payment path: an account to ripple through, or an order book
/// identified by currency and issuer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account: Option<Address>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Address>,
    /// Legacy bitmask of which fields are present, echoed by some nodes.
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub step_type: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_hex: Option<String>,
}

impl PathStep {
    pub fn account(account: Address) -> Self {
        Self {
            account: Some(account),
            ..Self::default()
        }
    }

    pub fn book(currency: impl Into<String>, issuer: Option<Address>) -> Self {
        Self {
            currency: Some(currency.into()),
            issuer,
            ..Self::default()
        }
    }
}

/// A currency (and optional issuer) as listed by path finding.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathCurrency {
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issuer: Option<Address>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn step_omits_absent_fields() {
        let issuer = Address::of("rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh").unwrap();
        let step = PathStep::book("USD", Some(issuer));
        assert_eq!(
            serde_json::to_value(&step).unwrap(),
            json!({"currency": "USD", "issuer": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh"})
        );
    }

    #[test]
    fn step_decodes_node_echo() {
        let doc = json!({
            "account": "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn",
            "type": 1,
            "type_hex": "0000000000000001"
        });
        let step: PathStep = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(step.step_type, Some(1));
        assert_eq!(serde_json::to_value(&step).unwrap(), doc);
    }

    #[test]
    fn currency_without_issuer() {
        let doc = json!({"currency": "XRP"});
        let currency: PathCurrency = serde_json::from_value(doc.clone()).unwrap();
        assert!(currency.issuer.is_none());
        assert_eq!(serde_json::to_value(&currency).unwrap(), doc);
    }
}
