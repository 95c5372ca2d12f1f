//! Ledger objects as returned by `account_info`, `account_objects` and `ledger_entry`.
//!
//! Each object kind always carries its fixed `LedgerEntryType`; [`LedgerObject`] decodes
//! a heterogeneous list by reading that discriminator first.

mod entry_type;

pub mod account_root;
pub mod deposit_preauth;
pub mod escrow;
pub mod offer;
pub mod pay_channel;
pub mod signer_list;

pub use account_root::AccountRootObject;
pub use deposit_preauth::DepositPreAuthObject;
pub use entry_type::{
    AccountRootType, DepositPreauthType, EscrowType, LedgerEntryType, NoFlags, OfferType,
    PayChannelType, SignerListType,
};
pub use escrow::EscrowObject;
pub use offer::OfferObject;
pub use pay_channel::PayChannelObject;
pub use signer_list::SignerListObject;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use xrpl_types::Hash256;

/// Any supported ledger object.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerObject {
    AccountRoot(AccountRootObject),
    Offer(OfferObject),
    DepositPreauth(DepositPreAuthObject),
    SignerList(SignerListObject),
    Escrow(EscrowObject),
    PayChannel(PayChannelObject),
}

impl LedgerObject {
    pub fn ledger_entry_type(&self) -> LedgerEntryType {
        match self {
            Self::AccountRoot(_) => LedgerEntryType::AccountRoot,
            Self::Offer(_) => LedgerEntryType::Offer,
            Self::DepositPreauth(_) => LedgerEntryType::DepositPreauth,
            Self::SignerList(_) => LedgerEntryType::SignerList,
            Self::Escrow(_) => LedgerEntryType::Escrow,
            Self::PayChannel(_) => LedgerEntryType::PayChannel,
        }
    }

    pub fn index(&self) -> &Hash256 {
        match self {
            Self::AccountRoot(object) => &object.index,
            Self::Offer(object) => &object.index,
            Self::DepositPreauth(object) => &object.index,
            Self::SignerList(object) => &object.index,
            Self::Escrow(object) => &object.index,
            Self::PayChannel(object) => &object.index,
        }
    }
}

impl Serialize for LedgerObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::AccountRoot(object) => object.serialize(serializer),
            Self::Offer(object) => object.serialize(serializer),
            Self::DepositPreauth(object) => object.serialize(serializer),
            Self::SignerList(object) => object.serialize(serializer),
            Self::Escrow(object) => object.serialize(serializer),
            Self::PayChannel(object) => object.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for LedgerObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        use serde::de::Error;

        let value = serde_json::Value::deserialize(deserializer)?;
        let tag = value
            .get("LedgerEntryType")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| D::Error::missing_field("LedgerEntryType"))?;
        let kind = LedgerEntryType::of(tag)
            .ok_or_else(|| D::Error::custom(format!("unsupported LedgerEntryType {tag:?}")))?;

        fn decode<T: serde::de::DeserializeOwned, E: Error>(value: serde_json::Value) -> Result<T, E> {
            serde_json::from_value(value).map_err(E::custom)
        }

        Ok(match kind {
            LedgerEntryType::AccountRoot => Self::AccountRoot(decode(value)?),
            LedgerEntryType::Offer => Self::Offer(decode(value)?),
            LedgerEntryType::DepositPreauth => Self::DepositPreauth(decode(value)?),
            LedgerEntryType::SignerList => Self::SignerList(decode(value)?),
            LedgerEntryType::Escrow => Self::Escrow(decode(value)?),
            LedgerEntryType::PayChannel => Self::PayChannel(decode(value)?),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn preauth() -> serde_json::Value {
        json!({
            "Account": "rf1BiGeXwwQoi8Z2ueFYTEXSwuJYfV2Jpn",
            "Authorize": "rAR8rR8sUkBoCZFawhkWzY4Y5YoyuznwD",
            "Flags": 0,
            "LedgerEntryType": "DepositPreauth",
            "OwnerNode": "0",
            "PreviousTxnID": "3E8964D5A86B3CD6B9ECB33310D4E073D64C865A5B866200AD2B7E29F8326702",
            "PreviousTxnLgrSeq": 7,
            "index": "4A255038CC3ADCC1A9C91509279B59908251728D0DAADB248FFE297D0F7E068C"
        })
    }

    #[test]
    fn dispatches_on_entry_type() {
        let object: LedgerObject = serde_json::from_value(preauth()).unwrap();
        assert_eq!(object.ledger_entry_type(), LedgerEntryType::DepositPreauth);
        assert_eq!(
            object.index().to_string(),
            "4A255038CC3ADCC1A9C91509279B59908251728D0DAADB248FFE297D0F7E068C"
        );
        assert_eq!(serde_json::to_value(&object).unwrap(), preauth());
    }

    #[test]
    fn unknown_or_missing_entry_type_is_error() {
        let mut doc = preauth();
        doc["LedgerEntryType"] = json!("RippleState");
        assert!(serde_json::from_value::<LedgerObject>(doc.clone()).is_err());

        doc.as_object_mut().unwrap().remove("LedgerEntryType");
        assert!(serde_json::from_value::<LedgerObject>(doc).is_err());
    }

    #[test]
    fn heterogeneous_list() {
        let offer = json!({
            "Account": "rHb9CJAWyB4rj91VRWn96DkukG4bwdtyTh",
            "BookDirectory": "ACC27DE91DBA86FC509069EAF4BC511D73128B780F2E54BF5E07A369E2446000",
            "BookNode": "0000000000000000",
            "Flags": 0,
            "LedgerEntryType": "Offer",
            "OwnerNode": "0000000000000000",
            "PreviousTxnID": "F0AB71E777B2DA54B86231E19B82554EF1F8211F92ECA473121C655BFC5329BF",
            "PreviousTxnLgrSeq": 14524914,
            "Sequence": 866,
            "TakerGets": "1000",
            "TakerPays": "2000",
            "index": "96F76F27D8A327FC48753167EC04A46AA0E382E6F57F32FD12274144D00F1797"
        });
        let list: Vec<LedgerObject> = serde_json::from_value(json!([preauth(), offer])).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[1].ledger_entry_type(), LedgerEntryType::Offer);
    }
}
