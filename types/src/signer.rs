//! Signer list entries.

use crate::address::Address;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A weighted signer in a multi-signing list.
///
/// On the wire each entry is wrapped: `{"SignerEntry": {"Account": .., "SignerWeight": ..}}`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SignerEntry {
    pub account: Address,
    pub signer_weight: u16,
}

impl SignerEntry {
    pub fn new(account: Address, signer_weight: u16) -> Self {
        Self {
            account,
            signer_weight,
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct EntryBody {
    account: Address,
    signer_weight: u16,
}

#[derive(Serialize, Deserialize)]
struct Wrapped {
    #[serde(rename = "SignerEntry")]
    entry: EntryBody,
}

impl Serialize for SignerEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Wrapped {
            entry: EntryBody {
                account: self.account.clone(),
                signer_weight: self.signer_weight,
            },
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for SignerEntry {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Wrapped { entry } = Wrapped::deserialize(deserializer)?;
        Ok(Self {
            account: entry.account,
            signer_weight: entry.signer_weight,
        })
    }
}
