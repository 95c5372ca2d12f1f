//! SignerListSet: create, replace or delete an account's multi-signing list.

use crate::common::TransactionCommon;
use crate::validation::validate_signer_list_set;
use serde::{Deserialize, Serialize};
use xrpl_types::{SignerEntry, TransactionFlags};

pub const MAX_SIGNER_ENTRIES: usize = 32;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SignerListSetFields {
    #[serde(flatten)]
    pub common: TransactionCommon,
    #[serde(default)]
    pub flags: TransactionFlags,
    /// Weight required for a valid multi-signature; 0 deletes the list.
    pub signer_quorum: u32,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub signer_entries: Vec<SignerEntry>,
}

impl SignerListSetFields {
    pub fn new(common: TransactionCommon, signer_quorum: u32, signer_entries: Vec<SignerEntry>) -> Self {
        Self {
            common,
            flags: TransactionFlags::UNSET,
            signer_quorum,
            signer_entries,
        }
    }

    pub fn delete(common: TransactionCommon) -> Self {
        Self::new(common, 0, Vec::new())
    }
}

transaction_variant! {
    /// A validated SignerListSet.
    SignerListSet(SignerListSetFields) => validate_signer_list_set
}
