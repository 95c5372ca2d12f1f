//! Primitive value types for the XRP Ledger client model.
//!
//! This crate defines the leaf types shared by every other crate in the workspace:
//! addresses, hashes, currency amounts, ledger indices, pagination markers, key blobs,
//! path elements and the flag bitmask families. Each type validates on construction
//! and carries its own JSON wire encoding (see [`codec`]).

pub mod address;
pub mod amount;
pub mod codec;
pub mod error;
pub mod flags;
pub mod hash;
pub mod keys;
pub mod ledger_index;
pub mod marker;
pub mod path;
pub mod signer;

pub use address::Address;
pub use amount::{CurrencyAmount, IssuedCurrencyAmount, XrpCurrencyAmount};
pub use error::{ArithmeticOverflow, FormatError};
pub use flags::{
    AccountRootFlags, AccountSetFlag, OfferCreateFlags, OfferFlags, PaymentChannelClaimFlags,
    PaymentFlags, SignerListFlags, TransactionFlags, TrustSetFlags,
};
pub use hash::Hash256;
pub use keys::{PublicKey, Signature};
pub use ledger_index::LedgerIndex;
pub use marker::Marker;
pub use path::{PathCurrency, PathStep};
pub use signer::SignerEntry;
